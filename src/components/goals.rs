use yew::prelude::*;

use super::layout::{card, icon_check_circle, icon_flag, icon_plus, icon_target, page_shell, use_currency_symbol};
use crate::error::FormError;
use crate::form::GoalDraft;
use crate::format::{format_currency, format_date};
use crate::models::{Goal, GoalPriority, NewGoal};
use crate::progress::GoalProgress;

fn priority_class(priority: GoalPriority) -> &'static str {
    match priority {
        GoalPriority::High => "bg-red-100 text-red-800",
        GoalPriority::Medium => "bg-yellow-100 text-yellow-800",
        GoalPriority::Low => "bg-blue-100 text-blue-800",
    }
}

#[derive(Properties, PartialEq)]
pub struct GoalsWidgetProps {
    pub goals: Vec<Goal>,
}

#[function_component(GoalsWidget)]
pub fn goals_widget(props: &GoalsWidgetProps) -> Html {
    let symbol = use_currency_symbol();

    if props.goals.is_empty() {
        return html! { <p class="text-slate-500">{"No financial goals set yet. Start by adding one!"}</p> };
    }

    html! {
        <div class="space-y-6">
            { for props.goals.iter().map(|goal| {
                let progress = GoalProgress::of(goal);
                let bar = if progress.completed { "bg-green-500" } else { "bg-blue-500" };
                html! {
                    <div key={goal.id.clone()} class="bg-white rounded-lg p-5 shadow-sm border border-slate-200">
                        <div class="flex items-center justify-between mb-3">
                            <h3 class="text-lg font-semibold text-slate-800">{ goal.title.clone() }</h3>
                            <span class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-medium", priority_class(goal.priority))}>
                                { format!("{} priority", goal.priority.as_str()) }
                            </span>
                        </div>
                        <p class="text-slate-600 text-sm mb-4">{ goal.category.clone() }</p>
                        <div class="mb-4">
                            <div class="flex justify-between items-center text-sm text-slate-700 mb-1">
                                <span>{"Progress"}</span>
                                <span class="font-semibold">
                                    { format!("{} / {}", format_currency(goal.current_amount, &symbol), format_currency(goal.target_amount, &symbol)) }
                                </span>
                            </div>
                            <div class="w-full bg-slate-200 rounded-full h-2.5">
                                <div class={classes!("h-2.5", "rounded-full", bar)} style={format!("width: {}%", progress.percentage)}></div>
                            </div>
                            <div class="flex justify-between items-center text-xs text-slate-500 mt-1">
                                {
                                    if progress.completed {
                                        html! { <span class="text-green-600 flex items-center gap-1">{ icon_check_circle() }{"Goal Achieved!"}</span> }
                                    } else {
                                        html! { <span>{ format!("{} remaining to reach goal", format_currency(progress.remaining, &symbol)) }</span> }
                                    }
                                }
                                <span>{ format!("{:.1}% complete", progress.percentage) }</span>
                            </div>
                        </div>
                        <div class="flex items-center gap-2 text-sm text-slate-600">
                            { icon_flag() }
                            { format!("Deadline: {}", format_date(&goal.deadline)) }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GoalsPageProps {
    pub goals: Vec<Goal>,
    pub on_add: Callback<NewGoal>,
}

#[function_component(GoalsPage)]
pub fn goals_page(props: &GoalsPageProps) -> Html {
    let draft = use_state(GoalDraft::default);
    let error = use_state(|| None::<FormError>);

    let edit = |apply: fn(&mut GoalDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            }
        })
    };

    let on_priority = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.priority = GoalPriority::from_value(&select.value());
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_| match draft.to_new_goal() {
            Ok(goal) => {
                on_add.emit(goal);
                draft.set(GoalDraft::default());
                error.set(None);
            }
            Err(err) => error.set(Some(err)),
        })
    };

    let input_class = "w-full px-4 py-3 border border-slate-300 rounded-xl focus:ring-2 focus:ring-blue-500";

    page_shell(
        "Goals",
        html! {
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-1">
                    { card(html! { <>{ icon_plus() }{"New Goal"}</> }, html! {
                        <div class="space-y-4">
                            <input class={input_class} placeholder="Title" value={draft.title.clone()}
                                oninput={edit(|d, v| d.title = v)} />
                            <input class={input_class} type="number" step="0.01" placeholder="Target amount" value={draft.target_amount.clone()}
                                oninput={edit(|d, v| d.target_amount = v)} />
                            <input class={input_class} type="number" step="0.01" placeholder="Saved so far" value={draft.current_amount.clone()}
                                oninput={edit(|d, v| d.current_amount = v)} />
                            <input class={input_class} type="date" value={draft.deadline.clone()}
                                oninput={edit(|d, v| d.deadline = v)} />
                            <input class={input_class} placeholder="Category" value={draft.category.clone()}
                                oninput={edit(|d, v| d.category = v)} />
                            <select class={input_class} onchange={on_priority}>
                                { for [GoalPriority::Low, GoalPriority::Medium, GoalPriority::High].iter().map(|p| html! {
                                    <option value={p.as_str()} selected={*p == draft.priority}>{ p.as_str() }</option>
                                }) }
                            </select>
                            {
                                if let Some(err) = &*error {
                                    html! { <p class="text-sm text-red-500">{ err.to_string() }</p> }
                                } else {
                                    html! {}
                                }
                            }
                            <button type="button" onclick={on_submit}
                                class="w-full bg-gradient-to-r from-blue-600 to-purple-600 text-white py-3 px-6 rounded-xl font-semibold">
                                {"Add Goal"}
                            </button>
                        </div>
                    }) }
                </div>
                <div class="lg:col-span-2">
                    { card(html! { <>{ icon_target() }{"Financial Goals"}</> }, html! { <GoalsWidget goals={props.goals.clone()} /> }) }
                </div>
            </div>
        },
    )
}
