use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::layout::{icon_close, icon_plus, use_currency_symbol};
use crate::error::FormError;
use crate::form::{parse_allocation, BudgetDraft};
use crate::models::{Budget, BudgetPeriod, NewBudget};

#[derive(Properties, PartialEq)]
pub struct BudgetSettingsModalProps {
    pub budgets: Vec<Budget>,
    pub on_save: Callback<Vec<Budget>>,
    pub on_close: Callback<()>,
}

/// Allocation editor. Inputs keep the raw text; it is only parsed when saving.
#[function_component(BudgetSettingsModal)]
pub fn budget_settings_modal(props: &BudgetSettingsModalProps) -> Html {
    let symbol = use_currency_symbol();
    let entries = {
        let budgets = props.budgets.clone();
        use_state(move || {
            budgets
                .into_iter()
                .map(|budget| {
                    let text = budget.allocated.to_string();
                    (budget, text)
                })
                .collect::<Vec<(Budget, String)>>()
        })
    };

    let on_edit = |id: i64| {
        let entries = entries.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                log::debug!("Editing allocation for budget {}", id);
                let next = entries
                    .iter()
                    .map(|(budget, text)| {
                        if budget.id == id {
                            (budget.clone(), input.value())
                        } else {
                            (budget.clone(), text.clone())
                        }
                    })
                    .collect();
                entries.set(next);
            }
        })
    };

    let on_save = {
        let entries = entries.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            let budgets = entries
                .iter()
                .map(|(budget, text)| Budget {
                    allocated: parse_allocation(text),
                    ..budget.clone()
                })
                .collect();
            on_save.emit(budgets);
            on_close.emit(());
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4">
            <div class="bg-white rounded-xl shadow-lg w-full max-w-2xl p-6 relative">
                <button onclick={close.clone()} class="absolute top-3 right-3 text-slate-500 hover:text-slate-700 transition-colors">
                    { icon_close() }
                </button>
                <h2 class="text-2xl font-bold text-slate-800 mb-6">{"Set Budget Allocations"}</h2>

                <div class="space-y-4">
                    { for entries.iter().map(|(budget, text)| html! {
                        <div key={budget.id} class="flex items-center justify-between p-3 bg-slate-50 rounded-lg border border-slate-200">
                            <label for={budget.category.clone()} class="font-medium text-slate-700 w-1/3">{ budget.category.clone() }</label>
                            <div class="relative flex-1">
                                <span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-slate-500">{ symbol.clone() }</span>
                                <input type="text" id={budget.category.clone()} value={text.clone()} oninput={on_edit(budget.id)}
                                    class="w-full pl-8 pr-3 py-2 border border-slate-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200" />
                            </div>
                        </div>
                    }) }

                    <div class="flex justify-end gap-3 pt-4">
                        <button type="button" onclick={close}
                            class="px-5 py-2 rounded-lg border border-slate-300 text-slate-700 hover:bg-slate-100 transition-colors">
                            {"Cancel"}
                        </button>
                        <button type="button" onclick={on_save}
                            class="px-5 py-2 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 transition-colors shadow-md">
                            {"Save Budgets"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AddBudgetFormProps {
    pub on_add: Callback<NewBudget>,
}

#[function_component(AddBudgetForm)]
pub fn add_budget_form(props: &AddBudgetFormProps) -> Html {
    let draft = use_state(BudgetDraft::default);
    let error = use_state(|| None::<FormError>);

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(BudgetDraft {
                    category: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_allocated = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(BudgetDraft {
                    allocated: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_period = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(BudgetDraft {
                period: BudgetPeriod::from_value(&select.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_| match draft.to_new_budget() {
            Ok(budget) => {
                on_add.emit(budget);
                draft.set(BudgetDraft::default());
                error.set(None);
            }
            Err(err) => error.set(Some(err)),
        })
    };

    let input_class = "w-full px-3 py-2 border border-slate-300 rounded-lg focus:ring-2 focus:ring-blue-500";

    html! {
        <div class="mt-6 border-t border-slate-200 pt-4">
            <h3 class="text-sm font-semibold text-slate-700 mb-3">{"Add Budget"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                <input class={input_class} placeholder="Category" value={draft.category.clone()} oninput={on_category} />
                <input class={input_class} type="number" step="0.01" placeholder="Allocated" value={draft.allocated.clone()} oninput={on_allocated} />
                <select class={input_class} onchange={on_period}>
                    { for [BudgetPeriod::Weekly, BudgetPeriod::Monthly, BudgetPeriod::Yearly].iter().map(|p| html! {
                        <option value={p.as_str()} selected={*p == draft.period}>{ p.as_str() }</option>
                    }) }
                </select>
                <button type="button" onclick={on_submit}
                    class="flex items-center justify-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors shadow-md">
                    { icon_plus() }{"Add"}
                </button>
            </div>
            {
                if let Some(err) = &*error {
                    html! { <p class="mt-2 text-sm text-red-500">{ err.to_string() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
