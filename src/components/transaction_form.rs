use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::layout::{icon_calendar, icon_plus, icon_receipt, icon_tag};
use crate::api::HttpApi;
use crate::config::SUGGESTION_DEBOUNCE_MS;
use crate::error::FormError;
use crate::form::{today, TransactionDraft};
use crate::models::{NewTransaction, TransactionType, CATEGORIES};
use crate::sequence::RequestSequencer;
use crate::store::suggest_category;

pub enum DraftAction {
    Amount(String),
    Category(String),
    Description(String),
    Date(String),
    Kind(TransactionType),
    Recurring(bool),
    Tags(String),
    Suggested(String),
    Reset(String),
}

impl Reducible for TransactionDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DraftAction::Amount(v) => next.amount = v,
            DraftAction::Category(v) => next.category = v,
            DraftAction::Description(v) => next.description = v,
            DraftAction::Date(v) => next.date = v,
            DraftAction::Kind(kind) => next.kind = kind,
            DraftAction::Recurring(v) => next.recurring = v,
            DraftAction::Tags(v) => next.tags = v,
            DraftAction::Suggested(category) => next.apply_suggestion(&category),
            DraftAction::Reset(date) => next = TransactionDraft::new(date),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub on_add: Callback<NewTransaction>,
    pub on_added: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let draft = use_reducer(|| TransactionDraft::new(today()));
    let suggested = use_state(|| None::<String>);
    let categorizing = use_state(|| false);
    let error = use_state(|| None::<FormError>);
    let api = use_state(HttpApi::default);
    let seq = use_state(RequestSequencer::default);

    {
        let dispatcher = draft.dispatcher();
        let suggested = suggested.clone();
        let categorizing = categorizing.clone();
        let api = (*api).clone();
        let seq = (*seq).clone();
        use_effect_with_deps(
            move |description: &String| {
                let description = description.clone();
                let timeout = Timeout::new(SUGGESTION_DEBOUNCE_MS, move || {
                    if description.trim().is_empty() {
                        seq.invalidate();
                        categorizing.set(false);
                        suggested.set(None);
                        return;
                    }
                    let ticket = seq.issue();
                    categorizing.set(true);
                    spawn_local(async move {
                        let category = suggest_category(&api, &description).await;
                        if !seq.is_current(ticket) {
                            log::debug!("Dropping stale category suggestion #{}", ticket);
                            return;
                        }
                        categorizing.set(false);
                        if let Some(category) = &category {
                            dispatcher.dispatch(DraftAction::Suggested(category.clone()));
                        }
                        suggested.set(category);
                    });
                });
                move || drop(timeout)
            },
            draft.description.clone(),
        );
    }

    let on_input = |make: fn(String) -> DraftAction| {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatcher.dispatch(make(input.value()));
            }
        })
    };

    let on_kind = {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let kind = if select.value() == TransactionType::Income.as_str() {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            dispatcher.dispatch(DraftAction::Kind(kind));
        })
    };

    let on_category = {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(DraftAction::Category(select.value()));
        })
    };

    let on_recurring = {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(DraftAction::Recurring(input.checked()));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let suggested = suggested.clone();
        let categorizing = categorizing.clone();
        let error = error.clone();
        let seq = (*seq).clone();
        let on_add = props.on_add.clone();
        let on_added = props.on_added.clone();
        Callback::from(move |_| match draft.to_new_transaction() {
            Ok(tx) => {
                on_add.emit(tx);
                seq.invalidate();
                draft.dispatch(DraftAction::Reset(today()));
                suggested.set(None);
                categorizing.set(false);
                error.set(None);
                on_added.emit(());
            }
            Err(err) => error.set(Some(err)),
        })
    };

    let input_class = "w-full px-4 py-3 border border-slate-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200";
    let label_class = "block text-sm font-medium text-slate-700 mb-2 flex items-center gap-1";

    html! {
        <div class="bg-white/80 backdrop-blur-sm rounded-2xl p-6 shadow-xl border border-white/20">
            <div class="flex items-center gap-2 mb-6">
                <span class="text-blue-600">{ icon_receipt() }</span>
                <h2 class="text-xl font-semibold text-slate-800">{"Add Transaction"}</h2>
            </div>

            <div class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={label_class}>{"Type"}</label>
                        <select class={input_class} onchange={on_kind}>
                            <option value={TransactionType::Expense.as_str()} selected={draft.kind == TransactionType::Expense}>{"Expense"}</option>
                            <option value={TransactionType::Income.as_str()} selected={draft.kind == TransactionType::Income}>{"Income"}</option>
                        </select>
                    </div>
                    <div>
                        <label class={label_class}>{"Amount"}</label>
                        <input type="number" step="0.01" placeholder="0.00" class={input_class}
                            value={draft.amount.clone()} oninput={on_input(DraftAction::Amount)} />
                    </div>
                </div>

                <div>
                    <label class={label_class}>{"Category"}</label>
                    <select class={input_class} onchange={on_category}>
                        <option value="" selected={draft.category.is_empty()}>{"Select category"}</option>
                        { for CATEGORIES.iter().map(|category| html! {
                            <option key={*category} value={*category} selected={draft.category == *category}>{ *category }</option>
                        }) }
                    </select>
                </div>

                <div>
                    <label class={label_class}>{"Description"}</label>
                    <input type="text" placeholder="Brief description of transaction" class={input_class}
                        value={draft.description.clone()} oninput={on_input(DraftAction::Description)} />
                    {
                        if *categorizing {
                            html! { <p class="mt-2 text-sm text-slate-500">{"Analyzing description..."}</p> }
                        } else if let Some(category) = &*suggested {
                            html! {
                                <p class="mt-2 text-sm text-slate-500">
                                    {"Suggested Category: "}
                                    <span class="font-semibold text-blue-600">{ category.clone() }</span>
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={label_class}>{ icon_calendar() }{"Date"}</label>
                        <input type="date" class={input_class} value={draft.date.clone()} oninput={on_input(DraftAction::Date)} />
                    </div>
                    <div>
                        <label class={label_class}>{ icon_tag() }{"Tags"}</label>
                        <input type="text" placeholder="e.g., groceries, essential" class={input_class}
                            value={draft.tags.clone()} oninput={on_input(DraftAction::Tags)} />
                    </div>
                </div>

                <div class="flex items-center gap-2">
                    <input type="checkbox" id="recurring" checked={draft.recurring} onchange={on_recurring}
                        class="rounded border-slate-300 text-blue-600 focus:ring-blue-500" />
                    <label for="recurring" class="text-sm text-slate-700">{"This is a recurring transaction"}</label>
                </div>

                {
                    if let Some(err) = &*error {
                        html! { <p class="text-sm text-red-500">{ err.to_string() }</p> }
                    } else {
                        html! {}
                    }
                }

                <button type="button" onclick={on_submit}
                    class="w-full bg-gradient-to-r from-blue-600 to-purple-600 text-white py-3 px-6 rounded-xl font-semibold hover:from-blue-700 hover:to-purple-700 transition-all duration-200 flex items-center justify-center gap-2">
                    { icon_plus() }
                    {"Add Transaction"}
                </button>
            </div>
        </div>
    }
}
