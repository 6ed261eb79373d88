use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::layout::{
    icon_arrow_down_circle, icon_arrow_up_circle, icon_calendar, icon_filter, icon_receipt,
    icon_search, icon_tag, use_currency_symbol,
};
use super::transaction_form::TransactionForm;
use crate::filter::{distinct_categories, KindFilter, TransactionFilter};
use crate::format::{format_currency, format_date};
use crate::models::{NewTransaction, Transaction};

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let filter = use_state(TransactionFilter::default);
    let symbol = use_currency_symbol();

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                filter.set(TransactionFilter {
                    search: input.value(),
                    ..(*filter).clone()
                });
            }
        })
    };

    let on_kind = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(TransactionFilter {
                kind: KindFilter::from_value(&select.value()),
                ..(*filter).clone()
            });
        })
    };

    let on_category = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let category = if value == "all" { None } else { Some(value) };
            filter.set(TransactionFilter {
                category,
                ..(*filter).clone()
            });
        })
    };

    let categories = distinct_categories(&props.transactions);
    let visible = filter.apply(&props.transactions);
    let control_class = "w-full px-4 py-3 border border-slate-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200";

    let rows: Html = visible
        .iter()
        .enumerate()
        .map(|(index, tx)| {
            let key = tx.id.map(|id| id.to_string()).unwrap_or_else(|| format!("row-{}", index));
            let (badge, amount_class, icon, sign) = if tx.is_income() {
                ("bg-green-100", "text-green-600", icon_arrow_up_circle(), "+")
            } else {
                ("bg-red-100", "text-red-600", icon_arrow_down_circle(), "-")
            };
            html! {
                <div key={key} class="flex items-center justify-between p-4 bg-slate-50 rounded-xl border border-slate-200 hover:shadow-md transition-all duration-200">
                    <div class="flex items-center gap-4">
                        <div class={classes!("p-2", "rounded-full", badge, amount_class)}>{ icon }</div>
                        <div>
                            <h4 class="font-semibold text-slate-800">{ tx.description.clone() }</h4>
                            <div class="flex items-center gap-3 text-sm text-slate-600">
                                <span class="flex items-center gap-1">{ icon_filter() }{ tx.category.clone() }</span>
                                <span class="flex items-center gap-1">{ icon_calendar() }{ format_date(&tx.date) }</span>
                                {
                                    match tx.tags.as_deref() {
                                        Some(tags) if !tags.is_empty() => html! {
                                            <span class="flex items-center gap-1">{ icon_tag() }{ tags }</span>
                                        },
                                        _ => html! {},
                                    }
                                }
                            </div>
                        </div>
                    </div>
                    <div class="text-right">
                        <div class={classes!("font-bold", "text-lg", amount_class)}>
                            { format!("{}{}", sign, format_currency(tx.amount, &symbol)) }
                        </div>
                        {
                            if tx.recurring {
                                html! { <div class="text-xs text-blue-600 font-medium">{"Recurring"}</div> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            }
        })
        .collect();

    html! {
        <div class="bg-white/80 backdrop-blur-sm rounded-2xl p-6 shadow-xl border border-white/20">
            <div class="flex items-center gap-2 mb-6">
                <span class="text-blue-600">{ icon_receipt() }</span>
                <h2 class="text-xl font-semibold text-slate-800">{"Transaction History"}</h2>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                <div class="relative flex items-center">
                    <span class="absolute left-3 text-slate-400">{ icon_search() }</span>
                    <input type="text" placeholder="Search transactions..."
                        class="w-full pl-10 pr-4 py-3 border border-slate-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200"
                        value={filter.search.clone()} oninput={on_search} />
                </div>
                <select class={control_class} onchange={on_kind}>
                    <option value="all" selected={filter.kind == KindFilter::All}>{"All Types"}</option>
                    <option value="income" selected={filter.kind == KindFilter::from_value("income")}>{"Income"}</option>
                    <option value="expense" selected={filter.kind == KindFilter::from_value("expense")}>{"Expense"}</option>
                </select>
                <select class={control_class} onchange={on_category}>
                    <option value="all" selected={filter.category.is_none()}>{"All Categories"}</option>
                    { for categories.into_iter().map(|category| {
                        let selected = filter.category.as_deref() == Some(category.as_str());
                        html! { <option key={category.clone()} value={category.clone()} selected={selected}>{ category }</option> }
                    }) }
                </select>
            </div>

            <div class="space-y-3 max-h-96 overflow-y-auto">
                {
                    if visible.is_empty() {
                        html! { <div class="text-center py-8 text-slate-500">{"No transactions found matching your criteria."}</div> }
                    } else {
                        rows
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    pub transactions: Vec<Transaction>,
    pub on_add: Callback<NewTransaction>,
    pub on_added: Callback<()>,
}

#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 lg:pl-64">
            <div class="max-w-7xl mx-auto px-4 py-8 pt-20 lg:pt-8">
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-1">
                        <TransactionForm on_add={props.on_add.clone()} on_added={props.on_added.clone()} />
                    </div>
                    <div class="lg:col-span-2">
                        <TransactionList transactions={props.transactions.clone()} />
                    </div>
                </div>
            </div>
        </div>
    }
}
