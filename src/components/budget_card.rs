use yew::prelude::*;

use super::layout::{icon_alert, icon_check_circle, icon_clock, use_currency_symbol};
use crate::format::format_currency;
use crate::models::Budget;
use crate::progress::{BudgetLevel, BudgetProgress};

#[derive(Properties, PartialEq)]
pub struct BudgetCardProps {
    pub budget: Budget,
}

#[function_component(BudgetCard)]
pub fn budget_card(props: &BudgetCardProps) -> Html {
    let symbol = use_currency_symbol();
    let budget = &props.budget;
    let progress = BudgetProgress::of(budget);

    let status_icon = match progress.level {
        BudgetLevel::Critical => html! { <span class="text-red-500">{ icon_alert() }</span> },
        BudgetLevel::Caution => html! { <span class="text-yellow-500">{ icon_clock() }</span> },
        BudgetLevel::Healthy => html! { <span class="text-green-500">{ icon_check_circle() }</span> },
    };
    let remaining_class = if progress.remaining >= 0.0 {
        "font-semibold text-green-600"
    } else {
        "font-semibold text-red-600"
    };

    html! {
        <div class="bg-gradient-to-br from-white to-slate-50 rounded-xl p-4 border border-slate-200 hover:shadow-md transition-all duration-300">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold text-slate-800">{ budget.category.clone() }</h3>
                { status_icon }
            </div>
            <div class="space-y-2">
                <div class="flex justify-between text-sm">
                    <span class="text-slate-600">{"Spent"}</span>
                    <span class={classes!("font-semibold", progress.level.text_class())}>{ format_currency(budget.spent, &symbol) }</span>
                </div>
                <div class="w-full bg-slate-200 rounded-full h-2">
                    <div class={classes!("h-2", "rounded-full", "transition-all", "duration-500", progress.level.bar_class())}
                        style={format!("width: {}%", progress.bar_width())}></div>
                </div>
                <div class="flex justify-between text-sm">
                    <span class="text-slate-600">{"Remaining"}</span>
                    <span class={remaining_class}>{ format_currency(progress.remaining, &symbol) }</span>
                </div>
                <div class="text-xs text-slate-500 mt-2">
                    { format!("{:.1}% of {} used ({})", progress.percentage, format_currency(budget.allocated, &symbol), budget.period.as_str()) }
                </div>
            </div>
        </div>
    }
}
