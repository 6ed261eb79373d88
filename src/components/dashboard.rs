use yew::prelude::*;

use super::budget_card::BudgetCard;
use super::budget_settings::{AddBudgetForm, BudgetSettingsModal};
use super::goals::GoalsWidget;
use super::insights::AIInsightsPanel;
use super::layout::{
    card, icon_brain, icon_settings, icon_target, icon_trending_up, use_currency_symbol, StatCard,
    StatIcon, StatTone,
};
use super::spending_chart::SpendingChart;
use crate::format::format_currency;
use crate::store::BudgetData;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub data: BudgetData,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let data = &props.data;
    let symbol = use_currency_symbol();
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let summary = data.summary;
    let balance_tone = if summary.net_balance >= 0.0 {
        StatTone::Positive
    } else {
        StatTone::Negative
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 lg:pl-64">
            <div class="max-w-7xl mx-auto px-4 py-8 pt-20 lg:pt-8">
                <div class="mb-8">
                    <h1 class="text-4xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {"Financial Dashboard"}
                    </h1>
                    <p class="text-slate-600 mt-2">{"AI-powered insights for smarter spending"}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                    <StatCard title="Total Income" value={format_currency(summary.total_income, &symbol)}
                        tone={StatTone::Positive} icon={StatIcon::Income} />
                    <StatCard title="Total Expenses" value={format_currency(summary.total_expenses, &symbol)}
                        tone={StatTone::Negative} icon={StatIcon::Expenses} />
                    <StatCard title="Net Balance" value={format_currency(summary.net_balance, &symbol)}
                        tone={balance_tone} icon={StatIcon::Balance} />
                    <StatCard title="Active Goals" value={data.goals.len().to_string()}
                        tone={StatTone::Neutral} icon={StatIcon::Goals} />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-8">
                        { card(
                            html! { <><span class="text-blue-600">{ icon_trending_up() }</span>{"Spending Analysis"}</> },
                            html! { <SpendingChart data={(*data.spending_patterns).clone()} /> },
                        ) }

                        <div class="bg-white/80 backdrop-blur-sm rounded-2xl p-6 shadow-lg border border-white/20">
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-xl font-semibold text-slate-800">{"Budget Overview"}</h2>
                                <button onclick={open_modal}
                                    class="flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors shadow-md">
                                    { icon_settings() }
                                    {"Set Budgets"}
                                </button>
                            </div>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                { for data.budgets.iter().map(|budget| html! {
                                    <BudgetCard key={budget.id} budget={budget.clone()} />
                                }) }
                            </div>
                            <AddBudgetForm on_add={data.add_budget.clone()} />
                        </div>
                    </div>

                    <div class="space-y-8">
                        { card(
                            html! { <><span class="text-purple-600">{ icon_brain() }</span>{"AI Insights"}</> },
                            html! { <AIInsightsPanel insights={(*data.insights).clone()} /> },
                        ) }
                        { card(
                            html! { <><span class="text-green-600">{ icon_target() }</span>{"Financial Goals"}</> },
                            html! { <GoalsWidget goals={(*data.goals).clone()} /> },
                        ) }
                    </div>
                </div>
            </div>

            {
                if *modal_open {
                    html! {
                        <BudgetSettingsModal
                            budgets={(*data.budgets).clone()}
                            on_save={data.update_budgets.clone()}
                            on_close={close_modal} />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
