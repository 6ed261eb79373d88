use yew::prelude::*;

use super::charts::{BarChart, HorizontalBarChart, LineChart, PieChart, Series};
use super::layout::{card, page_shell, use_currency_symbol};
use crate::aggregate::{
    category_shares, category_spending, income_vs_expense, monthly_spending, total_allocated,
};
use crate::format::format_currency;
use crate::store::BudgetData;

#[derive(Properties, PartialEq)]
pub struct AnalyticsPageProps {
    pub data: BudgetData,
}

#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &AnalyticsPageProps) -> Html {
    let symbol = use_currency_symbol();
    let data = &props.data;
    let transactions = data.transactions.as_slice();

    let allocated = total_allocated(&data.budgets);
    let spent = data.summary.total_expenses;
    let budget_vs_actual = vec![
        ("Allocated Budget".to_string(), allocated),
        ("Total Expenses".to_string(), spent),
    ];

    let flows = income_vs_expense(transactions);
    let labels: Vec<String> = flows.iter().map(|f| f.month.clone()).collect();
    let series = vec![
        Series {
            name: "Income",
            color: "#82ca9d",
            values: flows.iter().map(|f| f.income).collect(),
        },
        Series {
            name: "Expense",
            color: "#ff7300",
            values: flows.iter().map(|f| f.expense).collect(),
        },
    ];

    let slices = category_shares(&category_spending(transactions));

    let top_categories = if data.spending_patterns.is_empty() {
        html! { <p class="text-slate-500 text-sm">{"No spending data to display yet."}</p> }
    } else {
        html! {
            <ul class="space-y-2">
                { for data.spending_patterns.iter().enumerate().map(|(i, pattern)| html! {
                    <li key={pattern.category.clone()} class="flex items-center justify-between text-sm text-slate-600">
                        <span class="font-medium">{ format!("{}. {}", i + 1, pattern.category) }</span>
                        <span>{ format!("{} ({}%)", format_currency(pattern.amount, &symbol), pattern.percentage) }</span>
                    </li>
                }) }
            </ul>
        }
    };

    page_shell(
        "Financial Analytics",
        html! {
            <>
                <div class="mb-8">
                    { card(html! { {"Budget vs. Actual Spending"} }, html! {
                        <>
                            <HorizontalBarChart data={budget_vs_actual} color="#82ca9d" currency_symbol={Some(symbol.clone())} />
                            <div class="text-center mt-4 text-sm text-slate-600">
                                { format!(
                                    "Total Allocated: {} | Total Spent: {}",
                                    format_currency(allocated, &symbol),
                                    format_currency(spent, &symbol)
                                ) }
                            </div>
                        </>
                    }) }
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    { card(html! { {"Monthly Spending"} }, html! {
                        <BarChart data={monthly_spending(transactions)} color="#8884d8" currency_symbol={Some(symbol.clone())} />
                    }) }
                    { card(html! { {"Income vs. Expense"} }, html! {
                        <LineChart labels={labels} series={series} />
                    }) }
                    <div class="lg:col-span-2">
                        { card(html! { {"Spending by Category"} }, html! {
                            <>
                                <PieChart slices={slices} />
                                <div class="mt-6">
                                    <h3 class="text-lg font-semibold text-slate-700 mb-3">{"Top Spending Categories"}</h3>
                                    { top_categories }
                                </div>
                            </>
                        }) }
                    </div>
                </div>
            </>
        },
    )
}
