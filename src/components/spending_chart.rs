use yew::prelude::*;

use super::charts::BarChart;
use super::layout::{icon_minus, icon_trending_down, icon_trending_up, use_currency_symbol};
use crate::chart::{arc_layout, cycle, DONUT_COLORS};
use crate::format::format_currency;
use crate::models::{SpendingPattern, Trend};

const RING_RADIUS: f64 = 35.0;

fn trend_icon(trend: Trend) -> Html {
    match trend {
        Trend::Up => html! { <span class="text-red-500">{ icon_trending_up() }</span> },
        Trend::Down => html! { <span class="text-green-500">{ icon_trending_down() }</span> },
        Trend::Stable => html! { <span class="text-slate-500">{ icon_minus() }</span> },
    }
}

#[derive(Properties, PartialEq)]
pub struct SpendingChartProps {
    pub data: Vec<SpendingPattern>,
}

#[function_component(SpendingChart)]
pub fn spending_chart(props: &SpendingChartProps) -> Html {
    let symbol = use_currency_symbol();
    let total_spent: f64 = props.data.iter().map(|p| p.amount).sum();
    let layout = arc_layout(
        &props
            .data
            .iter()
            .map(|p| (p.category.clone(), p.percentage))
            .collect::<Vec<_>>(),
        RING_RADIUS,
    );
    let bars: Vec<(String, f64)> = props
        .data
        .iter()
        .map(|p| (p.category.clone(), p.amount))
        .collect();

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-2xl font-bold text-slate-800">{ format_currency(total_spent, &symbol) }</h3>
                <p class="text-slate-500">{"Total Spent"}</p>
            </div>

            <div class="flex items-center justify-center">
                <div class="relative w-48 h-48">
                    <svg class="w-full h-full transform -rotate-90" viewBox="0 0 100 100">
                        { for layout.segments.iter().enumerate().map(|(i, segment)| html! {
                            <circle key={segment.label.clone()} cx="50" cy="50" r={RING_RADIUS.to_string()} fill="transparent"
                                stroke={cycle(&DONUT_COLORS, i).0} stroke-width="8"
                                stroke-dasharray={format!("{} {}", segment.dash, layout.circumference)}
                                stroke-dashoffset={segment.offset.to_string()} />
                        }) }
                    </svg>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class="text-center">
                            <div class="text-lg font-bold text-slate-800">{ format_currency(total_spent, &symbol) }</div>
                            <div class="text-sm text-slate-600">{"Total Spent"}</div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="space-y-4">
                { for props.data.iter().enumerate().map(|(i, item)| html! {
                    <div key={item.category.clone()} class="flex items-center gap-4">
                        <div class={classes!("w-4", "h-4", "rounded-full", cycle(&DONUT_COLORS, i).1)}></div>
                        <p class="flex-1 text-slate-700">{ item.category.clone() }</p>
                        <p class="text-slate-700 font-semibold">{ format!("{:.0}%", item.percentage) }</p>
                        <p class="text-slate-500">{ format_currency(item.amount, &symbol) }</p>
                        { trend_icon(item.trend) }
                    </div>
                }) }
            </div>

            {
                if bars.is_empty() {
                    html! {}
                } else {
                    html! { <div class="mt-8"><BarChart data={bars} color="#6366F1" currency_symbol={Some(symbol.clone())} /></div> }
                }
            }
        </div>
    }
}
