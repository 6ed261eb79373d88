use yew::prelude::*;

use crate::chart::{
    arc_layout, column_layout, cycle, label_point, line_path, line_series, path_attr, pie_slice_path,
    row_layout, PIE_COLORS,
};
use crate::format::format_currency;

const PLOT_WIDTH: f64 = 400.0;
const PLOT_HEIGHT: f64 = 200.0;
const AXIS_GUTTER: f64 = 24.0;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<(String, f64)>,
    pub color: &'static str,
    #[prop_or_default]
    pub currency_symbol: Option<String>,
}

fn value_text(symbol: &Option<String>, value: f64) -> String {
    match symbol {
        Some(symbol) => format_currency(value, symbol),
        None => format!("{:.2}", value),
    }
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    if props.data.is_empty() {
        return html! { <p class="text-sm text-slate-500">{"No data to display yet."}</p> };
    }
    let values: Vec<f64> = props.data.iter().map(|(_, v)| *v).collect();
    let bars = column_layout(&values, PLOT_WIDTH, PLOT_HEIGHT);

    html! {
        <svg class="w-full h-64" viewBox={format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT + AXIS_GUTTER)} preserveAspectRatio="none">
            <line x1="0" y1={PLOT_HEIGHT.to_string()} x2={PLOT_WIDTH.to_string()} y2={PLOT_HEIGHT.to_string()} stroke="#e2e8f0" />
            { for bars.iter().zip(props.data.iter()).map(|(bar, (label, value))| html! {
                <g>
                    <rect x={format!("{:.2}", bar.x)} y={format!("{:.2}", bar.y)} width={format!("{:.2}", bar.width)} height={format!("{:.2}", bar.height)} rx="4" fill={props.color}>
                        <title>{ format!("{}: {}", label, value_text(&props.currency_symbol, *value)) }</title>
                    </rect>
                    <text x={format!("{:.2}", bar.x + bar.width / 2.0)} y={format!("{:.2}", PLOT_HEIGHT + 16.0)} text-anchor="middle" font-size="11" fill="#475569">{ label.clone() }</text>
                </g>
            }) }
        </svg>
    }
}

#[function_component(HorizontalBarChart)]
pub fn horizontal_bar_chart(props: &BarChartProps) -> Html {
    let values: Vec<f64> = props.data.iter().map(|(_, v)| *v).collect();
    let label_width = 120.0;
    let rows = row_layout(&values, PLOT_WIDTH - label_width, 100.0);

    html! {
        <svg class="w-full h-40" viewBox={format!("0 0 {} 100", PLOT_WIDTH)} preserveAspectRatio="none">
            { for rows.iter().zip(props.data.iter()).map(|(row, (label, value))| html! {
                <g>
                    <text x="0" y={format!("{:.2}", row.y + row.height / 2.0 + 4.0)} font-size="11" fill="#475569">{ label.clone() }</text>
                    <rect x={format!("{:.2}", label_width)} y={format!("{:.2}", row.y)} width={format!("{:.2}", row.width)} height={format!("{:.2}", row.height)} fill={props.color}>
                        <title>{ format!("{}: {}", label, value_text(&props.currency_symbol, *value)) }</title>
                    </rect>
                </g>
            }) }
        </svg>
    }
}

#[derive(Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    if props.labels.is_empty() {
        return html! { <p class="text-sm text-slate-500">{"No data to display yet."}</p> };
    }
    let raw: Vec<&[f64]> = props.series.iter().map(|s| s.values.as_slice()).collect();
    let lines = line_series(&raw, PLOT_WIDTH, PLOT_HEIGHT);
    let step = if props.labels.len() > 1 {
        PLOT_WIDTH / (props.labels.len() - 1) as f64
    } else {
        0.0
    };

    html! {
        <div>
            <svg class="w-full h-64 overflow-visible" viewBox={format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT + AXIS_GUTTER)} preserveAspectRatio="none">
                <line x1="0" y1={PLOT_HEIGHT.to_string()} x2={PLOT_WIDTH.to_string()} y2={PLOT_HEIGHT.to_string()} stroke="#e2e8f0" />
                { for props.series.iter().zip(lines.iter()).map(|(series, points)| html! {
                    <path d={path_attr(line_path(points))} fill="none" stroke={series.color} stroke-width="2" />
                }) }
                { for props.labels.iter().enumerate().map(|(i, label)| {
                    let x = if props.labels.len() > 1 { i as f64 * step } else { PLOT_WIDTH / 2.0 };
                    html! {
                        <text x={format!("{:.2}", x)} y={format!("{:.2}", PLOT_HEIGHT + 16.0)} text-anchor="middle" font-size="11" fill="#475569">{ label.clone() }</text>
                    }
                }) }
            </svg>
            <div class="flex gap-4 justify-center text-sm mt-2">
                { for props.series.iter().map(|series| html! {
                    <span class="flex items-center gap-1">
                        <span class="inline-block w-3 h-3 rounded-full" style={format!("background-color: {}", series.color)}></span>
                        { series.name }
                    </span>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    /// Label and share of the whole, in percent.
    pub slices: Vec<(String, f64)>,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    if props.slices.is_empty() {
        return html! { <p class="text-sm text-slate-500">{"No spending data to display yet."}</p> };
    }
    let layout = arc_layout(&props.slices, 100.0);

    html! {
        <svg class="w-full h-72" viewBox="0 0 300 300">
            { for layout.segments.iter().zip(props.slices.iter()).enumerate().map(|(i, (segment, (_, pct)))| {
                let (lx, ly) = label_point(150.0, 150.0, 120.0, segment.start, segment.end);
                html! {
                    <g>
                        <path d={path_attr(pie_slice_path(150.0, 150.0, 100.0, segment.start, segment.end))} fill={cycle(&PIE_COLORS, i)} stroke="#fff" />
                        <text x={format!("{:.2}", lx)} y={format!("{:.2}", ly)} text-anchor="middle" font-size="10" fill="#334155">
                            { format!("{} ({:.0}%)", segment.label, pct) }
                        </text>
                    </g>
                }
            }) }
        </svg>
    }
}
