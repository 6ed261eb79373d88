use yew::prelude::*;

use super::layout::{icon_alert, icon_lightbulb, icon_sparkles, icon_trending_up, icon_trophy};
use crate::models::{AIInsight, InsightType};
use crate::progress::clamp_percent;

struct InsightColors {
    bg: &'static str,
    border: &'static str,
    icon: &'static str,
    title: &'static str,
}

fn colors_for(kind: InsightType) -> InsightColors {
    let (bg, border, icon, title) = match kind {
        InsightType::Tip => ("bg-blue-50", "border-blue-200", "text-blue-600", "text-blue-800"),
        InsightType::Warning => ("bg-yellow-50", "border-yellow-200", "text-yellow-600", "text-yellow-800"),
        InsightType::Achievement => ("bg-green-50", "border-green-200", "text-green-600", "text-green-800"),
        InsightType::Prediction => ("bg-purple-50", "border-purple-200", "text-purple-600", "text-purple-800"),
        InsightType::Other => ("bg-slate-50", "border-slate-200", "text-slate-600", "text-slate-800"),
    };
    InsightColors {
        bg,
        border,
        icon,
        title,
    }
}

fn icon_for(kind: InsightType) -> Html {
    match kind {
        InsightType::Tip => icon_lightbulb(),
        InsightType::Warning => icon_alert(),
        InsightType::Achievement => icon_trophy(),
        InsightType::Prediction => icon_trending_up(),
        InsightType::Other => icon_sparkles(),
    }
}

#[derive(Properties, PartialEq)]
pub struct AIInsightsPanelProps {
    pub insights: Vec<AIInsight>,
}

#[function_component(AIInsightsPanel)]
pub fn ai_insights_panel(props: &AIInsightsPanelProps) -> Html {
    if props.insights.is_empty() {
        return html! { <p class="text-sm text-slate-500">{"No insights yet. Add a few transactions to get started."}</p> };
    }

    html! {
        <div class="space-y-4">
            { for props.insights.iter().enumerate().map(|(idx, insight)| {
                let colors = colors_for(insight.kind);
                let confidence = clamp_percent(insight.confidence * 100.0);
                let key = insight.id.clone().unwrap_or_else(|| idx.to_string());
                html! {
                    <div key={key} class={classes!("p-4", "rounded-xl", "border-2", colors.bg, colors.border)}>
                        <div class="flex items-start gap-3">
                            <div class={classes!("p-2", "rounded-lg", "bg-white", colors.icon)}>{ icon_for(insight.kind) }</div>
                            <div class="flex-1">
                                <h4 class={classes!("font-semibold", "mb-1", colors.title)}>{ insight.title.clone() }</h4>
                                <p class="text-sm text-slate-600 mb-2">{ insight.description.clone() }</p>
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center gap-2">
                                        <span class="text-xs text-slate-500">{ format!("Confidence: {:.0}%", confidence) }</span>
                                        <div class="w-16 bg-slate-200 rounded-full h-1">
                                            <div class="h-1 bg-blue-500 rounded-full" style={format!("width: {}%", confidence)}></div>
                                        </div>
                                    </div>
                                    {
                                        match &insight.action {
                                            Some(action) => html! {
                                                <button type="button" class={classes!("text-xs", "font-medium", "hover:underline", colors.icon)}>{ action.clone() }</button>
                                            },
                                            None => html! {},
                                        }
                                    }
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
