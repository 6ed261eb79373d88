use yew::prelude::*;

use super::layout::{icon_settings, page_shell};
use crate::config::{api_base_url, currency_symbol_for, AppSettings, CURRENCIES};

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();

    let current_currency = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| AppSettings::default().currency_code);

    let on_currency_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let next = AppSettings::for_currency(&input.value());
                log::info!("Switching display currency to {}", next.currency_code);
                settings.set(next);
            }
        })
    };

    page_shell(
        "Settings",
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-white/80 backdrop-blur-sm rounded-2xl p-6 shadow-lg border border-white/20">
                    <h2 class="text-xl font-semibold text-slate-800 mb-6 flex items-center gap-2">{ icon_settings() }{"Preferences"}</h2>
                    <label class="block text-sm font-medium text-slate-700 mb-2">{"Currency"}</label>
                    <select onchange={on_currency_change}
                        class="w-full px-4 py-3 border border-slate-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent">
                        { for CURRENCIES.iter().map(|(code, label)| html! {
                            <option key={*code} value={*code} selected={*code == current_currency}>{ *label }</option>
                        }) }
                    </select>
                    <p class="text-xs text-slate-500 mt-2">
                        { format!("Amounts are shown in {}. Stored values are not converted.", currency_symbol_for(&current_currency)) }
                    </p>
                </div>

                <div class="bg-white/80 backdrop-blur-sm rounded-2xl p-6 shadow-lg border border-white/20">
                    <h2 class="text-xl font-semibold text-slate-800 mb-6">{"Finance Service"}</h2>
                    <p class="text-sm text-slate-600">{"Transactions, budgets and AI insights are read from:"}</p>
                    <p class="mt-2 font-mono text-sm text-blue-600 break-all">{ api_base_url() }</p>
                </div>
            </div>
        },
    )
}
