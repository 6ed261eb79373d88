mod aggregate;
mod api;
mod chart;
mod components;
mod config;
mod error;
mod filter;
mod form;
mod format;
mod models;
mod progress;
mod sequence;
mod store;

use yew::prelude::*;

use components::analytics::AnalyticsPage;
use components::dashboard::Dashboard;
use components::goals::GoalsPage;
use components::layout::{Navigation, Tab};
use components::settings::SettingsPage;
use components::transaction_list::TransactionsPage;
use config::AppSettings;
use store::use_budget_data;

#[function_component(App)]
fn app() -> Html {
    let settings = use_state(AppSettings::default);
    let active_tab = use_state(|| Tab::Dashboard);
    let data = use_budget_data();

    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let on_transaction_added = {
        let active_tab = active_tab.clone();
        Callback::from(move |_| active_tab.set(Tab::Transactions))
    };

    let content = match *active_tab {
        Tab::Dashboard => html! { <Dashboard data={data.clone()} /> },
        Tab::Transactions => html! {
            <TransactionsPage
                transactions={(*data.transactions).clone()}
                on_add={data.add_transaction.clone()}
                on_added={on_transaction_added} />
        },
        Tab::Goals => html! { <GoalsPage goals={(*data.goals).clone()} on_add={data.add_goal.clone()} /> },
        Tab::Analytics => html! { <AnalyticsPage data={data.clone()} /> },
        Tab::Settings => html! { <SettingsPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50">
                <Navigation active_tab={*active_tab} on_select={on_select} />
                <main class="min-h-screen">{ content }</main>
            </div>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting budget dashboard against {}", config::api_base_url());
    yew::Renderer::<App>::new().render();
}
