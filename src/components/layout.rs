use yew::prelude::*;

use crate::config::AppSettings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tab {
    Dashboard,
    Transactions,
    Goals,
    Analytics,
    Settings,
}

struct NavItem {
    label: &'static str,
    tab: Tab,
    icon: fn() -> Html,
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Dashboard",
            tab: Tab::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Transactions",
            tab: Tab::Transactions,
            icon: icon_receipt,
        },
        NavItem {
            label: "Goals",
            tab: Tab::Goals,
            icon: icon_target,
        },
        NavItem {
            label: "Analytics",
            tab: Tab::Analytics,
            icon: icon_bar_chart,
        },
        NavItem {
            label: "Settings",
            tab: Tab::Settings,
            icon: icon_settings,
        },
    ]
}

#[hook]
pub fn use_currency_symbol() -> String {
    use_context::<UseStateHandle<AppSettings>>()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| AppSettings::default().currency_symbol)
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let render_items = |close_menu: bool| -> Html {
        nav_items()
            .into_iter()
            .map(|item| {
                let is_active = item.tab == props.active_tab;
                let class_name = if is_active {
                    "flex items-center gap-3 px-4 py-3 rounded-xl w-full text-left bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-md"
                } else {
                    "flex items-center gap-3 px-4 py-3 rounded-xl w-full text-left text-slate-600 hover:bg-slate-100"
                };
                let on_select = props.on_select.clone();
                let menu_open = menu_open.clone();
                let tab = item.tab;
                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| {
                        on_select.emit(tab);
                        if close_menu {
                            menu_open.set(false);
                        }
                    })}>
                        <span class="shrink-0">{ (item.icon)() }</span>
                        <span class="font-medium">{ item.label }</span>
                    </button>
                }
            })
            .collect()
    };

    html! {
        <>
            <aside class="hidden lg:flex fixed inset-y-0 left-0 w-64 bg-white/80 backdrop-blur-sm border-r border-slate-200 flex-col p-6">
                <div class="flex items-center gap-2 mb-10">
                    { icon_wallet() }
                    <span class="text-xl font-bold text-slate-800">{"BudgetAI"}</span>
                </div>
                <nav class="space-y-2">{ render_items(false) }</nav>
            </aside>

            <div class="lg:hidden fixed top-0 inset-x-0 z-40 bg-white/90 backdrop-blur-sm border-b border-slate-200">
                <div class="flex items-center justify-between px-4 h-14">
                    <span class="text-lg font-bold text-slate-800">{"BudgetAI"}</span>
                    <button type="button" class="p-2 rounded-lg hover:bg-slate-100" aria-label="Menu" onclick={toggle_menu}>
                        { if *menu_open { icon_close() } else { icon_menu() } }
                    </button>
                </div>
                {
                    if *menu_open {
                        html! { <nav class="px-4 pb-4 space-y-2">{ render_items(true) }</nav> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </>
    }
}

pub fn page_shell(title: &'static str, children: Html) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 lg:pl-64">
            <div class="max-w-7xl mx-auto px-4 py-8 pt-20 lg:pt-8">
                <h1 class="text-4xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent mb-8">{ title }</h1>
                { children }
            </div>
        </div>
    }
}

pub fn card(title: Html, children: Html) -> Html {
    html! {
        <div class="bg-white/80 backdrop-blur-sm rounded-2xl p-6 shadow-lg border border-white/20">
            <h2 class="text-xl font-semibold text-slate-800 mb-4 flex items-center gap-2">{ title }</h2>
            { children }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatTone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Income,
    Expenses,
    Balance,
    Goals,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub tone: StatTone,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let (text, badge) = match props.tone {
        StatTone::Positive => ("text-green-600", "bg-green-100"),
        StatTone::Negative => ("text-red-600", "bg-red-100"),
        StatTone::Neutral => ("text-blue-600", "bg-blue-100"),
    };
    html! {
        <div class="bg-white/80 backdrop-blur-sm rounded-2xl p-6 shadow-lg border border-white/20 hover:shadow-xl transition-all duration-300">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-slate-600">{ props.title }</p>
                    <p class={classes!("text-2xl", "font-bold", text)}>{ props.value.clone() }</p>
                </div>
                <div class={classes!("p-3", "rounded-full", badge)}>
                    {
                        match props.icon {
                            StatIcon::Income => icon_arrow_up_circle(),
                            StatIcon::Expenses => icon_arrow_down_circle(),
                            StatIcon::Balance => icon_dollar(),
                            StatIcon::Goals => icon_target(),
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_receipt() -> Html {
    icon_base("M5 3h14v18l-3-2-2 2-2-2-2 2-2-2-3 2zM9 8h6M9 12h6")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7")
}
pub fn icon_minus() -> Html {
    icon_base("M5 12h14")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
pub fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_arrow_up_circle() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 16V8M8 12l4-4 4 4")
}
pub fn icon_arrow_down_circle() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 8v8M8 12l4 4 4-4")
}
pub fn icon_dollar() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6")
}
pub fn icon_brain() -> Html {
    icon_base("M9 3a3 3 0 00-3 3 3 3 0 00-2 5 3 3 0 002 5 3 3 0 006 0V6a3 3 0 00-3-3zM15 3a3 3 0 013 3 3 3 0 012 5 3 3 0 01-2 5 3 3 0 01-6 0")
}
pub fn icon_lightbulb() -> Html {
    icon_base("M9 18h6M10 22h4M12 2a7 7 0 00-4 12.7V17h8v-2.3A7 7 0 0012 2z")
}
pub fn icon_alert() -> Html {
    icon_base("M10.3 3.9L1.8 18a2 2 0 001.7 3h17a2 2 0 001.7-3L13.7 3.9a2 2 0 00-3.4 0zM12 9v4M12 17h.01")
}
pub fn icon_trophy() -> Html {
    icon_base("M8 21h8M12 17v4M7 4h10v5a5 5 0 01-10 0zM17 5h3v2a3 3 0 01-3 3M7 5H4v2a3 3 0 003 3")
}
pub fn icon_sparkles() -> Html {
    icon_base("M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z")
}
pub fn icon_check_circle() -> Html {
    icon_base("M22 11.1V12a10 10 0 11-5.9-9.1M22 4L12 14l-3-3")
}
pub fn icon_clock() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 7v5l3 3")
}
pub fn icon_flag() -> Html {
    icon_base("M4 22V4M4 4h13l-2 4 2 4H4")
}
pub fn icon_calendar() -> Html {
    icon_base("M3 5h18v16H3zM16 3v4M8 3v4M3 10h18")
}
pub fn icon_tag() -> Html {
    icon_base("M20.6 13.4l-7.2 7.2a2 2 0 01-2.8 0L2 12V2h10l8.6 8.6a2 2 0 010 2.8zM7 7h.01")
}
pub fn icon_search() -> Html {
    icon_base("M11 11m-8 0a8 8 0 1016 0 8 8 0 10-16 0M21 21l-4.3-4.3")
}
pub fn icon_filter() -> Html {
    icon_base("M22 3H2l8 9.5V19l4 2v-8.5z")
}
pub fn icon_menu() -> Html {
    icon_base("M3 6h18M3 12h18M3 18h18")
}
pub fn icon_close() -> Html {
    icon_base("M6 18L18 6M6 6l12 12")
}
