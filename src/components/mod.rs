pub mod analytics;
pub mod budget_card;
pub mod budget_settings;
pub mod charts;
pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod layout;
pub mod settings;
pub mod spending_chart;
pub mod transaction_form;
pub mod transaction_list;
