const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const SUGGESTION_DEBOUNCE_MS: u32 = 500;

pub fn api_base_url() -> &'static str {
    option_env!("BUDGET_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Display preferences. Held in memory for the session only.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppSettings {
    pub fn for_currency(code: &str) -> Self {
        AppSettings {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
        }
    }
}

pub const CURRENCIES: [(&str, &str); 5] = [
    ("INR", "INR (₹)"),
    ("USD", "USD ($)"),
    ("EUR", "EUR (€)"),
    ("GBP", "GBP (£)"),
    ("JPY", "JPY (¥)"),
];

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => "₹",
    }
}
