use shared::Month;

/// Where the tracker API lives unless overridden at build time
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Front-end settings, fixed when the wasm bundle is built
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub initial_month: Month,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("EXPENSE_TRACKER_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            initial_month: Month::default(),
        }
    }
}
