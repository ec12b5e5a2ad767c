use std::env;
use std::fmt;

pub const DEFAULT_RANGE: &str = "Sheet1!A:C";

#[derive(Clone)]
pub struct AppConfig {
    pub sheets_id: String,
    pub sheets_range: String,
    pub service_account_json: String,
    /// Enables `/debug/env` and error kinds in error responses.
    pub debug: bool,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup. Values are
    /// trimmed, absent ones become empty. No validation happens here.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let mut sheets_range = read("GOOGLE_SHEETS_RANGE");
        if sheets_range.is_empty() {
            sheets_range = DEFAULT_RANGE.to_string();
        }

        AppConfig {
            sheets_id: read("GOOGLE_SHEETS_ID"),
            sheets_range,
            service_account_json: read("GOOGLE_SERVICE_ACCOUNT_JSON"),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("sheets_id", &self.sheets_id)
            .field("sheets_range", &self.sheets_range)
            .field(
                "service_account_json",
                &format_args!("<{} bytes redacted>", self.service_account_json.len()),
            )
            .field("debug", &self.debug)
            .finish()
    }
}
