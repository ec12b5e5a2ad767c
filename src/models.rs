use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::AppError;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
pub struct CardsResponse {
    pub count: usize,
    pub cards: Vec<Card>,
}

impl From<Vec<Card>> for CardsResponse {
    fn from(cards: Vec<Card>) -> Self {
        CardsResponse {
            count: cards.len(),
            cards,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl ErrorResponse {
    /// Builds the error body; the error kind is only named when `debug` is set.
    pub fn new(err: &AppError, debug: bool) -> Self {
        ErrorResponse {
            status: "error",
            error: err.to_string(),
            kind: debug.then(|| err.kind()),
        }
    }
}

/// Non-secret view of the configuration. Only the presence and length of the
/// credential payload are reported.
#[derive(Serialize, Debug)]
pub struct DebugEnvResponse {
    pub sheets_id: String,
    pub sheets_range: String,
    pub has_service_account_json: bool,
    pub service_account_json_length: usize,
}

impl From<&AppConfig> for DebugEnvResponse {
    fn from(config: &AppConfig) -> Self {
        DebugEnvResponse {
            sheets_id: config.sheets_id.clone(),
            sheets_range: config.sheets_range.clone(),
            has_service_account_json: !config.service_account_json.is_empty(),
            service_account_json_length: config.service_account_json.len(),
        }
    }
}
