use async_trait::async_trait;
use google_sheets4::Sheets;
use google_sheets4::api::ValueRange;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::normalize::cell_to_string;
use crate::utils::validation::validate_credentials;

/// Read-only access to spreadsheet values.
pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

pub type SheetsClient = Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

/// Source of raw sheet rows for the configured range.
#[async_trait]
pub trait ValuesReader: Send + Sync {
    async fn read_values(&self, config: &AppConfig) -> Result<Vec<Vec<String>>, AppError>;
}

/// Reads values from the Google Sheets API, building a fresh client per call.
pub struct GoogleSheetsReader;

#[async_trait]
impl ValuesReader for GoogleSheetsReader {
    async fn read_values(&self, config: &AppConfig) -> Result<Vec<Vec<String>>, AppError> {
        let client = get_client(config).await?;

        debug!(
            sheets_id = %config.sheets_id,
            range = %config.sheets_range,
            "fetching sheet values"
        );

        let (_, value_range) = client
            .spreadsheets()
            .values_get(&config.sheets_id, &config.sheets_range)
            .add_scope(READONLY_SCOPE)
            .doit()
            .await
            .map_err(|e| {
                AppError::ExternalService(format!(
                    "Failed to read range '{}': {}",
                    config.sheets_range, e
                ))
            })?;

        Ok(rows_from_value_range(value_range))
    }
}

/// Flattens an API value range into string rows. A range with no values
/// (an empty sheet) yields no rows.
pub fn rows_from_value_range(range: ValueRange) -> Vec<Vec<String>> {
    range
        .values
        .unwrap_or_default()
        .iter()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect()
}

/// Builds an authenticated Sheets handle from the configured service account.
pub async fn get_client(config: &AppConfig) -> Result<SheetsClient, AppError> {
    let secret = validate_credentials(config)?;

    let auth = yup_oauth2::ServiceAccountAuthenticator::builder(secret)
        .build()
        .await
        .map_err(|e| AppError::ExternalService(format!("Failed to build authenticator: {}", e)))?;

    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| AppError::ExternalService(format!("Failed to load native roots: {}", e)))?
        .https_or_http()
        .enable_http1()
        .build();

    let hyper_client = hyper::Client::builder().build(connector);

    Ok(Sheets::new(hyper_client, auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(id: &str, json: &str) -> AppConfig {
        AppConfig {
            sheets_id: id.into(),
            sheets_range: "Sheet1!A:C".into(),
            service_account_json: json.into(),
            debug: false,
        }
    }

    #[tokio::test]
    async fn reader_fails_fast_without_sheet_id() {
        let err = GoogleSheetsReader
            .read_values(&config("", "{}"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(err.to_string(), "Missing env var GOOGLE_SHEETS_ID");
    }

    #[tokio::test]
    async fn client_rejects_quoted_credentials() {
        let err = get_client(&config("sheet", r#""{\"type\":\"service_account\"}""#))
            .await
            .err()
            .unwrap();

        assert!(err.to_string().contains("without surrounding quotes"));
    }

    #[test]
    fn missing_values_yield_no_rows() {
        let range = ValueRange {
            range: Some("Sheet1!A1:C1".into()),
            major_dimension: Some("ROWS".into()),
            values: None,
        };
        assert!(rows_from_value_range(range).is_empty());
    }

    #[test]
    fn cells_are_rendered_in_row_order() {
        let range = ValueRange {
            values: Some(vec![
                vec![json!("id"), json!("question"), json!("answer")],
                vec![json!(1), json!("What is 2+2?"), json!(4)],
                vec![json!("2"), json!(null), json!(true)],
                vec![json!("3")],
            ]),
            ..Default::default()
        };

        assert_eq!(
            rows_from_value_range(range),
            vec![
                vec!["id", "question", "answer"],
                vec!["1", "What is 2+2?", "4"],
                vec!["2", "", "true"],
                vec!["3"],
            ]
        );
    }
}
