// https://airtable.com/developers/web/api/create-records

use reqwest::{header, Client, StatusCode};
use serde_json::{Map, Value};

pub mod models;

use crate::models::{CreateRecordsRequest, CreateRecordsResponse, Record};

/// Production API root; tests point the service elsewhere.
pub const DEFAULT_BASE_URL: &str = "https://api.airtable.com/v0";

#[derive(Debug, Clone)]
pub struct AirtableOptions {
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
}

#[derive(Debug, Clone)]
pub struct AirtableService {
    options: AirtableOptions,
    base_url: String,
    client: Client,
}

#[derive(Debug, thiserror::Error)]
pub enum AirtableError {
    /// Airtable answered with a non-success status. `message` holds the
    /// human-readable message from the error body, when there was one.
    #[error("airtable rejected the request ({status})")]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("request to airtable failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl AirtableService {
    pub fn new(options: AirtableOptions) -> Self {
        Self::with_base_url(options, DEFAULT_BASE_URL)
    }

    /// Point the service at a different API root. Tests use this to talk to
    /// a local mock server.
    pub fn with_base_url(options: AirtableOptions, base_url: impl Into<String>) -> Self {
        Self {
            options,
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Create a single record in the configured table.
    ///
    /// The field map is wrapped in Airtable's list envelope with `typecast`
    /// enabled, and the call is authenticated with the bearer credential.
    pub async fn create_record(
        &self,
        fields: Map<String, Value>,
    ) -> Result<CreateRecordsResponse, AirtableError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url, self.options.base_id, self.options.table_name
        );

        let body = CreateRecordsRequest {
            records: vec![Record { fields }],
            typecast: true,
        };

        let response = self
            .client
            .post(url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.options.api_key),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = extract_error_message(response).await;
            return Err(AirtableError::Api { status, message });
        }

        Ok(response.json::<CreateRecordsResponse>().await?)
    }
}

/// Pull the human-readable message out of an error body.
///
/// Airtable reports errors as `{"error": {"type": ..., "message": ...}}`,
/// but some endpoints answer with a bare code (`{"error": "NOT_FOUND"}`) or
/// a non-JSON body; those yield `None`.
async fn extract_error_message(response: reqwest::Response) -> Option<String> {
    let body: Value = response.json().await.ok()?;
    body.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}
