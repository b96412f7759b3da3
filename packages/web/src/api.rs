//! Client for the waitlist API server

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API URL
pub fn get_api_url() -> &'static str {
    API_URL
        .get()
        .map(|url| url.as_str())
        .unwrap_or("http://localhost:8080")
}

/// Intent tag the shared form endpoint dispatches on.
pub const JOIN_WAITLIST_INTENT: &str = "join_waitlist";

/// Structured result returned by the form endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error type for waitlist API calls
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for the waitlist API
#[derive(Clone)]
pub struct WaitlistClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WaitlistClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/forms", base_url.into()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(get_api_url())
    }

    /// Submit a waitlist signup.
    ///
    /// The endpoint answers 400/500 with the same body shape it uses for
    /// success, so the body is decoded regardless of status and the `ok`
    /// flag drives the caller.
    pub async fn join_waitlist(&self, email: &str) -> Result<WaitlistResponse, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("intent", JOIN_WAITLIST_INTENT), ("email", email)])
            .send()
            .await?;

        Ok(response.json::<WaitlistResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes_with_and_without_error() {
        let ok: WaitlistResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(ok.ok);
        assert_eq!(ok.error, None);

        let failed: WaitlistResponse =
            serde_json::from_str(r#"{"ok":false,"error":"boom"}"#).unwrap();
        assert!(!failed.ok);
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }
}
