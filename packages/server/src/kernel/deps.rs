//! Server dependencies for request handlers (using traits for testability)

use std::sync::Arc;

use airtable::{AirtableError, AirtableService};
use async_trait::async_trait;

use crate::config::AirtableConfig;
use crate::domains::waitlist::models::RecordPayload;
use crate::kernel::{BaseWaitlistStore, StoreError};

/// Message shown when the store rejects a signup without a usable message.
pub const SUBMISSION_FAILED: &str = "Failed to join the waitlist. Please try again.";

// =============================================================================
// AirtableService Adapter (implements BaseWaitlistStore trait)
// =============================================================================

/// Wrapper around AirtableService that implements the BaseWaitlistStore trait
pub struct AirtableAdapter(pub Arc<AirtableService>);

impl AirtableAdapter {
    pub fn new(service: Arc<AirtableService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseWaitlistStore for AirtableAdapter {
    async fn create_record(&self, payload: RecordPayload) -> Result<(), StoreError> {
        match self.0.create_record(payload.fields).await {
            Ok(_) => Ok(()),
            Err(AirtableError::Api { status, message }) => {
                tracing::warn!(%status, "record store rejected the signup");
                Err(StoreError::Rejected(
                    message.unwrap_or_else(|| SUBMISSION_FAILED.to_string()),
                ))
            }
            Err(AirtableError::Network(e)) => {
                tracing::error!(error = %e, "record store request failed");
                Err(StoreError::Unreachable)
            }
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to request handlers.
#[derive(Clone)]
pub struct ServerDeps {
    /// Record store for signups (optional — the site can run without
    /// credentials, in which case submissions are refused).
    pub store: Option<Arc<dyn BaseWaitlistStore>>,
    /// Column names and defaults for the record store.
    pub airtable: AirtableConfig,
}

impl ServerDeps {
    pub fn new(store: Option<Arc<dyn BaseWaitlistStore>>, airtable: AirtableConfig) -> Self {
        Self { store, airtable }
    }

    /// Build dependencies from configuration, wiring the Airtable adapter
    /// when credentials are present.
    pub fn from_config(airtable: AirtableConfig) -> Self {
        let store = airtable.credentials().map(|options| {
            Arc::new(AirtableAdapter::new(Arc::new(AirtableService::new(options))))
                as Arc<dyn BaseWaitlistStore>
        });

        if store.is_none() {
            tracing::warn!(
                "record store credentials incomplete; waitlist submissions will be refused"
            );
        }

        Self::new(store, airtable)
    }
}
