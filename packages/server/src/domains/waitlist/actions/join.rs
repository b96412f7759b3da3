//! Join-waitlist action

use tracing::{info, warn};

use crate::domains::waitlist::models::{EmailAddress, RecordPayload};
use crate::kernel::{ServerDeps, StoreError};

/// Intent tag for the waitlist form. The form endpoint is shared, so every
/// submission names the action it wants.
pub const JOIN_WAITLIST_INTENT: &str = "join_waitlist";

/// Message for faults the user can do nothing about except retry later.
pub const UNEXPECTED_ERROR: &str = "Unexpected error. Please try again later.";

/// Why a signup was turned away. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    #[error("Invalid intent")]
    InvalidIntent,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Record-store credentials are missing. The message never names the
    /// variable that is absent.
    #[error("Server not configured. Please try again later.")]
    NotConfigured,

    /// The store turned the signup down; the message is already user-safe.
    #[error("{0}")]
    Submission(String),
}

impl JoinError {
    /// Whether the caller sent a bad request, as opposed to the server or
    /// the store being at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, JoinError::InvalidIntent | JoinError::InvalidEmail)
    }
}

/// Handle one waitlist signup.
///
/// Gates run in order — intent, email shape, store configuration — and the
/// external call only happens once all three pass. Every branch resolves
/// to an explicit `JoinError`; nothing escapes this function as a fault.
pub async fn join_waitlist(intent: &str, email: &str, deps: &ServerDeps) -> Result<(), JoinError> {
    // 1. Intent gate: the endpoint is shared, so unrelated form actions
    //    must not fall through to the store.
    if intent != JOIN_WAITLIST_INTENT {
        warn!(intent, "form submission with unknown intent");
        return Err(JoinError::InvalidIntent);
    }

    // 2. Validate the address
    let email = EmailAddress::parse(email).map_err(|_| JoinError::InvalidEmail)?;

    // 3. Refuse early when the store is not configured
    let Some(store) = &deps.store else {
        warn!("waitlist signup refused: record store not configured");
        return Err(JoinError::NotConfigured);
    };

    // 4. Forward to the record store
    let payload = RecordPayload::for_signup(&email, &deps.airtable);
    match store.create_record(payload).await {
        Ok(()) => {
            info!(email = %email, "waitlist signup stored");
            Ok(())
        }
        Err(StoreError::Rejected(message)) => Err(JoinError::Submission(message)),
        Err(StoreError::Unreachable) => Err(JoinError::Submission(UNEXPECTED_ERROR.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::config::AirtableConfig;
    use crate::kernel::{BaseWaitlistStore, MockWaitlistStore};

    fn config() -> AirtableConfig {
        AirtableConfig {
            api_key: Some("key".into()),
            base_id: Some("base".into()),
            table_name: "Waitlist".into(),
            email_field: "Email".into(),
            source_field: None,
            source_value: "Website".into(),
            timestamp_field: None,
        }
    }

    fn deps_with(store: &Arc<MockWaitlistStore>) -> ServerDeps {
        ServerDeps::new(
            Some(store.clone() as Arc<dyn BaseWaitlistStore>),
            config(),
        )
    }

    #[tokio::test]
    async fn test_unknown_intent_is_rejected_without_a_store_call() {
        let store = Arc::new(MockWaitlistStore::new());
        let deps = deps_with(&store);

        let result = join_waitlist("subscribe_newsletter", "ada@example.com", &deps).await;

        assert_eq!(result, Err(JoinError::InvalidIntent));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected_without_a_store_call() {
        let store = Arc::new(MockWaitlistStore::new());
        let deps = deps_with(&store);

        let result = join_waitlist(JOIN_WAITLIST_INTENT, "not-an-email", &deps).await;

        assert_eq!(result, Err(JoinError::InvalidEmail));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_configuration_refuses_before_calling_out() {
        let deps = ServerDeps::new(None, config());

        let result = join_waitlist(JOIN_WAITLIST_INTENT, "ada@example.com", &deps).await;

        assert_eq!(result, Err(JoinError::NotConfigured));
    }

    #[tokio::test]
    async fn test_successful_signup_forwards_the_trimmed_address() {
        let store = Arc::new(MockWaitlistStore::new());
        let deps = deps_with(&store);

        let result = join_waitlist(JOIN_WAITLIST_INTENT, "  ada@example.com ", &deps).await;

        assert_eq!(result, Ok(()));
        let calls = store.create_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].fields["Email"], json!("ada@example.com"));
    }

    #[tokio::test]
    async fn test_store_rejection_message_passes_through() {
        let store = Arc::new(
            MockWaitlistStore::new()
                .with_result(Err(StoreError::Rejected("Table not found".into()))),
        );
        let deps = deps_with(&store);

        let result = join_waitlist(JOIN_WAITLIST_INTENT, "ada@example.com", &deps).await;

        assert_eq!(result, Err(JoinError::Submission("Table not found".into())));
    }

    #[tokio::test]
    async fn test_unreachable_store_maps_to_the_generic_message() {
        let store =
            Arc::new(MockWaitlistStore::new().with_result(Err(StoreError::Unreachable)));
        let deps = deps_with(&store);

        let result = join_waitlist(JOIN_WAITLIST_INTENT, "ada@example.com", &deps).await;

        assert_eq!(
            result,
            Err(JoinError::Submission(UNEXPECTED_ERROR.to_string()))
        );
    }

    #[test]
    fn test_only_input_errors_classify_as_client_errors() {
        assert!(JoinError::InvalidIntent.is_client_error());
        assert!(JoinError::InvalidEmail.is_client_error());
        assert!(!JoinError::NotConfigured.is_client_error());
        assert!(!JoinError::Submission("x".into()).is_client_error());
    }
}
