// Trait definitions for dependency injection
//
// Infrastructure only - the waitlist business rules live in
// domains::waitlist::actions and talk to the store through this trait.
//
// Naming convention: Base* for trait names

use async_trait::async_trait;
use thiserror::Error;

use crate::domains::waitlist::models::RecordPayload;

/// A failed store call, reduced to what the caller may surface.
///
/// `Rejected` carries a message that is safe to show the end user;
/// transport-level detail never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Rejected(String),

    /// The call itself never completed (DNS, timeout, connection reset).
    #[error("record store unreachable")]
    Unreachable,
}

#[async_trait]
pub trait BaseWaitlistStore: Send + Sync {
    /// Create one signup record in the external store.
    async fn create_record(&self, payload: RecordPayload) -> Result<(), StoreError>;
}
