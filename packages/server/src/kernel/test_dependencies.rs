// MockWaitlistStore - mock record store for testing
//
// Records every create call and replays scripted results, so tests can
// assert outcomes and call counts without a network dependency.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domains::waitlist::models::RecordPayload;
use crate::kernel::{BaseWaitlistStore, StoreError};

pub struct MockWaitlistStore {
    results: Arc<Mutex<Vec<Result<(), StoreError>>>>,
    calls: Arc<Mutex<Vec<RecordPayload>>>,
}

impl MockWaitlistStore {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a result for the next create call. Calls with nothing queued
    /// succeed.
    pub fn with_result(self, result: Result<(), StoreError>) -> Self {
        self.results.lock().unwrap().push(result);
        self
    }

    /// Payloads passed to `create_record`, in call order.
    pub fn create_calls(&self) -> Vec<RecordPayload> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockWaitlistStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseWaitlistStore for MockWaitlistStore {
    async fn create_record(&self, payload: RecordPayload) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(payload);

        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            Ok(())
        } else {
            results.remove(0)
        }
    }
}
