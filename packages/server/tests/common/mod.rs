//! Shared test harness: the full app wired against a fake record store.

use std::sync::Arc;

use airtable::AirtableService;
use server_core::config::AirtableConfig;
use server_core::kernel::{AirtableAdapter, BaseWaitlistStore, ServerDeps};
use server_core::server::app::build_app_with_deps;
use wiremock::MockServer;

pub struct TestHarness {
    /// Base URL of the app under test.
    pub addr: String,
    /// Fake Airtable the app's store points at.
    pub airtable: MockServer,
    pub client: reqwest::Client,
}

pub fn test_config() -> AirtableConfig {
    AirtableConfig {
        api_key: Some("key-test".into()),
        base_id: Some("appTEST".into()),
        table_name: "Waitlist".into(),
        email_field: "Email".into(),
        source_field: Some("Source".into()),
        source_value: "Website".into(),
        timestamp_field: None,
    }
}

impl TestHarness {
    /// App on a random port with a fully configured store.
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// App with the given store configuration. Credentials resolve against
    /// the mock server; absent credentials leave the store unwired, exactly
    /// as in production.
    pub async fn with_config(cfg: AirtableConfig) -> Self {
        let airtable = MockServer::start().await;
        let store_url = airtable.uri();
        Self::spawn(cfg, airtable, store_url).await
    }

    /// App whose record store points at an address nothing listens on.
    pub async fn with_unreachable_store() -> Self {
        let airtable = MockServer::start().await;
        Self::spawn(test_config(), airtable, "http://127.0.0.1:9".to_string()).await
    }

    async fn spawn(cfg: AirtableConfig, airtable: MockServer, store_url: String) -> Self {
        let store = cfg.credentials().map(|options| {
            Arc::new(AirtableAdapter::new(Arc::new(
                AirtableService::with_base_url(options, store_url),
            ))) as Arc<dyn BaseWaitlistStore>
        });
        let deps = Arc::new(ServerDeps::new(store, cfg));
        let app = build_app_with_deps(deps, &[]);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            airtable,
            client: reqwest::Client::new(),
        }
    }

    /// POST the waitlist form the way the browser does.
    pub async fn post_form(&self, intent: &str, email: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/api/forms", self.addr))
            .form(&[("intent", intent), ("email", email)])
            .send()
            .await
            .expect("execute request")
    }

    /// Whether the fake store received any request at all.
    pub async fn store_was_called(&self) -> bool {
        !self
            .airtable
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    }
}
