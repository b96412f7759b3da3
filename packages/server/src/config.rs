use std::env;

use airtable::AirtableOptions;
use anyhow::{Context, Result};
use dotenvy::dotenv;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub airtable: AirtableConfig,
}

/// Everything the waitlist pipeline knows about the record store.
///
/// Credentials are optional so the site can come up without them; the
/// submission pipeline refuses to forward signups until both are present.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: Option<String>,
    pub base_id: Option<String>,
    pub table_name: String,
    /// Column the address is written to.
    pub email_field: String,
    /// Column for the signup source; the field is only written when a
    /// column name is configured.
    pub source_field: Option<String>,
    pub source_value: String,
    /// Column for the submission instant; only written when configured.
    pub timestamp_field: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins,
            airtable: AirtableConfig::from_env(),
        })
    }
}

impl AirtableConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("AIRTABLE_API_KEY").ok(),
            base_id: env::var("AIRTABLE_BASE_ID").ok(),
            // AIRTABLE_TABLE is accepted as an older spelling
            table_name: env::var("AIRTABLE_TABLE_NAME")
                .or_else(|_| env::var("AIRTABLE_TABLE"))
                .unwrap_or_else(|_| "Waitlist".to_string()),
            email_field: env::var("AIRTABLE_EMAIL_FIELD").unwrap_or_else(|_| "Email".to_string()),
            source_field: env::var("AIRTABLE_SOURCE_FIELD").ok(),
            source_value: env::var("AIRTABLE_SOURCE_VALUE")
                .unwrap_or_else(|_| "Website".to_string()),
            timestamp_field: env::var("AIRTABLE_TIMESTAMP_FIELD").ok(),
        }
    }

    /// Record-store credentials, when fully configured.
    pub fn credentials(&self) -> Option<AirtableOptions> {
        Some(AirtableOptions {
            api_key: self.api_key.clone()?,
            base_id: self.base_id.clone()?,
            table_name: self.table_name.clone(),
        })
    }
}
