use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::config::AirtableConfig;
use crate::domains::waitlist::models::EmailAddress;

/// Field map for one signup, shaped for the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPayload {
    pub fields: Map<String, Value>,
}

impl RecordPayload {
    /// Build the stored fields for a signup.
    ///
    /// The email column is always written. The source column is written
    /// only when one is configured, and the submission-timestamp column
    /// only when one is configured; the timestamp is the current instant
    /// in RFC 3339.
    pub fn for_signup(email: &EmailAddress, cfg: &AirtableConfig) -> Self {
        let mut fields = Map::new();
        fields.insert(cfg.email_field.clone(), json!(email.as_ref()));

        if let Some(source_field) = &cfg.source_field {
            fields.insert(source_field.clone(), json!(cfg.source_value));
        }

        if let Some(timestamp_field) = &cfg.timestamp_field {
            fields.insert(timestamp_field.clone(), json!(Utc::now().to_rfc3339()));
        }

        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn base_config() -> AirtableConfig {
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

    fn email() -> EmailAddress {
        EmailAddress::parse("ada@example.com").unwrap()
    }

    #[test]
    fn test_writes_only_the_email_by_default() {
        let payload = RecordPayload::for_signup(&email(), &base_config());

        assert_eq!(payload.fields.len(), 1);
        assert_eq!(payload.fields["Email"], json!("ada@example.com"));
    }

    #[test]
    fn test_respects_custom_email_column() {
        let cfg = AirtableConfig {
            email_field: "E-mail address".into(),
            ..base_config()
        };

        let payload = RecordPayload::for_signup(&email(), &cfg);

        assert_eq!(payload.fields["E-mail address"], json!("ada@example.com"));
    }

    #[test]
    fn test_writes_source_only_when_column_configured() {
        let cfg = AirtableConfig {
            source_field: Some("Source".into()),
            ..base_config()
        };

        let payload = RecordPayload::for_signup(&email(), &cfg);

        assert_eq!(payload.fields.len(), 2);
        assert_eq!(payload.fields["Source"], json!("Website"));
    }

    #[test]
    fn test_timestamp_is_rfc3339_when_column_configured() {
        let cfg = AirtableConfig {
            timestamp_field: Some("Signed up at".into()),
            ..base_config()
        };

        let payload = RecordPayload::for_signup(&email(), &cfg);

        let raw = payload.fields["Signed up at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }
}
