use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope for the record-creation endpoint.
///
/// `typecast` asks the remote side to coerce field values into the column
/// types of the target table.
#[derive(Debug, Serialize)]
pub struct CreateRecordsRequest {
    pub records: Vec<Record>,
    pub typecast: bool,
}

/// One record's field map, keyed by column name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub fields: Map<String, Value>,
}

/// Body returned by a successful record creation.
#[derive(Debug, Deserialize)]
pub struct CreateRecordsResponse {
    pub records: Vec<CreatedRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedRecord {
    pub id: String,
    #[serde(rename = "createdTime")]
    pub created_time: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}
