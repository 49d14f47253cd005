//! Activity log models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the append-only, server-owned activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: i64,
    /// Action name, e.g. "user_login" or "analyze"
    pub action: String,
    /// "user" or "admin"
    pub actor_type: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Action payload; the backend stores it as a JSON string but older
    /// rows may carry an object, so both shapes are accepted
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Server-side timestamp, kept as the raw string the backend sent
    pub created_at: String,
}

impl ActivityRecord {
    /// The payload flattened to a display string, if any.
    pub fn payload_text(&self) -> Option<String> {
        match &self.payload {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_text_accepts_string_and_object() {
        let mut record: ActivityRecord = serde_json::from_value(json!({
            "id": 1,
            "action": "user_login",
            "actor_type": "user",
            "payload": "{\"username\": \"nisar\"}",
            "created_at": "2025-01-01 10:00:00"
        }))
        .unwrap();
        assert_eq!(
            record.payload_text().as_deref(),
            Some("{\"username\": \"nisar\"}")
        );

        record.payload = Some(json!({"keyword": "oil prices"}));
        assert_eq!(
            record.payload_text().as_deref(),
            Some("{\"keyword\":\"oil prices\"}")
        );

        record.payload = None;
        assert!(record.payload_text().is_none());
    }
}
