//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the reasoning backend's wire contract (`/api/chat`)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

// ============================================================================
// Trace Records
// ============================================================================

/// One recorded unit of the backend's reasoning / tool-use process.
///
/// No schema is enforced: any key set is legal and every key survives a
/// round trip. Entries that are not JSON objects are kept under
/// [`TraceStep::ENTRY_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TraceStep(Map<String, Value>);

impl TraceStep {
    /// Key used for trace entries that arrive as bare values instead of records.
    pub const ENTRY_KEY: &'static str = "entry";

    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            other => {
                let mut map = Map::new();
                map.insert(Self::ENTRY_KEY.to_string(), other);
                Self(map)
            }
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Keys in the order the backend sent them.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for TraceStep {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<'de> Deserialize<'de> for TraceStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

// ============================================================================
// Conversation
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub enum Role {
    User,
    Assistant,
}

/// Chat message for UI display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Execution trace, attached once when an assistant reply is finalized
    #[serde(default)]
    #[ts(type = "Array<Record<string, unknown>> | null")]
    pub logs: Option<Vec<TraceStep>>,
    /// True only for the placeholder of the request in flight
    #[serde(default)]
    pub pending: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: new_message_id("user"),
            role: Role::User,
            content: content.into(),
            logs: None,
            pending: false,
            timestamp: Utc::now(),
        }
    }

    /// Empty assistant entry shown while a request is outstanding.
    pub fn pending_assistant() -> Self {
        Self {
            id: new_message_id("assistant"),
            role: Role::Assistant,
            content: String::new(),
            logs: None,
            pending: true,
            timestamp: Utc::now(),
        }
    }

    /// Finalize a placeholder. The id is kept so the entry stays put in keyed lists.
    pub fn resolved(&self, content: impl Into<String>, logs: Option<Vec<TraceStep>>) -> Self {
        Self {
            id: self.id.clone(),
            role: Role::Assistant,
            content: content.into(),
            logs,
            pending: false,
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn trace(&self) -> Option<&[TraceStep]> {
        self.logs.as_deref()
    }
}

fn new_message_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

// ============================================================================
// API Types
// ============================================================================

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    #[ts(type = "Array<Record<string, unknown>>")]
    pub logs: Vec<TraceStep>,
}

/// Error envelope returned by the backend on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../chat-ui/src/types/generated.ts")]
pub struct ApiErrorBody {
    #[ts(type = "unknown")]
    pub detail: Value,
}

impl ApiErrorBody {
    pub fn detail_text(&self) -> String {
        match &self.detail {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use ts_rs::Config;

    #[test]
    fn test_trace_step_keeps_unknown_keys_in_order() {
        let step: TraceStep = serde_json::from_value(json!({
            "step": "search",
            "tool": "pubmed",
            "zz_new_field": {"nested": [1, 2]},
            "a_field": null
        }))
        .unwrap();

        let keys: Vec<&str> = step.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["step", "tool", "zz_new_field", "a_field"]);
        assert_eq!(step.get("zz_new_field"), Some(&json!({"nested": [1, 2]})));
    }

    #[test]
    fn test_trace_step_wraps_bare_entries() {
        let step: TraceStep = serde_json::from_value(json!("<think>plan</think>")).unwrap();
        assert_eq!(step.len(), 1);
        assert_eq!(
            step.get(TraceStep::ENTRY_KEY),
            Some(&json!("<think>plan</think>"))
        );
    }

    #[test]
    fn test_chat_response_parses_mixed_logs() {
        let response: ChatResponse = serde_json::from_value(json!({
            "response": "CRISPR is...",
            "logs": [{"step": "search", "tool": "pubmed"}, "raw line", 7]
        }))
        .unwrap();

        assert_eq!(response.response, "CRISPR is...");
        assert_eq!(response.logs.len(), 3);
        assert_eq!(response.logs[0].get("tool"), Some(&json!("pubmed")));
        assert_eq!(response.logs[2].get(TraceStep::ENTRY_KEY), Some(&json!(7)));
    }

    #[test]
    fn test_chat_response_missing_logs_is_empty() {
        let response: ChatResponse = serde_json::from_str(r#"{"response": "ok"}"#).unwrap();
        assert!(response.logs.is_empty());
    }

    #[test]
    fn test_chat_response_rejects_wrong_shape() {
        assert!(serde_json::from_str::<ChatResponse>(r#"{"answer": "ok"}"#).is_err());
        assert!(serde_json::from_str::<ChatResponse>(r#"{"response": 42}"#).is_err());
        assert!(
            serde_json::from_str::<ChatResponse>(r#"{"response": "ok", "logs": "x"}"#).is_err()
        );
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn test_resolved_keeps_placeholder_id() {
        let placeholder = Message::pending_assistant();
        let steps = vec![TraceStep::new().with("step", "search")];
        let resolved = placeholder.resolved("answer", Some(steps.clone()));

        assert_eq!(resolved.id, placeholder.id);
        assert!(!resolved.pending);
        assert_eq!(resolved.role, Role::Assistant);
        assert_eq!(resolved.trace(), Some(steps.as_slice()));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("hi");
        let b = Message::user("hi");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("user-"));
    }

    #[test]
    fn test_error_body_detail_text() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "Agent not initialized"}"#).unwrap();
        assert_eq!(body.detail_text(), "Agent not initialized");

        let body: ApiErrorBody = serde_json::from_str(r#"{"detail": [{"loc": ["body"]}]}"#).unwrap();
        assert_eq!(body.detail_text(), r#"[{"loc":["body"]}]"#);
    }

    #[test]
    fn export_types() {
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        Role::export(&config).unwrap();
        Message::export(&config).unwrap();
        ChatRequest::export(&config).unwrap();
        ChatResponse::export(&config).unwrap();
        ApiErrorBody::export(&config).unwrap();
    }
}
