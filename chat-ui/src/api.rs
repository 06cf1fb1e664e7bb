use async_trait::async_trait;
use chat_types::{ApiErrorBody, ChatRequest, ChatResponse};
use gloo_net::http::Request;
use std::sync::OnceLock;

use crate::backend::{BackendError, ChatBackend};

/// Port the reasoning backend listens on during local development.
const DEV_API_BASE: &str = "http://localhost:8000";

/// Pick the API base URL
/// - `CHAT_API_BASE` set at build time wins
/// - In development (localhost): use the backend's dev port
/// - In production: use same origin (the backend serves the static bundle)
pub fn resolve_api_base(override_base: Option<&str>, hostname: &str) -> String {
    if let Some(base) = override_base.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    if hostname == "localhost" || hostname == "127.0.0.1" {
        DEV_API_BASE.to_string()
    } else {
        String::new()
    }
}

fn get_api_base() -> String {
    let hostname = crate::interop::page_hostname().unwrap_or_default();
    resolve_api_base(option_env!("CHAT_API_BASE"), &hostname)
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Decode a `/api/chat` success body.
pub fn parse_chat_response(body: &str) -> Result<ChatResponse, BackendError> {
    serde_json::from_str::<ChatResponse>(body).map_err(|e| BackendError::Decode(e.to_string()))
}

/// `ChatBackend` over `POST {base}/api/chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(api_base())
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn ask(&self, message: &str) -> Result<ChatResponse, BackendError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = Request::post(&self.chat_url())
            .json(&request)
            .map_err(|e| BackendError::Request(format!("failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let detail = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.detail_text(),
                Err(_) => response.status_text(),
            };
            return Err(BackendError::Status { status, detail });
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Request(format!("failed to read body: {e}")))?;
        parse_chat_response(&body)
    }
}
