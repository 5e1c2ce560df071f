use reqwest::Method;
use serde_json::Value;

/// Fixed reply substituted for any failed backend call.
pub const API_FAILURE_MESSAGE: &str = "Call to the API failed.";

/// A single outbound call to the booking backend. Query pairs and the JSON
/// body only ever contain values that were actually supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl OutboundRequest {
    #[must_use]
    pub const fn get(url: String) -> Self {
        Self {
            method: Method::GET,
            url,
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub const fn delete(url: String) -> Self {
        Self {
            method: Method::DELETE,
            url,
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub const fn post(url: String, body: Value) -> Self {
        Self {
            method: Method::POST,
            url,
            query: Vec::new(),
            body: Some(body),
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }
}

/// What the invoker hands back: the backend's JSON on success, the fixed
/// sentinel message on any failure.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResult {
    Success(Value),
    Failure(String),
}

impl BackendResult {
    /// Envelope payload: the backend value as-is, or the failure message as
    /// a plain string.
    #[must_use]
    pub fn into_body(self) -> Value {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => Value::String(message),
        }
    }
}
