use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::models::event::InvocationEvent;

/// Protocol version the agent runtime expects on every response.
pub const MESSAGE_VERSION: &str = "1.0";

/// Status code reported at the protocol layer. Always 200: domain failures
/// travel inside the payload, not as transport errors.
const PROTOCOL_STATUS_CODE: u16 = 200;

/// Envelope wrapping one operation's outcome for the agent runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub message_version: String,
    pub response: ActionGroupResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupResponse {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    pub http_status_code: u16,
    pub response_body: ResponseBody,
    pub session_attributes: HashMap<String, String>,
    pub prompt_session_attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseBody {
    #[serde(rename = "application/json")]
    pub json: JsonContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonContent {
    /// Omitted from the serialized envelope when no operation matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ResponseEnvelope {
    /// Wraps a payload, echoing the identifying fields of the event that
    /// produced it.
    #[must_use]
    pub fn new(event: &InvocationEvent, body: Option<Value>) -> Self {
        Self {
            message_version: MESSAGE_VERSION.to_string(),
            response: ActionGroupResponse {
                action_group: event.action_group.clone(),
                api_path: event.api_path.clone(),
                http_method: event.http_method.clone(),
                http_status_code: PROTOCOL_STATUS_CODE,
                response_body: ResponseBody {
                    json: JsonContent { body },
                },
                session_attributes: HashMap::new(),
                prompt_session_attributes: HashMap::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_event() -> InvocationEvent {
        serde_json::from_value(json!({
            "actionGroup": "Booking",
            "apiPath": "/properties",
            "httpMethod": "GET"
        }))
        .unwrap()
    }

    #[test]
    fn serializes_the_full_envelope_shape() {
        let envelope = ResponseEnvelope::new(&sample_event(), Some(json!({"id": 42})));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "messageVersion": "1.0",
                "response": {
                    "actionGroup": "Booking",
                    "apiPath": "/properties",
                    "httpMethod": "GET",
                    "httpStatusCode": 200,
                    "responseBody": {"application/json": {"body": {"id": 42}}},
                    "sessionAttributes": {},
                    "promptSessionAttributes": {}
                }
            })
        );
    }

    #[test]
    fn omits_the_body_key_when_there_is_no_payload() {
        let envelope = ResponseEnvelope::new(&sample_event(), None);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["response"]["responseBody"]["application/json"], json!({}));
    }
}
