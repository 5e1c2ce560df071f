use serde::Deserialize;
use std::collections::HashMap;

/// Media type key under which the agent runtime nests JSON body properties.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Action group invocation event emitted by the agent runtime.
///
/// `apiPath` carries the OpenAPI path template declared in the action group
/// schema (for example `/properties/{propertyId}/availability`); the actual
/// values arrive either as positional `parameters` or inside the JSON
/// request body, depending on how the schema declares them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    #[serde(default)]
    pub parameters: Vec<EventParameter>,
    #[serde(default)]
    pub request_body: Option<RequestBody>,
}

/// A single named value, shared between positional parameters and JSON body
/// properties. The runtime always sends values as strings and may leave
/// them out entirely for unfilled slots.
#[derive(Debug, Clone, Deserialize)]
pub struct EventParameter {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: HashMap<String, ContentBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBody {
    pub properties: Option<Vec<EventParameter>>,
}

impl InvocationEvent {
    /// Value of the i-th positional parameter, if the parameter exists and
    /// carries a value. Out-of-range indices are not an error.
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.parameters.get(index).and_then(|p| p.value.as_deref())
    }

    /// Value of the i-th entry of the JSON body properties sequence, if the
    /// body/media-type/properties chain exists.
    #[must_use]
    pub fn body_property(&self, index: usize) -> Option<&str> {
        self.body_properties()?
            .get(index)
            .and_then(|p| p.value.as_deref())
    }

    /// The JSON body properties sequence, when the request carries one.
    #[must_use]
    pub fn body_properties(&self) -> Option<&[EventParameter]> {
        self.request_body
            .as_ref()?
            .content
            .get(JSON_MEDIA_TYPE)
            .and_then(|content| content.properties.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    fn event(payload: serde_json::Value) -> InvocationEvent {
        from_value(payload).unwrap()
    }

    #[test]
    fn positional_reads_are_absence_tolerant() {
        let event = event(json!({
            "actionGroup": "Booking",
            "apiPath": "/properties",
            "httpMethod": "GET",
            "parameters": [
                {"name": "propertyId", "value": "42"},
                {"name": "endDate"}
            ]
        }));

        assert_eq!(event.positional(0), Some("42"));
        assert_eq!(event.positional(1), None);
        assert_eq!(event.positional(7), None);
    }

    #[test]
    fn body_property_requires_the_full_chain() {
        let bare = event(json!({
            "actionGroup": "Booking",
            "apiPath": "/properties/search",
            "httpMethod": "POST"
        }));
        assert_eq!(bare.body_property(0), None);
        assert!(bare.body_properties().is_none());

        let wrong_media_type = event(json!({
            "actionGroup": "Booking",
            "apiPath": "/properties/search",
            "httpMethod": "POST",
            "requestBody": {"content": {"text/plain": {"properties": [{"name": "city", "value": "Paris"}]}}}
        }));
        assert!(wrong_media_type.body_properties().is_none());

        let complete = event(json!({
            "actionGroup": "Booking",
            "apiPath": "/properties/search",
            "httpMethod": "POST",
            "requestBody": {"content": {"application/json": {"properties": [{"name": "city", "value": "Paris"}]}}}
        }));
        assert_eq!(complete.body_property(0), Some("Paris"));
    }
}
