use serde::Serialize;
use serde_json::Value;

/// Body of the booking creation call. The two structured fields hold
/// whatever the dual JSON/XML decoder produced; `None` fields are left out
/// of the outbound JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_information: Option<Value>,
}
