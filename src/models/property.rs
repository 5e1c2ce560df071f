use serde::Serialize;

/// Arguments of the availability lookup, as read off the positional
/// parameters. Values are kept raw here; filtering of absent and empty ones
/// happens when the query string is assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityQuery {
    pub property_id: Option<String>,
    pub end_date: Option<String>,
    pub start_date: Option<String>,
}

impl AvailabilityQuery {
    /// Query pairs for the present, non-empty values only. Absent values
    /// never appear, not even as empty strings.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = truthy(&self.property_id) {
            pairs.push(("propertyId", id.to_string()));
        }
        if let Some(end) = truthy(&self.end_date) {
            pairs.push(("endDate", end.to_string()));
        }
        if let Some(start) = truthy(&self.start_date) {
            pairs.push(("startDate", start.to_string()));
        }
        pairs
    }
}

fn truthy(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Body of the search call. `None` fields are left out of the outbound JSON
/// entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
}
