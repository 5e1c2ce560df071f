use crate::http::{self, HttpClient};
use crate::models::backend::{BackendResult, OutboundRequest};
use crate::models::property::{AvailabilityQuery, SearchArgs};

use super::encode_segment;

/// Looks up a single property: `GET /properties/{propertyId}`.
pub async fn get_property(
    client: &dyn HttpClient,
    base_url: &str,
    property_id: Option<&str>,
) -> BackendResult {
    let url = format!("{base_url}/properties/{}", encode_segment(property_id));
    http::invoke(client, OutboundRequest::get(url)).await
}

/// Availability lookup: `GET /properties/{propertyId}/availability` with
/// only the supplied values as query parameters.
pub async fn get_availability(
    client: &dyn HttpClient,
    base_url: &str,
    query: &AvailabilityQuery,
) -> BackendResult {
    let url = format!(
        "{base_url}/properties/{}/availability",
        encode_segment(query.property_id.as_deref())
    );
    http::invoke(
        client,
        OutboundRequest::get(url).with_query(query.query_pairs()),
    )
    .await
}

/// Property search: `POST /properties/search` with the present search
/// fields as the JSON body.
///
/// The dispatcher has already established that a request body exists; an
/// empty argument set still results in a call, with an empty JSON object.
pub async fn search_properties(
    client: &dyn HttpClient,
    base_url: &str,
    args: &SearchArgs,
) -> BackendResult {
    let url = format!("{base_url}/properties/search");
    let body = serde_json::to_value(args).unwrap_or_default();
    http::invoke(client, OutboundRequest::post(url, body)).await
}
