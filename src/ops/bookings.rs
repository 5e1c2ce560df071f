use crate::http::{self, HttpClient};
use crate::models::backend::{BackendResult, OutboundRequest};
use crate::models::booking::BookingArgs;

use super::encode_segment;

/// Creates a booking: `POST /bookings` with the decoded booking fields.
pub async fn create_booking(
    client: &dyn HttpClient,
    base_url: &str,
    args: &BookingArgs,
) -> BackendResult {
    let url = format!("{base_url}/bookings");
    let body = serde_json::to_value(args).unwrap_or_default();
    http::invoke(client, OutboundRequest::post(url, body)).await
}

/// Cancels a booking: `DELETE /booking/{bookingId}`.
pub async fn delete_booking(
    client: &dyn HttpClient,
    base_url: &str,
    booking_id: Option<&str>,
) -> BackendResult {
    let url = format!("{base_url}/booking/{}", encode_segment(booking_id));
    http::invoke(client, OutboundRequest::delete(url)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockHttpClient;
    use crate::models::backend::API_FAILURE_MESSAGE;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn cancellation_issues_exactly_one_delete() {
        let mut client = MockHttpClient::new();
        client
            .expect_execute()
            .withf(|req| req.method == Method::DELETE && req.url == "http://backend/booking/42")
            .times(1)
            .returning(|_| Ok(json!({"bookingId": "42"})));

        let result = delete_booking(&client, "http://backend", Some("42")).await;
        assert_eq!(result, BackendResult::Success(json!({"bookingId": "42"})));
    }

    #[tokio::test]
    async fn creation_posts_the_decoded_booking_body() {
        let mut client = MockHttpClient::new();
        client
            .expect_execute()
            .withf(|req| {
                req.method == Method::POST
                    && req.url == "http://backend/bookings"
                    && req.body
                        == Some(json!({
                            "customerName": "Jane Doe",
                            "propertyId": 5,
                            "paymentInformation": {"amount": 100}
                        }))
            })
            .times(1)
            .returning(|_| Ok(json!({"bookingId": "b-1"})));

        let args = BookingArgs {
            customer_name: Some("Jane Doe".to_string()),
            property_id: Some(5),
            payment_information: Some(json!({"amount": 100})),
            ..BookingArgs::default()
        };
        create_booking(&client, "http://backend", &args).await;
    }

    #[tokio::test]
    async fn backend_failures_surface_as_the_sentinel() {
        let mut client = MockHttpClient::new();
        client
            .expect_execute()
            .times(1)
            .returning(|_| Err("boom".into()));

        let result = delete_booking(&client, "http://backend", Some("42")).await;
        assert_eq!(result, BackendResult::Failure(API_FAILURE_MESSAGE.to_string()));
    }
}
