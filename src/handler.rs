use lambda_runtime::tracing::{debug, info};
use lambda_runtime::{Diagnostic, LambdaEvent};

use crate::config::AdapterConfig;
use crate::http::{HttpClient, ReqwestClient};
use crate::models::envelope::ResponseEnvelope;
use crate::models::event::InvocationEvent;
use crate::ops;
use crate::routes::{Operation, RouteOutcome};

/// The action group adapter: backend configuration plus the HTTP client
/// shared across invocations. Stateless beyond that, so any number of
/// invocations may run concurrently.
pub struct BookingAdapter<C = ReqwestClient> {
    config: AdapterConfig,
    client: C,
}

impl BookingAdapter {
    /// Builds the production adapter from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AdapterConfig::from_env(), ReqwestClient::default())
    }
}

impl<C: HttpClient> BookingAdapter<C> {
    #[must_use]
    pub const fn new(config: AdapterConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Lambda entrypoint: parses the invocation, dispatches it, and wraps
    /// the outcome into the response envelope, echoing the event's
    /// actionGroup, apiPath and httpMethod.
    ///
    /// # Errors
    ///
    /// Returns a `Diagnostic` when a structured booking field or a numeric
    /// parameter does not decode. Every other failure mode is contained in
    /// the envelope payload.
    pub async fn handle(
        &self,
        event: LambdaEvent<InvocationEvent>,
    ) -> Result<ResponseEnvelope, Diagnostic> {
        let (event, _context) = event.into_parts();
        debug!(event = ?event, "received action group invocation");
        info!(api_path = %event.api_path, http_method = %event.http_method, "dispatching invocation");

        let outcome = self.dispatch(&event).await?;
        Ok(ResponseEnvelope::new(&event, outcome.into_body()))
    }

    async fn dispatch(&self, event: &InvocationEvent) -> Result<RouteOutcome, Diagnostic> {
        let client: &dyn HttpClient = &self.client;
        let base_url = self.config.base_url.as_str();

        let Some(operation) = Operation::resolve(event)? else {
            return Ok(RouteOutcome::NotFound);
        };

        let result = match operation {
            Operation::GetProperty { property_id } => {
                ops::get_property(client, base_url, property_id.as_deref()).await
            }
            Operation::GetAvailability(query) => {
                ops::get_availability(client, base_url, &query).await
            }
            Operation::SearchProperties(None) => {
                info!("search invoked without a request body, skipping backend call");
                return Ok(RouteOutcome::MissingArguments);
            }
            Operation::SearchProperties(Some(args)) => {
                ops::search_properties(client, base_url, &args).await
            }
            Operation::CreateBooking(args) => {
                ops::create_booking(client, base_url, &args).await
            }
            Operation::DeleteBooking { booking_id } => {
                ops::delete_booking(client, base_url, booking_id.as_deref()).await
            }
        };
        Ok(RouteOutcome::Backend(result))
    }
}
