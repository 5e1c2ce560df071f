//! Path-based dispatch of invocation events onto backend operations.
//!
//! Argument extraction, coercion and structural validation all happen here,
//! at the parser boundary; downstream code works with fully typed arguments
//! and never re-checks event shape.

use lambda_runtime::tracing::warn;
use serde_json::Value;

use crate::models::backend::BackendResult;
use crate::models::booking::BookingArgs;
use crate::models::error::AdapterError;
use crate::models::event::InvocationEvent;
use crate::models::property::{AvailabilityQuery, SearchArgs};
use crate::payload::{coerce_integer, decode_structured_field};

/// Reply sent back when a search arrives without its request body.
pub const MISSING_PARAMETERS_MESSAGE: &str = "Additional parameters are required for this call.";

/// One variant per apiPath the action group schema declares, carrying that
/// operation's arguments already extracted and coerced.
///
/// The two booking paths are textually distinct (`/bookings` creates,
/// `/booking` deletes), so the HTTP method never participates in routing.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    GetProperty { property_id: Option<String> },
    GetAvailability(AvailabilityQuery),
    /// `None` means the request body / properties chain was absent and the
    /// dispatcher must short-circuit without calling the backend.
    SearchProperties(Option<SearchArgs>),
    CreateBooking(BookingArgs),
    DeleteBooking { booking_id: Option<String> },
}

impl Operation {
    /// Matches the event's apiPath against the known operation set and
    /// extracts that operation's arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when a structured booking field or a numeric field
    /// does not decode. Unknown paths are `Ok(None)`, not an error.
    pub fn resolve(event: &InvocationEvent) -> Result<Option<Self>, AdapterError> {
        let operation = match event.api_path.as_str() {
            "/properties" => Self::GetProperty {
                property_id: event.positional(0).map(str::to_string),
            },
            "/properties/{propertyId}/availability" => {
                Self::GetAvailability(AvailabilityQuery {
                    property_id: event.positional(0).map(str::to_string),
                    end_date: event.positional(1).map(str::to_string),
                    start_date: event.positional(2).map(str::to_string),
                })
            }
            "/properties/search" => Self::SearchProperties(search_args(event)?),
            "/bookings" => Self::CreateBooking(booking_args(event)?),
            "/booking" => Self::DeleteBooking {
                booking_id: event.positional(0).map(str::to_string),
            },
            other => {
                warn!(api_path = %other, "no operation registered for path");
                return Ok(None);
            }
        };
        Ok(Some(operation))
    }
}

/// Search body properties, in schema order: city, guests, country, bedrooms.
fn search_args(event: &InvocationEvent) -> Result<Option<SearchArgs>, AdapterError> {
    if event.body_properties().is_none() {
        return Ok(None);
    }
    Ok(Some(SearchArgs {
        city: present(event.body_property(0)),
        guests: coerce_present("guests", event.body_property(1))?,
        country: present(event.body_property(2)),
        bedrooms: coerce_present("bedrooms", event.body_property(3))?,
    }))
}

/// Booking body properties, in schema order: customerName, propertyId,
/// contactDetails, endDate, startDate, paymentInformation.
fn booking_args(event: &InvocationEvent) -> Result<BookingArgs, AdapterError> {
    let contact_details = decode_present("contactDetails", event.body_property(2))?;
    let payment_information = decode_present("paymentInformation", event.body_property(5))?;
    Ok(BookingArgs {
        customer_name: present(event.body_property(0)),
        property_id: coerce_present("propertyId", event.body_property(1))?,
        contact_details,
        end_date: present(event.body_property(3)),
        start_date: present(event.body_property(4)),
        payment_information,
    })
}

fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn coerce_present(field: &str, value: Option<&str>) -> Result<Option<i64>, AdapterError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| coerce_integer(field, v))
        .transpose()
}

fn decode_present(field: &str, value: Option<&str>) -> Result<Option<Value>, AdapterError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| decode_structured_field(field, v))
        .transpose()
}

/// Terminal outcome of dispatching one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// The operation ran; the result is either the backend's payload or the
    /// failure sentinel.
    Backend(BackendResult),
    /// SearchProperties arrived without its request body; no call was made.
    MissingArguments,
    /// The apiPath matches no operation in the schema.
    NotFound,
}

impl RouteOutcome {
    /// Payload for the response envelope, `None` when nothing matched.
    #[must_use]
    pub fn into_body(self) -> Option<Value> {
        match self {
            Self::Backend(result) => Some(result.into_body()),
            Self::MissingArguments => {
                Some(Value::String(MISSING_PARAMETERS_MESSAGE.to_string()))
            }
            Self::NotFound => None,
        }
    }
}
