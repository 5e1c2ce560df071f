//! Outbound request construction, one function per backend operation.

pub mod bookings;
pub mod properties;

pub use bookings::{create_booking, delete_booking};
pub use properties::{get_availability, get_property, search_properties};

/// Segment interpolated when a positional parameter never arrived, matching
/// the original adapter's template interpolation.
const UNDEFINED_SEGMENT: &str = "undefined";

fn encode_segment(value: Option<&str>) -> String {
    urlencoding::encode(value.unwrap_or(UNDEFINED_SEGMENT)).into_owned()
}
