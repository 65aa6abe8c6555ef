use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{api::ErrorDto, booking::BookingStatus};

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Check-out is on or before check-in.
    ///
    /// Raised before any availability or price computation. Results in 400 Bad Request.
    #[error("Check-out date must be after check-in date")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Guest count is below one or above the property's capacity.
    #[error("Guest count must be between 1 and {max_guests}")]
    GuestsOutOfRange { guests: i32, max_guests: i32 },

    /// Property has its availability flag switched off.
    #[error("Property is not accepting bookings")]
    PropertyNotBookable { property_id: i32 },

    /// A pending or confirmed booking already covers part of the requested range.
    ///
    /// Results in 409 Conflict, distinct from validation failures.
    #[error("Property is not available for the selected dates")]
    Unavailable {
        property_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// The stay's total price exceeds what a booking can record.
    #[error("Total price for {nights} nights is too large")]
    TotalOutOfRange { nights: i64 },

    /// Requested status change is not allowed from the booking's current status.
    #[error("Cannot change booking status from {from} to {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

/// Converts booking errors into HTTP responses.
///
/// - `Unavailable` → 409 Conflict
/// - everything else → 400 Bad Request
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unavailable { .. } => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
