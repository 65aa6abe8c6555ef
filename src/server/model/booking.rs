//! Booking domain models and parameters.
//!
//! The central type is `StayRange`, a half-open `[check_in, check_out)` date interval that
//! can only be constructed when check-out falls strictly after check-in. Every booking
//! operation works on a `StayRange`, so an empty or inverted stay is rejected before any
//! availability or price computation takes place.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    model::booking::{BookingDto, BookingRequestDto, BookingStatus, CreateBookingDto},
    server::error::{booking::BookingError, internal::InternalError, AppError},
};

/// Half-open stay interval `[check_in, check_out)` of at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Creates a stay range.
    ///
    /// # Returns
    /// - `Ok(StayRange)` - `check_out` is strictly after `check_in`
    /// - `Err(BookingError::InvalidDateRange)` - Zero-length or inverted range
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// First day no longer covered by the stay.
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Whole nights between check-in and check-out; always at least 1.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether two stays share at least one night.
    ///
    /// Ranges touching at a boundary (one's check-out equals the other's check-in) do not
    /// overlap.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }
}

/// Dates and status of an existing booking, as seen by the availability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingSlot {
    pub stay: StayRange,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub property_id: i32,
    /// Renter who made the booking.
    pub user_id: i32,
    pub stay: StayRange,
    pub guests: i32,
    /// Price fixed at booking time: nights x nightly rate.
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub special_requests: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr)` - Stored status is unknown or the stored range is
    ///   empty
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let status = parse_status(entity.id, &entity.status)?;
        let stay = StayRange::new(entity.check_in_date, entity.check_out_date)
            .map_err(|_| InternalError::InvalidStoredRange { id: entity.id })?;

        Ok(Self {
            id: entity.id,
            property_id: entity.property_id,
            user_id: entity.user_id,
            stay,
            guests: entity.guests,
            total_price: entity.total_price.round_dp(2),
            status,
            special_requests: entity.special_requests,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn slot(&self) -> BookingSlot {
        BookingSlot {
            stay: self.stay,
            status: self.status,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            property_id: self.property_id,
            user_id: self.user_id,
            check_in_date: self.stay.check_in(),
            check_out_date: self.stay.check_out(),
            guests: self.guests,
            total_price: self.total_price,
            status: self.status,
            special_requests: self.special_requests,
            created_at: self.created_at,
            duration: self.stay.nights(),
        }
    }
}

/// Parses a stored status column, treating unknown values as a codebase invariant failure.
pub fn parse_status(booking_id: i32, value: &str) -> Result<BookingStatus, InternalError> {
    value
        .parse::<BookingStatus>()
        .map_err(|_| InternalError::UnknownStoredValue {
            column: "booking.status",
            id: booking_id,
            value: value.to_string(),
        })
}

/// Requested stay before availability and pricing are applied.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub property_id: i32,
    pub user_id: i32,
    pub stay: StayRange,
    pub guests: i32,
    pub special_requests: String,
}

impl CreateBookingParams {
    /// Converts a create request, validating the date range first.
    pub fn from_dto(user_id: i32, dto: CreateBookingDto) -> Result<Self, BookingError> {
        Ok(Self {
            property_id: dto.property_id,
            user_id,
            stay: StayRange::new(dto.check_in_date, dto.check_out_date)?,
            guests: dto.guests,
            special_requests: dto.special_requests,
        })
    }

    /// Converts a request to book the property named in the request path.
    pub fn from_request(
        property_id: i32,
        user_id: i32,
        dto: BookingRequestDto,
    ) -> Result<Self, BookingError> {
        Ok(Self {
            property_id,
            user_id,
            stay: StayRange::new(dto.check_in_date, dto.check_out_date)?,
            guests: dto.guests,
            special_requests: dto.special_requests,
        })
    }
}

/// Renter's change to an existing booking.
#[derive(Debug, Clone)]
pub struct UpdateBookingParams {
    pub id: i32,
    /// Caller; must be the renter.
    pub user_id: i32,
    pub stay: StayRange,
    pub guests: i32,
    pub special_requests: String,
}

impl UpdateBookingParams {
    pub fn from_dto(id: i32, user_id: i32, dto: BookingRequestDto) -> Result<Self, BookingError> {
        Ok(Self {
            id,
            user_id,
            stay: StayRange::new(dto.check_in_date, dto.check_out_date)?,
            guests: dto.guests,
            special_requests: dto.special_requests,
        })
    }
}

/// Fully priced booking row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub property_id: i32,
    pub user_id: i32,
    pub stay: StayRange,
    pub guests: i32,
    pub total_price: Decimal,
    pub special_requests: String,
}
