//! Stay price calculation with exact decimal arithmetic.

use rust_decimal::Decimal;

use crate::server::{
    error::booking::BookingError,
    model::{booking::StayRange, property::MAX_PRICE},
};

/// Price of a stay at a nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    /// Whole nights, always at least 1.
    pub nights: i64,
    pub nightly_rate: Decimal,
    /// `nights x nightly_rate`, rounded to cents.
    pub total: Decimal,
}

/// Computes `nights x nightly_rate`.
///
/// A `StayRange` always spans at least one night, so an empty or inverted stay has
/// already been rejected by the time a quote can be requested.
///
/// # Returns
/// - `Ok(StayQuote)` - Price of the stay
/// - `Err(BookingError::TotalOutOfRange)` - The total cannot be stored as a booking price
pub fn quote(nightly_rate: Decimal, stay: &StayRange) -> Result<StayQuote, BookingError> {
    let nights = stay.nights();

    let total = nightly_rate
        .checked_mul(Decimal::from(nights))
        .map(|total| total.round_dp(2))
        .filter(|total| *total <= MAX_PRICE)
        .ok_or(BookingError::TotalOutOfRange { nights })?;

    Ok(StayQuote {
        nights,
        nightly_rate,
        total,
    })
}
