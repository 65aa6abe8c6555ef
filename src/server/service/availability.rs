//! Booking availability check.
//!
//! A stay is available when no blocking booking (`pending` or `confirmed`) on the same
//! property overlaps it as a half-open interval. Cancelled and completed bookings never
//! block.

use crate::server::model::booking::{BookingSlot, StayRange};

/// Returns `true` when none of `existing` blocks `requested`.
///
/// `existing` must only contain bookings of the property being checked.
pub fn is_available(requested: &StayRange, existing: &[BookingSlot]) -> bool {
    first_conflict(requested, existing).is_none()
}

/// Returns the first blocking booking overlapping `requested`, if any.
pub fn first_conflict<'a>(
    requested: &StayRange,
    existing: &'a [BookingSlot],
) -> Option<&'a BookingSlot> {
    existing
        .iter()
        .find(|slot| slot.status.is_blocking() && slot.stay.overlaps(requested))
}
