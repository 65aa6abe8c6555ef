//! Booking lifecycle: creation, changes, status transitions and removal.
//!
//! Creating or changing a booking runs the availability read and the write in one
//! database transaction. The `booking` table's overlap triggers back this up; a write
//! they reject is reported as the same `BookingError::Unavailable` the application-level
//! check returns.

use migration::BOOKING_OVERLAP_GUARD;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::booking::BookingStatus,
    server::{
        data::{booking::BookingRepository, property::PropertyRepository},
        error::{auth::AuthError, booking::BookingError, AppError},
        model::{
            booking::{Booking, CreateBookingParams, NewBooking, StayRange, UpdateBookingParams},
            property::Property,
        },
        service::{availability, pricing, property::property_not_found},
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a stay as `pending` with a server-computed total price.
    ///
    /// Checks run in order: property exists, property accepts bookings, guest count fits,
    /// dates are free. The date range itself was validated when `params` was built.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Created booking
    /// - `Err(AppError::NotFound)` - Property does not exist
    /// - `Err(BookingError::PropertyNotBookable)` - Property is not accepting bookings
    /// - `Err(BookingError::GuestsOutOfRange)` - Guest count below 1 or above capacity
    /// - `Err(BookingError::Unavailable)` - A pending or confirmed booking overlaps
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;

        let property = PropertyRepository::new(&txn)
            .find_by_id(params.property_id)
            .await?
            .ok_or_else(|| property_not_found(params.property_id))?;

        if !property.is_available {
            return Err(BookingError::PropertyNotBookable {
                property_id: property.id,
            }
            .into());
        }
        check_guests(&property, params.guests)?;

        let repo = BookingRepository::new(&txn);
        let slots = repo.get_slots_by_property_id(property.id, None).await?;
        if !availability::is_available(&params.stay, &slots) {
            return Err(unavailable(property.id, &params.stay));
        }

        let quote = pricing::quote(property.price_per_night, &params.stay)?;

        let booking = repo
            .create(NewBooking {
                property_id: property.id,
                user_id: params.user_id,
                stay: params.stay,
                guests: params.guests,
                total_price: quote.total,
                special_requests: params.special_requests,
            })
            .await
            .map_err(|err| overlap_guard_to_unavailable(err, property.id, &params.stay))?;

        txn.commit().await?;

        tracing::info!(
            "User {} booked property {} from {} to {} ({} nights, {})",
            booking.user_id,
            booking.property_id,
            booking.stay.check_in(),
            booking.stay.check_out(),
            quote.nights,
            quote.total
        );

        Ok(booking)
    }

    /// Gets the caller's bookings, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        BookingRepository::new(self.db).get_by_user_id(user_id).await
    }

    /// Gets every booking of a property; only its host may do so.
    pub async fn get_for_property(
        &self,
        property_id: i32,
        caller_id: i32,
    ) -> Result<Vec<Booking>, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| property_not_found(property_id))?;

        if property.host_id != caller_id {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!(
                    "User attempted to list bookings of property {} they do not host",
                    property_id
                ),
            )
            .into());
        }

        BookingRepository::new(self.db)
            .get_by_property_id(property_id)
            .await
    }

    /// Gets a booking visible to the caller: their own, or one on a property they host.
    pub async fn get(&self, id: i32, caller_id: i32) -> Result<Booking, AppError> {
        let (booking, _) = get_visible(self.db, id, caller_id).await?;

        Ok(booking)
    }

    /// Changes the dates, guest count or requests of the caller's active booking.
    ///
    /// Availability is re-checked ignoring the booking itself and the price is recomputed
    /// at the property's current rate.
    pub async fn update(&self, params: UpdateBookingParams) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;

        let (booking, property) = get_visible(&txn, params.id, params.user_id).await?;
        require_renter(&booking, params.user_id)?;

        if !booking.status.is_blocking() {
            return Err(AppError::BadRequest(format!(
                "Cannot change a {} booking",
                booking.status
            )));
        }
        check_guests(&property, params.guests)?;

        let repo = BookingRepository::new(&txn);
        let slots = repo
            .get_slots_by_property_id(property.id, Some(booking.id))
            .await?;
        if !availability::is_available(&params.stay, &slots) {
            return Err(unavailable(property.id, &params.stay));
        }

        let quote = pricing::quote(property.price_per_night, &params.stay)?;

        let updated = repo
            .update_stay(
                booking.id,
                params.stay,
                params.guests,
                quote.total,
                params.special_requests,
            )
            .await
            .map_err(|err| overlap_guard_to_unavailable(err, property.id, &params.stay))?
            .ok_or_else(|| booking_not_found(booking.id))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Cancels a pending or confirmed booking; the renter or the host may do so.
    pub async fn cancel(&self, id: i32, caller_id: i32) -> Result<Booking, AppError> {
        self.transition(id, caller_id, BookingStatus::Cancelled, |_, _| Ok(()))
            .await
    }

    /// Confirms a pending booking; only the host may do so.
    pub async fn confirm(&self, id: i32, caller_id: i32) -> Result<Booking, AppError> {
        self.transition(id, caller_id, BookingStatus::Confirmed, require_host)
            .await
    }

    /// Marks a confirmed booking as completed; only the host may do so.
    pub async fn complete(&self, id: i32, caller_id: i32) -> Result<Booking, AppError> {
        self.transition(id, caller_id, BookingStatus::Completed, require_host)
            .await
    }

    /// Deletes the caller's booking.
    pub async fn delete(&self, id: i32, caller_id: i32) -> Result<(), AppError> {
        let (booking, _) = get_visible(self.db, id, caller_id).await?;
        require_renter(&booking, caller_id)?;

        BookingRepository::new(self.db).delete(booking.id).await?;

        Ok(())
    }

    /// Loads, checks and moves a booking to `to` inside one transaction.
    ///
    /// `authorize` decides whether the caller may make this change.
    async fn transition(
        &self,
        id: i32,
        caller_id: i32,
        to: BookingStatus,
        authorize: fn(&Property, i32) -> Result<(), AuthError>,
    ) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;

        let (booking, property) = get_visible(&txn, id, caller_id).await?;
        authorize(&property, caller_id)?;
        check_transition(booking.status, to)?;

        let updated = BookingRepository::new(&txn)
            .update_status(booking.id, to)
            .await
            .map_err(|err| overlap_guard_to_unavailable(err, booking.property_id, &booking.stay))?
            .ok_or_else(|| booking_not_found(booking.id))?;

        txn.commit().await?;

        tracing::info!(
            "Booking {} moved from {} to {}",
            booking.id,
            booking.status,
            updated.status
        );

        Ok(updated)
    }
}

/// Loads a booking and its property when the caller is the renter or the host.
///
/// Bookings the caller has no part in are reported as not found.
async fn get_visible<C: ConnectionTrait>(
    db: &C,
    id: i32,
    caller_id: i32,
) -> Result<(Booking, Property), AppError> {
    let booking = BookingRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| booking_not_found(id))?;

    let property = PropertyRepository::new(db)
        .find_by_id(booking.property_id)
        .await?
        .ok_or_else(|| property_not_found(booking.property_id))?;

    if booking.user_id != caller_id && property.host_id != caller_id {
        return Err(booking_not_found(id));
    }

    Ok((booking, property))
}

/// Allowed status changes: pending to confirmed or cancelled, confirmed to cancelled or
/// completed.
pub fn check_transition(from: BookingStatus, to: BookingStatus) -> Result<(), BookingError> {
    use BookingStatus::*;

    match (from, to) {
        (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        | (Confirmed, Completed) => Ok(()),
        _ => Err(BookingError::InvalidStatusTransition { from, to }),
    }
}

fn check_guests(property: &Property, guests: i32) -> Result<(), BookingError> {
    if guests < 1 || guests > property.max_guests {
        return Err(BookingError::GuestsOutOfRange {
            guests,
            max_guests: property.max_guests,
        });
    }

    Ok(())
}

fn require_renter(booking: &Booking, caller_id: i32) -> Result<(), AuthError> {
    if booking.user_id != caller_id {
        return Err(AuthError::AccessDenied(
            caller_id,
            format!("User attempted to modify booking {} they did not make", booking.id),
        ));
    }

    Ok(())
}

fn require_host(property: &Property, caller_id: i32) -> Result<(), AuthError> {
    if property.host_id != caller_id {
        return Err(AuthError::AccessDenied(
            caller_id,
            format!(
                "User attempted to manage a booking on property {} they do not host",
                property.id
            ),
        ));
    }

    Ok(())
}

fn unavailable(property_id: i32, stay: &StayRange) -> AppError {
    BookingError::Unavailable {
        property_id,
        check_in: stay.check_in(),
        check_out: stay.check_out(),
    }
    .into()
}

/// Maps a write rejected by the overlap triggers to `BookingError::Unavailable`.
fn overlap_guard_to_unavailable(err: AppError, property_id: i32, stay: &StayRange) -> AppError {
    match err {
        AppError::DbErr(db_err) if db_err.to_string().contains(BOOKING_OVERLAP_GUARD) => {
            tracing::warn!(
                "Overlap guard rejected booking write on property {}",
                property_id
            );
            unavailable(property_id, stay)
        }
        err => err,
    }
}

fn booking_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking {} not found", id))
}

#[cfg(test)]
mod test;
