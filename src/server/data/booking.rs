//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository`. It is generic over the connection so the
//! booking service can run the availability read and the insert or update inside one
//! transaction. The `booking` table also carries triggers that abort any write creating
//! two overlapping pending or confirmed bookings for one property; such writes fail with a
//! `DbErr` whose message contains `migration::BOOKING_OVERLAP_GUARD`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::booking::BookingStatus,
    server::{
        error::AppError,
        model::booking::{Booking, BookingSlot, NewBooking, StayRange},
    },
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a priced booking with status `pending`.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Created booking
    /// - `Err(AppError::DbErr)` - Database error, including an overlap guard violation
    pub async fn create(&self, booking: NewBooking) -> Result<Booking, AppError> {
        let now = Utc::now();
        let entity = entity::booking::ActiveModel {
            property_id: ActiveValue::Set(booking.property_id),
            user_id: ActiveValue::Set(booking.user_id),
            check_in_date: ActiveValue::Set(booking.stay.check_in()),
            check_out_date: ActiveValue::Set(booking.stay.check_out()),
            guests: ActiveValue::Set(booking.guests),
            total_price: ActiveValue::Set(booking.total_price),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            special_requests: ActiveValue::Set(booking.special_requests),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Gets bookings made by a renter, newest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }

    /// Gets every booking of a property, newest first.
    pub async fn get_by_property_id(&self, property_id: i32) -> Result<Vec<Booking>, AppError> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::PropertyId.eq(property_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }

    /// Gets dates and statuses of a property's bookings for the availability check.
    ///
    /// # Arguments
    /// - `property_id` - Property whose bookings to load
    /// - `exclude_id` - Booking to leave out, used when re-checking a booking's own dates
    pub async fn get_slots_by_property_id(
        &self,
        property_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<Vec<BookingSlot>, AppError> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::PropertyId.eq(property_id));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::booking::Column::Id.ne(exclude_id));
        }

        query
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| Booking::from_entity(entity).map(|b| b.slot()))
            .collect()
    }

    /// Changes a booking's dates, guest count, price and requests.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Updated booking
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(AppError::DbErr)` - Database error, including an overlap guard violation
    pub async fn update_stay(
        &self,
        id: i32,
        stay: StayRange,
        guests: i32,
        total_price: rust_decimal::Decimal,
        special_requests: String,
    ) -> Result<Option<Booking>, AppError> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.check_in_date = ActiveValue::Set(stay.check_in());
        active_model.check_out_date = ActiveValue::Set(stay.check_out());
        active_model.guests = ActiveValue::Set(guests);
        active_model.total_price = ActiveValue::Set(total_price);
        active_model.special_requests = ActiveValue::Set(special_requests);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)?))
    }

    /// Sets a booking's status.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Updated booking
    /// - `Ok(None)` - No booking with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)?))
    }

    /// Deletes a booking.
    ///
    /// # Returns
    /// - `Ok(true)` - Booking deleted
    /// - `Ok(false)` - No booking with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
