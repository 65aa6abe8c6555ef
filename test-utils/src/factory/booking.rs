//! Booking factory for creating test stays.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Inserts rows directly, so no availability or pricing rules are applied; tests set up
/// the exact state they need.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, property.id, guest.id)
///     .dates(date(2024, 1, 10), date(2024, 1, 13))
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    property_id: i32,
    user_id: i32,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    guests: i32,
    total_price: Decimal,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - dates: two nights starting 30 days from today
    /// - guests: `2`
    /// - total_price: `200.00`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, property_id: i32, user_id: i32) -> Self {
        let check_in_date = Utc::now().date_naive() + Duration::days(30);
        Self {
            db,
            property_id,
            user_id,
            check_in_date,
            check_out_date: check_in_date + Duration::days(2),
            guests: 2,
            total_price: Decimal::new(20000, 2),
            status: "pending".to_string(),
        }
    }

    /// Sets the half-open stay range `[check_in_date, check_out_date)`.
    pub fn dates(mut self, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self.check_out_date = check_out_date;
        self
    }

    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    pub fn total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = total_price;
        self
    }

    /// Sets the stored status string (`pending`, `confirmed`, `cancelled`, `completed`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            property_id: ActiveValue::Set(self.property_id),
            user_id: ActiveValue::Set(self.user_id),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            guests: ActiveValue::Set(self.guests),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            special_requests: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with `status` over `[check_in, check_out)`.
pub async fn create_booking(
    db: &DatabaseConnection,
    property_id: i32,
    user_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: &str,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, property_id, user_id)
        .dates(check_in, check_out)
        .status(status)
        .build()
        .await
}
