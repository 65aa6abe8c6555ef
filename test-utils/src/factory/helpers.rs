//! Shared helper utilities for factory methods.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a calendar date, panicking on invalid input.
///
/// Test-only convenience so fixtures can be written as `date(2024, 1, 10)`.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Creates a host user and a property they own.
///
/// # Returns
/// - `Ok((host, property))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_property_with_host(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::property::Model), DbErr> {
    let host = crate::factory::user::create_user(db).await?;
    let property = crate::factory::property::create_property(db, host.id).await?;

    Ok((host, property))
}
