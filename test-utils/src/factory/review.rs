//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a review of `property_id` by `user_id` with the given rating.
///
/// # Returns
/// - `Ok(entity::review::Model)` - Created review entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review(
    db: &DatabaseConnection,
    property_id: i32,
    user_id: i32,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    let now = Utc::now();

    entity::review::ActiveModel {
        property_id: ActiveValue::Set(property_id),
        user_id: ActiveValue::Set(user_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(format!("{} stars", rating)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
