//! Property image factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an image for `property_id` with a unique URL.
///
/// # Arguments
/// - `db` - Database connection
/// - `property_id` - Property the image belongs to
/// - `is_primary` - Whether the image is flagged as the primary image
pub async fn create_image(
    db: &DatabaseConnection,
    property_id: i32,
    is_primary: bool,
) -> Result<entity::property_image::Model, DbErr> {
    let id = next_id();

    entity::property_image::ActiveModel {
        property_id: ActiveValue::Set(property_id),
        url: ActiveValue::Set(format!("https://img.example.com/{}.jpg", id)),
        caption: ActiveValue::Set(format!("Image {}", id)),
        is_primary: ActiveValue::Set(is_primary),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
