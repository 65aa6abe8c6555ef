//! Auth token factory for creating bearer tokens bound to a user.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a token for `user_id`.
///
/// The token value is `"token-{id}"` padded to 40 characters so it is unique per call.
///
/// # Returns
/// - `Ok(entity::auth_token::Model)` - Created token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::auth_token::Model, DbErr> {
    let token = format!("{:0>40}", format!("token-{}", next_id()));

    entity::auth_token::ActiveModel {
        token: ActiveValue::Set(token),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
