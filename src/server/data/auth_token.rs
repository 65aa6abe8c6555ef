//! Bearer token storage.
//!
//! Each user holds at most one token; the `user_id` column is unique.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct AuthTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores `token` for `user_id` and returns it.
    pub async fn create(&self, user_id: i32, token: String) -> Result<String, DbErr> {
        let entity = entity::auth_token::ActiveModel {
            token: ActiveValue::Set(token),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.token)
    }

    /// Gets the token currently held by a user.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|t| t.token))
    }

    /// Resolves a token to the ID of the user holding it.
    pub async fn find_user_id(&self, token: &str) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(|t| t.user_id))
    }

    /// Deletes a token.
    ///
    /// # Returns
    /// - `Ok(true)` - Token existed and was removed
    /// - `Ok(false)` - Token was unknown
    pub async fn delete(&self, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
