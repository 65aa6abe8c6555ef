use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenValidator,
};

/// Resolves the `Authorization: Bearer <token>` header of a request to a user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a dyn TokenValidator,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a dyn TokenValidator,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires an authenticated caller.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and its user exists
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token unknown or revoked
    /// - `Err(AuthError::UserNotInDatabase)` - Token belongs to a deleted user
    pub async fn require(&self) -> Result<User, AppError> {
        let token = bearer_token(self.headers)?;

        let Some(user_id) = self.tokens.validate(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::MissingToken)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
