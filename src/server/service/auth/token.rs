//! Bearer token issuing and validation.
//!
//! Request handlers only see the `TokenValidator` trait, held in `AppState`. The
//! production implementation stores one opaque token per user in the `auth_token` table.

use async_trait::async_trait;
use rand::Rng;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{data::auth_token::AuthTokenRepository, error::AppError};

/// Length of generated bearer tokens.
pub const TOKEN_LENGTH: usize = 40;

/// Issues, validates and revokes opaque bearer tokens.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Returns a token for `user_id`, reusing the user's current token if one exists.
    async fn issue(&self, user_id: i32) -> Result<String, AppError>;

    /// Resolves a token to its user ID; `None` for unknown or revoked tokens.
    async fn validate(&self, token: &str) -> Result<Option<i32>, AppError>;

    /// Revokes a token. Returns `false` when the token was not known.
    async fn revoke(&self, token: &str) -> Result<bool, AppError>;
}

/// `TokenValidator` backed by the `auth_token` table.
#[derive(Clone)]
pub struct DatabaseTokenValidator {
    db: DatabaseConnection,
}

impl DatabaseTokenValidator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates a random alphanumeric token of `TOKEN_LENGTH` characters.
    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[async_trait]
impl TokenValidator for DatabaseTokenValidator {
    async fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let repo = AuthTokenRepository::new(&self.db);

        if let Some(token) = repo.find_by_user_id(user_id).await? {
            return Ok(token);
        }

        match repo.create(user_id, Self::generate_token()).await {
            Ok(token) => Ok(token),
            // A concurrent login for the same user inserted first
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                repo.find_by_user_id(user_id)
                    .await?
                    .ok_or_else(|| AppError::InternalError(err.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn validate(&self, token: &str) -> Result<Option<i32>, AppError> {
        let repo = AuthTokenRepository::new(&self.db);

        Ok(repo.find_user_id(token).await?)
    }

    async fn revoke(&self, token: &str) -> Result<bool, AppError> {
        let repo = AuthTokenRepository::new(&self.db);

        Ok(repo.delete(token).await?)
    }
}
