use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use async_trait::async_trait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard},
    service::auth::token::{DatabaseTokenValidator, TokenValidator},
};

mod bearer_token;
mod require;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Validator resolving every token to a fixed user ID.
struct FixedTokenValidator(Option<i32>);

#[async_trait]
impl TokenValidator for FixedTokenValidator {
    async fn issue(&self, _user_id: i32) -> Result<String, AppError> {
        Ok("fixed".to_string())
    }

    async fn validate(&self, _token: &str) -> Result<Option<i32>, AppError> {
        Ok(self.0)
    }

    async fn revoke(&self, _token: &str) -> Result<bool, AppError> {
        Ok(true)
    }
}
