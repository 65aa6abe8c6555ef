//! Account registration, credential login and profile management.

pub mod password;
pub mod token;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, UpdateProfileParams, User},
    service::auth::{
        password::{hash_password, validate_password, verify_password},
        token::TokenValidator,
    },
};

/// Successful login: the user and their bearer token.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub user: User,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a dyn TokenValidator,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a dyn TokenValidator) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Empty username or email, or password too short
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        if params.username.is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if params.email.is_empty() {
            return Err(AppError::BadRequest("Email must not be empty".to_string()));
        }
        validate_password(&params.password)?;

        let repo = UserRepository::new(self.db);

        if repo.username_exists(&params.username).await? {
            return Err(username_taken(&params.username));
        }

        let password_hash = hash_password(&params.password)?;
        let username = params.username.clone();

        let user = repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
                first_name: params.first_name,
                last_name: params.last_name,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => username_taken(&username),
                _ => err.into(),
            })?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok(LoginSession)` - Credentials valid; token issued or reused
    /// - `Err(AppError::BadRequest)` - Username or password missing
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSession, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        let token = self.tokens.issue(user.id).await?;

        Ok(LoginSession { token, user })
    }

    /// Revokes the token the caller authenticated with.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        if !self.tokens.revoke(token).await? {
            tracing::debug!("Logout with a token that was already revoked");
        }

        Ok(())
    }

    /// Updates the caller's email and names.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Empty email
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        if params.email.is_empty() {
            return Err(AppError::BadRequest("Email must not be empty".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let id = params.id;

        repo.update_profile(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Replaces the caller's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Current password wrong or new password too short
    pub async fn change_password(
        &self,
        user: &User,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if !verify_password(old_password, &user.password_hash) {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }
        validate_password(new_password)?;

        let repo = UserRepository::new(self.db);
        repo.update_password_hash(user.id, hash_password(new_password)?)
            .await?;

        Ok(())
    }
}

fn username_taken(username: &str) -> AppError {
    AppError::Conflict(format!("Username '{}' is already taken", username))
}

#[cfg(test)]
mod test;
