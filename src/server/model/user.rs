//! User domain models and parameters.
//!
//! Provides the domain model for registered accounts plus the parameter types used when
//! registering users and editing their profile.

use chrono::{DateTime, Utc};

use crate::model::user::{RegisterUserDto, UpdateProfileDto, UserDto};

/// Registered account.
///
/// Carries the stored password hash so the auth service can verify credentials; the hash
/// never leaves the server since `UserDto` has no field for it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 hash in PHC string format.
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            password_hash: entity.password_hash,
            date_joined: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            date_joined: self.date_joined,
        }
    }
}

/// Registration input with the plain-text password still attached.
///
/// The service validates and hashes the password before anything is stored.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

/// Row to insert for a new user, password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Profile fields a user may edit on their own account.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    /// ID of the user being edited.
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UpdateProfileParams {
    pub fn from_dto(id: i32, dto: UpdateProfileDto) -> Self {
        Self {
            id,
            email: dto.email.trim().to_string(),
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
