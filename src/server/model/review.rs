//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto, ReviewRequestDto},
    server::{error::AppError, model::user::User},
};

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Review of a property together with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub property_id: i32,
    pub user: User,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Converts a review entity and its author entity into a domain model.
    pub fn from_entity(entity: entity::review::Model, author: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            user: User::from_entity(author),
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            property_id: self.property_id,
            user: self.user.into_dto(),
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Mean star rating and number of reviews for one property.
///
/// `average` is `0.0` when `count` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    pub average: f64,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub property_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParams {
    pub fn from_dto(user_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            property_id: dto.property_id,
            user_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }

    /// Builds params for a review of the property named in the request path.
    pub fn from_request(property_id: i32, user_id: i32, dto: ReviewRequestDto) -> Self {
        Self {
            property_id,
            user_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateReviewParams {
    pub id: i32,
    /// Caller; must be the review's author.
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
}

impl UpdateReviewParams {
    pub fn from_dto(id: i32, user_id: i32, dto: ReviewRequestDto) -> Self {
        Self {
            id,
            user_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}

/// Rejects ratings outside `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }

    Ok(())
}
