use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub property_id: i32,
    pub user: UserDto,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateReviewDto {
    pub property_id: i32,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// Review body for a property named in the path, or for editing an existing review.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReviewRequestDto {
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}
