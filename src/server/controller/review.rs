use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto, ReviewRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::{CreateReviewParams, Review, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewListParams {
    /// Only reviews of this property
    pub property_id: Option<i32>,
}

/// List reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(ReviewListParams),
    responses(
        (status = 200, description = "Reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews: Vec<ReviewDto> = service
        .get_all(params.property_id)
        .await?
        .into_iter()
        .map(Review::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(reviews)))
}

/// Review a property.
///
/// # Returns
/// - `201 Created` - Review created
/// - `400 Bad Request` - Rating outside 1-5
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No property with that ID
/// - `409 Conflict` - Property already reviewed by caller
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Rating outside 1-5", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 409, description = "Property already reviewed by caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = ReviewService::new(&state.db);
    let review = service
        .create(CreateReviewParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);
    let review = service.get(review_id).await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Change the rating and comment of a review.
///
/// # Access Control
/// - Author of the review
#[utoipa::path(
    put,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    request_body = ReviewRequestDto,
    responses(
        (status = 200, description = "Updated review", body = ReviewDto),
        (status = 400, description = "Rating outside 1-5", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
    Json(payload): Json<ReviewRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = ReviewService::new(&state.db);
    let review = service
        .update(UpdateReviewParams::from_dto(review_id, user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Delete a review.
///
/// # Access Control
/// - Author of the review
#[utoipa::path(
    delete,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = ReviewService::new(&state.db);
    service.delete(review_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
