use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingRequestDto},
        property::{
            AvailabilityDto, CreatePropertyImageDto, PaginatedPropertiesDto, PropertyDto,
            PropertyImageDto, PropertyListItemDto, PropertyType, RoomType, UpsertPropertyDto,
        },
        review::{ReviewDto, ReviewRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            booking::{CreateBookingParams, StayRange},
            property::{
                CreatePropertyImageParams, PropertyFilter, PropertyListItem, PropertyOrdering,
                UpsertPropertyParams,
            },
            review::CreateReviewParams,
        },
        service::{booking::BookingService, property::PropertyService, review::ReviewService},
        state::AppState,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

fn default_entries() -> u64 {
    10
}

/// Query parameters for listing properties.
#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct PropertyListParams {
    /// Page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub property_type: Option<PropertyType>,
    pub room_type: Option<RoomType>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
    #[param(value_type = Option<String>)]
    pub min_price: Option<Decimal>,
    #[param(value_type = Option<String>)]
    pub max_price: Option<Decimal>,
    /// Minimum guest capacity
    pub guests: Option<i32>,
    /// Comma-separated amenities that must all be present
    pub amenities: Option<String>,
    /// Substring of title, description, address, city, state or country
    pub search: Option<String>,
    /// Only applied together with `check_out`
    pub check_in: Option<NaiveDate>,
    /// Only applied together with `check_in`
    pub check_out: Option<NaiveDate>,
    /// `price_per_night`, `created_at` or `average_rating`, prefixed with `-` for descending
    pub ordering: Option<String>,
}

impl PropertyListParams {
    /// Converts query parameters into a listing filter.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unknown ordering
    /// - `Err(AppError::BookingErr)` - `check_out` not after `check_in`
    pub fn into_filter(self) -> Result<PropertyFilter, AppError> {
        let stay = match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(StayRange::new(check_in, check_out)?),
            _ => None,
        };
        let ordering = match self.ordering.as_deref() {
            Some(ordering) if !ordering.is_empty() => ordering.parse::<PropertyOrdering>()?,
            _ => PropertyOrdering::default(),
        };
        let amenities = self
            .amenities
            .map(|amenities| {
                amenities
                    .split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(PropertyFilter {
            property_type: self.property_type,
            room_type: self.room_type,
            city: non_empty(self.city),
            state: non_empty(self.state),
            country: non_empty(self.country),
            is_available: self.is_available,
            is_featured: self.is_featured,
            min_price: self.min_price,
            max_price: self.max_price,
            guests: self.guests,
            amenities,
            search: non_empty(self.search),
            stay,
            ordering,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search text
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StayParams {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// List properties.
///
/// Returns a filtered, ordered page of listings with their average rating and thumbnail.
///
/// # Returns
/// - `200 OK` - Page of listings
/// - `400 Bad Request` - Unknown ordering or invalid stay range
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    params(PropertyListParams),
    responses(
        (status = 200, description = "Page of listings", body = PaginatedPropertiesDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_properties(
    State(state): State<AppState>,
    Query(params): Query<PropertyListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PropertyService::new(&state.db);

    let (page, entries) = (params.page, params.entries);
    let filter = params.into_filter()?;

    let properties = service.get_paginated(&filter, page, entries).await?;

    Ok((StatusCode::OK, Json(properties.into_dto())))
}

/// Create a property hosted by the caller.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - Listing created
/// - `400 Bad Request` - Empty title, negative price or capacity below 1
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    request_body = UpsertPropertyDto,
    responses(
        (status = 201, description = "Listing created", body = PropertyDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertPropertyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = PropertyService::new(&state.db);

    let property = service
        .create(user.id, UpsertPropertyParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(property.into_dto())))
}

/// Get featured properties that accept bookings.
#[utoipa::path(
    get,
    path = "/api/properties/featured",
    tag = PROPERTY_TAG,
    responses(
        (status = 200, description = "Featured listings", body = Vec<PropertyListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_properties(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = PropertyService::new(&state.db);

    let properties = service.get_featured().await?;

    Ok((StatusCode::OK, Json(into_list_dto(properties))))
}

/// Search available properties.
///
/// Matches `q` against title, description, city, state and country.
///
/// # Returns
/// - `200 OK` - Matching listings
/// - `400 Bad Request` - Empty query
#[utoipa::path(
    get,
    path = "/api/properties/search",
    tag = PROPERTY_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching listings", body = Vec<PropertyListItemDto>),
        (status = 400, description = "Search query is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_properties(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PropertyService::new(&state.db);

    let properties = service.search(&params.q).await?;

    Ok((StatusCode::OK, Json(into_list_dto(properties))))
}

/// Get a property with its host, images, reviews and rating.
///
/// # Returns
/// - `200 OK` - Listing detail
/// - `404 Not Found` - No listing with that ID
#[utoipa::path(
    get,
    path = "/api/properties/{property_id}",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Listing detail", body = PropertyDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property(
    State(state): State<AppState>,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PropertyService::new(&state.db);

    match service.get_detail(property_id).await? {
        Some(property) => Ok((StatusCode::OK, Json(property.into_dto()))),
        None => Err(AppError::NotFound(format!(
            "Property {} not found",
            property_id
        ))),
    }
}

/// Replace a property's fields.
///
/// # Access Control
/// - Host of the property
///
/// # Returns
/// - `200 OK` - Updated listing
/// - `400 Bad Request` - Invalid listing data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not the host
/// - `404 Not Found` - No listing with that ID
#[utoipa::path(
    put,
    path = "/api/properties/{property_id}",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    request_body = UpsertPropertyDto,
    responses(
        (status = 200, description = "Updated listing", body = PropertyDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
    Json(payload): Json<UpsertPropertyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = PropertyService::new(&state.db);

    let property = service
        .update(property_id, user.id, UpsertPropertyParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(property.into_dto())))
}

/// Delete a property with its images, reviews and bookings.
///
/// # Access Control
/// - Host of the property
#[utoipa::path(
    delete,
    path = "/api/properties/{property_id}",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = PropertyService::new(&state.db);
    service.delete(property_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Check whether a stay can be booked and quote its price.
///
/// # Returns
/// - `200 OK` - Availability and price
/// - `400 Bad Request` - `check_out` not after `check_in`
/// - `404 Not Found` - No listing with that ID
#[utoipa::path(
    get,
    path = "/api/properties/{property_id}/availability",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID"),
        StayParams
    ),
    responses(
        (status = 200, description = "Availability and price", body = AvailabilityDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Path(property_id): Path<i32>,
    Query(params): Query<StayParams>,
) -> Result<impl IntoResponse, AppError> {
    let stay = StayRange::new(params.check_in, params.check_out)?;

    let service = PropertyService::new(&state.db);
    let quote = service.check_availability(property_id, stay).await?;

    Ok((StatusCode::OK, Json(quote.into_dto())))
}

/// Add an image to a property.
///
/// # Access Control
/// - Host of the property
#[utoipa::path(
    post,
    path = "/api/properties/{property_id}/images",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    request_body = CreatePropertyImageDto,
    responses(
        (status = 201, description = "Image added", body = PropertyImageDto),
        (status = 400, description = "Empty image URL", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_property_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
    Json(payload): Json<CreatePropertyImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = PropertyService::new(&state.db);

    let image = service
        .add_image(
            user.id,
            CreatePropertyImageParams::from_dto(property_id, payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

/// Remove an image from a property.
///
/// # Access Control
/// - Host of the property
#[utoipa::path(
    delete,
    path = "/api/properties/{property_id}/images/{image_id}",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID"),
        ("image_id" = i32, Path, description = "Image ID")
    ),
    responses(
        (status = 204, description = "Image removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Property or image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((property_id, image_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = PropertyService::new(&state.db);
    service
        .delete_image(property_id, image_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Review a property.
///
/// # Access Control
/// - Authenticated users, once per property
#[utoipa::path(
    post,
    path = "/api/properties/{property_id}/reviews",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    request_body = ReviewRequestDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Rating outside 1-5", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 409, description = "Property already reviewed by caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_property_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
    Json(payload): Json<ReviewRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = ReviewService::new(&state.db);

    let review = service
        .create(CreateReviewParams::from_request(property_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// Book a property.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - Pending booking with computed total price
/// - `400 Bad Request` - Invalid dates or guest count, or property not accepting bookings
/// - `404 Not Found` - No listing with that ID
/// - `409 Conflict` - Dates already booked
#[utoipa::path(
    post,
    path = "/api/properties/{property_id}/book",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    request_body = BookingRequestDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 409, description = "Dates already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
    Json(payload): Json<BookingRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let params = CreateBookingParams::from_request(property_id, user.id, payload)?;

    let service = BookingService::new(&state.db);
    let booking = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// List every booking of a property.
///
/// # Access Control
/// - Host of the property
#[utoipa::path(
    get,
    path = "/api/properties/{property_id}/bookings",
    tag = PROPERTY_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Bookings of the property", body = Vec<BookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = BookingService::new(&state.db);
    let bookings = service.get_for_property(property_id, user.id).await?;

    let bookings: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

fn into_list_dto(properties: Vec<PropertyListItem>) -> Vec<PropertyListItemDto> {
    properties
        .into_iter()
        .map(PropertyListItem::into_dto)
        .collect()
}
