use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingRequestDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{Booking, CreateBookingParams, UpdateBookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List the caller's bookings.
///
/// # Returns
/// - `200 OK` - Caller's bookings, newest first
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Caller's bookings", body = Vec<BookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = BookingService::new(&state.db);
    let bookings = service.get_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// Book a property.
///
/// The booking starts out pending with its total price computed from the nightly rate.
///
/// # Returns
/// - `201 Created` - Booking created
/// - `400 Bad Request` - Invalid dates or guest count, or property not accepting bookings
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No property with that ID
/// - `409 Conflict` - Dates already booked
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 409, description = "Dates already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let params = CreateBookingParams::from_dto(user.id, payload)?;

    let service = BookingService::new(&state.db);
    let booking = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Get a booking made by the caller or placed on a property they host.
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking", body = BookingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = BookingService::new(&state.db);
    let booking = service.get(booking_id, user.id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Change the dates, guests or requests of a pending or confirmed booking.
///
/// # Access Control
/// - Renter of the booking
///
/// # Returns
/// - `200 OK` - Updated booking with recomputed total price
/// - `400 Bad Request` - Invalid dates or guests, or booking no longer active
/// - `403 Forbidden` - Caller is the host, not the renter
/// - `404 Not Found` - Booking not found
/// - `409 Conflict` - New dates overlap another booking
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = BookingRequestDto,
    responses(
        (status = 200, description = "Updated booking", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the renter", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Dates already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
    Json(payload): Json<BookingRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let params = UpdateBookingParams::from_dto(booking_id, user.id, payload)?;

    let service = BookingService::new(&state.db);
    let booking = service.update(params).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Delete a booking.
///
/// # Access Control
/// - Renter of the booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the renter", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = BookingService::new(&state.db);
    service.delete(booking_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Cancel a pending or confirmed booking.
///
/// # Access Control
/// - Renter or host
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingDto),
        (status = 400, description = "Booking cannot be cancelled", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = BookingService::new(&state.db);
    let booking = service.cancel(booking_id, user.id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Confirm a pending booking.
///
/// # Access Control
/// - Host of the booked property
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/confirm",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking confirmed", body = BookingDto),
        (status = 400, description = "Booking is not pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = BookingService::new(&state.db);
    let booking = service.confirm(booking_id, user.id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Mark a confirmed booking as completed.
///
/// # Access Control
/// - Host of the booked property
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/complete",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking completed", body = BookingDto),
        (status = 400, description = "Booking is not confirmed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the host", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = BookingService::new(&state.db);
    let booking = service.complete(booking_id, user.id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

fn into_dtos(bookings: Vec<Booking>) -> Vec<BookingDto> {
    bookings.into_iter().map(Booking::into_dto).collect()
}
