use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            ChangePasswordDto, LoginDto, LoginRequestDto, RegisterUserDto, UpdateProfileDto,
            UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{bearer_token, AuthGuard},
        model::user::{RegisterUserParams, UpdateProfileParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Empty username or email, or password shorter than 8 characters
/// - `409 Conflict` - Username already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.tokens.as_ref());

    let user = service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with username and password.
///
/// Returns a bearer token to send as `Authorization: Bearer <token>`. Logging in again
/// returns the same token until it is revoked by logging out.
///
/// # Returns
/// - `200 OK` - Token and user details
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Invalid credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Logged in", body = LoginDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.tokens.as_ref());

    let session = service.login(&payload.username, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginDto {
            token: session.token,
            user_id: session.user.id,
            username: session.user.username,
            email: session.user.email,
            first_name: session.user.first_name,
            last_name: session.user.last_name,
        }),
    ))
}

/// Log out, revoking the presented token.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - Token revoked
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;
    let token = bearer_token(&headers)?;

    let service = AuthService::new(&state.db, state.tokens.as_ref());
    service.logout(token).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully logged out".to_string(),
        }),
    ))
}

/// Get the caller's profile.
///
/// # Returns
/// - `200 OK` - Caller's account
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller's account", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's email and names.
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Empty email
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = AuthService::new(&state.db, state.tokens.as_ref());
    let user = service
        .update_profile(UpdateProfileParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the caller's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Current password wrong or new password too short
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Current password wrong or new password invalid", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.tokens.as_ref(), &headers)
        .require()
        .await?;

    let service = AuthService::new(&state.db, state.tokens.as_ref());
    service
        .change_password(&user, &payload.old_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password changed successfully".to_string(),
        }),
    ))
}
