use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

// Glob imports bring in the `__path_*` types that `routes!` expects next to each handler.
use crate::server::{
    controller::{auth::*, booking::*, property::*, review::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Staybook API", description = "Property rental marketplace"),
    tags(
        (name = "auth", description = "Registration, login and profile"),
        (name = "property", description = "Listings, images, availability and booking a listing"),
        (name = "booking", description = "Reservations and their lifecycle"),
        (name = "review", description = "Property reviews")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_routes();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Registers every handler, returning the routes and the OpenAPI document they describe.
fn api_routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_profile, update_profile))
        .routes(routes!(change_password))
        .routes(routes!(get_properties, create_property))
        .routes(routes!(get_featured_properties))
        .routes(routes!(search_properties))
        .routes(routes!(get_property, update_property, delete_property))
        .routes(routes!(check_availability))
        .routes(routes!(add_property_image))
        .routes(routes!(delete_property_image))
        .routes(routes!(add_property_review))
        .routes(routes!(book_property))
        .routes(routes!(get_property_bookings))
        .routes(routes!(get_bookings, create_booking))
        .routes(routes!(get_booking, update_booking, delete_booking))
        .routes(routes!(cancel_booking))
        .routes(routes!(confirm_booking))
        .routes(routes!(complete_booking))
        .routes(routes!(get_reviews, create_review))
        .routes(routes!(get_review, update_review, delete_review))
        .split_for_parts()
}
