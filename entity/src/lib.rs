//! SeaORM entity models for the rental marketplace schema.

pub mod prelude;

pub mod auth_token;
pub mod booking;
pub mod property;
pub mod property_image;
pub mod review;
pub mod user;
