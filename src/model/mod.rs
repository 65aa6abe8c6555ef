//! API data transfer objects shared by every endpoint.
//!
//! These are the typed request and response bodies serialized to JSON. Domain models in
//! `server::model` convert into them at the controller boundary.

pub mod api;
pub mod booking;
pub mod property;
pub mod review;
pub mod user;
