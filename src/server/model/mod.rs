//! Domain models and operation parameters for the service and data layers.
//!
//! Domain models are built from entity models at the repository boundary
//! (`from_entity`) and converted to DTOs at the controller boundary (`into_dto`).

pub mod booking;
pub mod property;
pub mod review;
pub mod user;
