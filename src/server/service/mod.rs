//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running booking checks and writes atomically
//!
//! The booking core is kept free of I/O in `availability`, `pricing` and `rating`.

pub mod auth;
pub mod availability;
pub mod booking;
pub mod pricing;
pub mod property;
pub mod rating;
pub mod review;
