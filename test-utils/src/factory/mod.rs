//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need as constructor
//! arguments, so parents must be created first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let host = factory::user::create_user(&db).await?;
//! let property = factory::property::create_property(&db, host.id).await?;
//! let guest = factory::user::create_user(&db).await?;
//! let booking = factory::booking::BookingFactory::new(&db, property.id, guest.id)
//!     .dates(date(2024, 1, 10), date(2024, 1, 13))
//!     .status("confirmed")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with unique usernames
//! - `auth_token` - Bearer tokens bound to a user
//! - `property` - Listings owned by a host
//! - `property_image` - Images attached to a property
//! - `booking` - Stays on a property by a renter
//! - `review` - Ratings left on a property

pub mod auth_token;
pub mod booking;
pub mod helpers;
pub mod property;
pub mod property_image;
pub mod review;
pub mod user;
