pub mod auth;
pub mod booking;
pub mod property;
pub mod review;
