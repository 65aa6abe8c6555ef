mod auth_token;
mod booking;
mod property;
mod property_image;
mod review;
mod user;
