pub use super::auth_token::Entity as AuthToken;
pub use super::booking::Entity as Booking;
pub use super::property::Entity as Property;
pub use super::property_image::Entity as PropertyImage;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
