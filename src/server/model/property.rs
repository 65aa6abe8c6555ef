//! Property domain models and parameters.
//!
//! Provides the domain model for rental listings, their images, the filter and ordering
//! types used by the listing endpoint, and the aggregated detail and list views returned
//! to clients.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::{
    model::property::{
        CreatePropertyImageDto, PaginatedPropertiesDto, PropertyDto, PropertyImageDto,
        PropertyListItemDto, PropertyType, RoomType, UpsertPropertyDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::{
            booking::StayRange,
            review::{RatingSummary, Review},
            user::User,
        },
    },
};

/// Largest amount the `decimal(10, 2)` price columns hold.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    /// Owner of the listing.
    pub host_id: i32,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub property_type: PropertyType,
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    /// Guest capacity; at least 1.
    pub max_guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub amenities: Vec<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    /// Whether the host currently accepts bookings.
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Converts an entity model to a property domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Property)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr)` - Stored property type, room type or amenities
    ///   cannot be read back
    pub fn from_entity(entity: entity::property::Model) -> Result<Self, AppError> {
        let property_type = parse_column(entity.id, "property.property_type", &entity.property_type)?;
        let room_type = parse_column(entity.id, "property.room_type", &entity.room_type)?;
        let amenities = serde_json::from_value::<Vec<String>>(entity.amenities.clone())
            .map_err(|_| InternalError::UnknownStoredValue {
                column: "property.amenities",
                id: entity.id,
                value: entity.amenities.to_string(),
            })?;

        Ok(Self {
            id: entity.id,
            host_id: entity.host_id,
            title: entity.title,
            description: entity.description,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            country: entity.country,
            zip_code: entity.zip_code,
            property_type,
            room_type,
            price_per_night: entity.price_per_night.round_dp(2),
            max_guests: entity.max_guests,
            bedrooms: entity.bedrooms,
            bathrooms: entity.bathrooms,
            amenities,
            latitude: entity.latitude,
            longitude: entity.longitude,
            is_available: entity.is_available,
            is_featured: entity.is_featured,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

fn parse_column<T: FromStr>(id: i32, column: &'static str, value: &str) -> Result<T, InternalError> {
    value
        .parse::<T>()
        .map_err(|_| InternalError::UnknownStoredValue {
            column,
            id,
            value: value.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyImage {
    pub id: i32,
    pub property_id: i32,
    pub url: String,
    pub caption: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl PropertyImage {
    pub fn from_entity(entity: entity::property_image::Model) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            url: entity.url,
            caption: entity.caption,
            is_primary: entity.is_primary,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PropertyImageDto {
        PropertyImageDto {
            id: self.id,
            url: self.url,
            caption: self.caption,
            is_primary: self.is_primary,
        }
    }
}

/// Picks the image shown as a property's thumbnail.
///
/// The image flagged primary wins, otherwise the first image in upload order.
pub fn primary_image(images: &[PropertyImage]) -> Option<&PropertyImage> {
    images
        .iter()
        .find(|image| image.is_primary)
        .or_else(|| images.first())
}

/// Writable fields of a listing, shared by create and full update.
#[derive(Debug, Clone)]
pub struct UpsertPropertyParams {
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub property_type: PropertyType,
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub amenities: Vec<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub is_available: bool,
    pub is_featured: bool,
}

impl UpsertPropertyParams {
    pub fn from_dto(dto: UpsertPropertyDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            zip_code: dto.zip_code,
            property_type: dto.property_type,
            room_type: dto.room_type,
            price_per_night: dto.price_per_night,
            max_guests: dto.max_guests,
            bedrooms: dto.bedrooms,
            bathrooms: dto.bathrooms,
            amenities: dto.amenities,
            latitude: dto.latitude,
            longitude: dto.longitude,
            is_available: dto.is_available,
            is_featured: dto.is_featured,
        }
    }

    /// Checks listing invariants: non-empty title, a price the price column can hold, a
    /// capacity of at least one guest and non-negative room counts.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }
        if self.price_per_night.is_sign_negative() {
            return Err(AppError::BadRequest(
                "Price per night must not be negative".to_string(),
            ));
        }
        if self.price_per_night > MAX_PRICE || self.price_per_night.normalize().scale() > 2 {
            return Err(AppError::BadRequest(format!(
                "Price per night must be at most {} with no more than 2 decimal places",
                MAX_PRICE
            )));
        }
        if self.max_guests < 1 {
            return Err(AppError::BadRequest(
                "Max guests must be at least 1".to_string(),
            ));
        }
        if self.bedrooms < 0 || self.bathrooms < 0 {
            return Err(AppError::BadRequest(
                "Bedrooms and bathrooms must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CreatePropertyImageParams {
    pub property_id: i32,
    pub url: String,
    pub caption: String,
    pub is_primary: bool,
}

impl CreatePropertyImageParams {
    pub fn from_dto(property_id: i32, dto: CreatePropertyImageDto) -> Self {
        Self {
            property_id,
            url: dto.url.trim().to_string(),
            caption: dto.caption,
            is_primary: dto.is_primary,
        }
    }
}

/// Column a property listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyOrderField {
    PricePerNight,
    CreatedAt,
    AverageRating,
}

/// Sort order for property listings, parsed from `field` or `-field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyOrdering {
    pub field: PropertyOrderField,
    pub descending: bool,
}

impl Default for PropertyOrdering {
    /// Newest listings first.
    fn default() -> Self {
        Self {
            field: PropertyOrderField::CreatedAt,
            descending: true,
        }
    }
}

impl FromStr for PropertyOrdering {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (descending, name) = match value.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, value),
        };

        let field = match name {
            "price_per_night" => PropertyOrderField::PricePerNight,
            "created_at" => PropertyOrderField::CreatedAt,
            "average_rating" => PropertyOrderField::AverageRating,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Unknown ordering '{}'; expected price_per_night, created_at or average_rating",
                    value
                )))
            }
        };

        Ok(Self { field, descending })
    }
}

/// Listing filters; every `None` or empty field is ignored.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub property_type: Option<PropertyType>,
    pub room_type: Option<RoomType>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Minimum guest capacity.
    pub guests: Option<i32>,
    /// Amenities a listing must all provide.
    pub amenities: Vec<String>,
    /// Substring matched against title, description, address, city, state and country.
    pub search: Option<String>,
    /// Excludes properties with a blocking booking overlapping this stay.
    pub stay: Option<StayRange>,
    pub ordering: PropertyOrdering,
}

/// Listing row with its rating aggregate and thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyListItem {
    pub property: Property,
    pub rating: RatingSummary,
    pub primary_image: Option<PropertyImage>,
}

impl PropertyListItem {
    pub fn into_dto(self) -> PropertyListItemDto {
        let property = self.property;

        PropertyListItemDto {
            id: property.id,
            host_id: property.host_id,
            title: property.title,
            city: property.city,
            state: property.state,
            country: property.country,
            property_type: property.property_type,
            room_type: property.room_type,
            price_per_night: property.price_per_night,
            max_guests: property.max_guests,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            amenities: property.amenities,
            is_available: property.is_available,
            is_featured: property.is_featured,
            average_rating: self.rating.average,
            review_count: self.rating.count,
            primary_image: self.primary_image.map(PropertyImage::into_dto),
            created_at: property.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProperties {
    pub properties: Vec<PropertyListItem>,
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProperties {
    pub fn into_dto(self) -> PaginatedPropertiesDto {
        PaginatedPropertiesDto {
            properties: self
                .properties
                .into_iter()
                .map(PropertyListItem::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Property with its host, images, reviews and rating aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetail {
    pub property: Property,
    pub host: User,
    pub images: Vec<PropertyImage>,
    /// Reviews, newest first.
    pub reviews: Vec<Review>,
    pub rating: RatingSummary,
}

impl PropertyDetail {
    pub fn into_dto(self) -> PropertyDto {
        let primary_image = primary_image(&self.images).cloned().map(PropertyImage::into_dto);
        let property = self.property;

        PropertyDto {
            id: property.id,
            title: property.title,
            description: property.description,
            address: property.address,
            city: property.city,
            state: property.state,
            country: property.country,
            zip_code: property.zip_code,
            property_type: property.property_type,
            room_type: property.room_type,
            price_per_night: property.price_per_night,
            max_guests: property.max_guests,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            amenities: property.amenities,
            latitude: property.latitude,
            longitude: property.longitude,
            host: self.host.into_dto(),
            is_available: property.is_available,
            is_featured: property.is_featured,
            created_at: property.created_at,
            updated_at: property.updated_at,
            images: self.images.into_iter().map(PropertyImage::into_dto).collect(),
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
            average_rating: self.rating.average,
            review_count: self.rating.count,
            primary_image,
        }
    }
}
