use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::{review::ReviewDto, user::UserDto};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Cabin,
    Condo,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Villa => "villa",
            Self::Cabin => "cabin",
            Self::Condo => "condo",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "villa" => Ok(Self::Villa),
            "cabin" => Ok(Self::Cabin),
            "condo" => Ok(Self::Condo),
            other => Err(format!("Unknown property type '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Entire place
    Entire,
    /// Private room
    Private,
    /// Shared room
    Shared,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entire => "entire",
            Self::Private => "private",
            Self::Shared => "shared",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "entire" => Ok(Self::Entire),
            "private" => Ok(Self::Private),
            "shared" => Ok(Self::Shared),
            other => Err(format!("Unknown room type '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PropertyImageDto {
    pub id: i32,
    pub url: String,
    pub caption: String,
    pub is_primary: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePropertyImageDto {
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub is_primary: bool,
}

fn default_true() -> bool {
    true
}

/// Writable property fields, used for both create and full update.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertPropertyDto {
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub property_type: PropertyType,
    pub room_type: RoomType,
    #[schema(value_type = String, example = "100.00")]
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[schema(value_type = Option<String>)]
    pub latitude: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub longitude: Option<Decimal>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PropertyDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub property_type: PropertyType,
    pub room_type: RoomType,
    #[schema(value_type = String, example = "100.00")]
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub amenities: Vec<String>,
    #[schema(value_type = Option<String>)]
    pub latitude: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub longitude: Option<Decimal>,
    pub host: UserDto,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub images: Vec<PropertyImageDto>,
    pub reviews: Vec<ReviewDto>,
    pub average_rating: f64,
    pub review_count: u64,
    pub primary_image: Option<PropertyImageDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PropertyListItemDto {
    pub id: i32,
    pub host_id: i32,
    pub title: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub property_type: PropertyType,
    pub room_type: RoomType,
    #[schema(value_type = String, example = "100.00")]
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub amenities: Vec<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub average_rating: f64,
    pub review_count: u64,
    pub primary_image: Option<PropertyImageDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPropertiesDto {
    pub properties: Vec<PropertyListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Availability and price quote for a prospective stay.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub property_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub available: bool,
    pub nights: i64,
    #[schema(value_type = String, example = "100.00")]
    pub price_per_night: Decimal,
    #[schema(value_type = String, example = "300.00")]
    pub total_price: Decimal,
}
