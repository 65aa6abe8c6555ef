//! Property factory for creating test listings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test properties with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let property = PropertyFactory::new(&db, host.id)
///     .city("Lisbon")
///     .price_per_night(Decimal::new(10000, 2))
///     .build()
///     .await?;
/// ```
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    host_id: i32,
    title: String,
    description: String,
    city: String,
    country: String,
    property_type: String,
    room_type: String,
    price_per_night: Decimal,
    max_guests: i32,
    amenities: Vec<String>,
    is_available: bool,
    is_featured: bool,
}

impl<'a> PropertyFactory<'a> {
    /// Creates a new PropertyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Property {id}"`
    /// - city / country: `"Springfield"` / `"USA"`
    /// - property_type / room_type: `"apartment"` / `"entire"`
    /// - price_per_night: `100.00`
    /// - max_guests: `4`
    /// - amenities: `["WiFi"]`
    /// - is_available: `true`, is_featured: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `host_id` - ID of the user owning the property
    pub fn new(db: &'a DatabaseConnection, host_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            host_id,
            title: format!("Property {}", id),
            description: "A comfortable place to stay".to_string(),
            city: "Springfield".to_string(),
            country: "USA".to_string(),
            property_type: "apartment".to_string(),
            room_type: "entire".to_string(),
            price_per_night: Decimal::new(10000, 2),
            max_guests: 4,
            amenities: vec!["WiFi".to_string()],
            is_available: true,
            is_featured: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = property_type.into();
        self
    }

    pub fn price_per_night(mut self, price_per_night: Decimal) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    pub fn max_guests(mut self, max_guests: i32) -> Self {
        self.max_guests = max_guests;
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.amenities = amenities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Builds and inserts the property entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::property::Model)` - Created property entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        let now = Utc::now();
        entity::property::ActiveModel {
            host_id: ActiveValue::Set(self.host_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            address: ActiveValue::Set("742 Evergreen Terrace".to_string()),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set("Oregon".to_string()),
            country: ActiveValue::Set(self.country),
            zip_code: ActiveValue::Set("97475".to_string()),
            property_type: ActiveValue::Set(self.property_type),
            room_type: ActiveValue::Set(self.room_type),
            price_per_night: ActiveValue::Set(self.price_per_night),
            max_guests: ActiveValue::Set(self.max_guests),
            bedrooms: ActiveValue::Set(2),
            bathrooms: ActiveValue::Set(1),
            amenities: ActiveValue::Set(serde_json::json!(self.amenities)),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            is_available: ActiveValue::Set(self.is_available),
            is_featured: ActiveValue::Set(self.is_featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a property with default values owned by `host_id`.
pub async fn create_property(
    db: &DatabaseConnection,
    host_id: i32,
) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db, host_id).build().await
}
