use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, property::PropertyRepository,
        property_image::PropertyImageRepository, review::ReviewRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        booking::StayRange,
        property::{
            primary_image, CreatePropertyImageParams, PaginatedProperties, Property,
            PropertyDetail, PropertyFilter, PropertyImage, PropertyListItem, UpsertPropertyParams,
        },
    },
    service::{
        availability,
        pricing::{self, StayQuote},
        rating,
    },
};

/// Result of checking a prospective stay against a property.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityQuote {
    pub property_id: i32,
    pub stay: StayRange,
    /// Property accepts bookings and no blocking booking overlaps the stay.
    pub available: bool,
    pub quote: StayQuote,
}

impl AvailabilityQuote {
    pub fn into_dto(self) -> crate::model::property::AvailabilityDto {
        crate::model::property::AvailabilityDto {
            property_id: self.property_id,
            check_in_date: self.stay.check_in(),
            check_out_date: self.stay.check_out(),
            available: self.available,
            nights: self.quote.nights,
            price_per_night: self.quote.nightly_rate,
            total_price: self.quote.total,
        }
    }
}

pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing hosted by `host_id` and returns its detail view.
    pub async fn create(
        &self,
        host_id: i32,
        params: UpsertPropertyParams,
    ) -> Result<PropertyDetail, AppError> {
        params.validate()?;

        let repo = PropertyRepository::new(self.db);
        let property = repo.create(host_id, params).await?;

        tracing::info!("User {} created property {}", host_id, property.id);

        self.get_detail(property.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found after creation".to_string()))
    }

    /// Gets a listing with its host, images, reviews and rating aggregate.
    pub async fn get_detail(&self, id: i32) -> Result<Option<PropertyDetail>, AppError> {
        let Some(property) = PropertyRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let host = UserRepository::new(self.db)
            .find_by_id(property.host_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Host {} of property {} not found",
                    property.host_id, property.id
                ))
            })?;
        let images = PropertyImageRepository::new(self.db)
            .get_by_property_id(id)
            .await?;
        let reviews = ReviewRepository::new(self.db).get_all(Some(id)).await?;

        let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();

        Ok(Some(PropertyDetail {
            property,
            host,
            images,
            reviews,
            rating: rating::summarize(&ratings),
        }))
    }

    /// Replaces a listing's fields; only its host may do so.
    ///
    /// # Returns
    /// - `Ok(PropertyDetail)` - Updated listing
    /// - `Err(AppError::BadRequest)` - Invalid listing fields
    /// - `Err(AppError::NotFound)` - No listing with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller is not the host
    pub async fn update(
        &self,
        id: i32,
        caller_id: i32,
        params: UpsertPropertyParams,
    ) -> Result<PropertyDetail, AppError> {
        params.validate()?;

        self.get_hosted(id, caller_id).await?;

        PropertyRepository::new(self.db).update(id, params).await?;

        self.get_detail(id)
            .await?
            .ok_or_else(|| property_not_found(id))
    }

    /// Deletes a listing; only its host may do so.
    pub async fn delete(&self, id: i32, caller_id: i32) -> Result<(), AppError> {
        self.get_hosted(id, caller_id).await?;

        PropertyRepository::new(self.db).delete(id).await?;

        tracing::info!("User {} deleted property {}", caller_id, id);

        Ok(())
    }

    /// Gets one page of listings matching `filter`.
    pub async fn get_paginated(
        &self,
        filter: &PropertyFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProperties, AppError> {
        let (properties, total) = PropertyRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedProperties {
            properties: self.list_items(properties).await?,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets featured listings that accept bookings.
    pub async fn get_featured(&self) -> Result<Vec<PropertyListItem>, AppError> {
        let properties = PropertyRepository::new(self.db).get_featured().await?;

        self.list_items(properties).await
    }

    /// Free-text search over available listings.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty query
    pub async fn search(&self, query: &str) -> Result<Vec<PropertyListItem>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest("Search query is required".to_string()));
        }

        let properties = PropertyRepository::new(self.db).search(query).await?;

        self.list_items(properties).await
    }

    /// Checks whether a stay could be booked and prices it.
    ///
    /// # Returns
    /// - `Ok(AvailabilityQuote)` - Availability and price of the stay
    /// - `Err(AppError::NotFound)` - No listing with that ID
    pub async fn check_availability(
        &self,
        id: i32,
        stay: StayRange,
    ) -> Result<AvailabilityQuote, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| property_not_found(id))?;

        let slots = BookingRepository::new(self.db)
            .get_slots_by_property_id(id, None)
            .await?;

        Ok(AvailabilityQuote {
            property_id: id,
            stay,
            available: property.is_available && availability::is_available(&stay, &slots),
            quote: pricing::quote(property.price_per_night, &stay)?,
        })
    }

    /// Adds an image to a listing; only its host may do so.
    ///
    /// A new primary image takes the primary flag from any previous one.
    pub async fn add_image(
        &self,
        caller_id: i32,
        params: CreatePropertyImageParams,
    ) -> Result<PropertyImage, AppError> {
        if params.url.is_empty() {
            return Err(AppError::BadRequest("Image URL must not be empty".to_string()));
        }

        self.get_hosted(params.property_id, caller_id).await?;

        let repo = PropertyImageRepository::new(self.db);
        if params.is_primary {
            repo.clear_primary(params.property_id).await?;
        }

        Ok(repo.create(params).await?)
    }

    /// Removes an image from a listing; only its host may do so.
    pub async fn delete_image(
        &self,
        property_id: i32,
        image_id: i32,
        caller_id: i32,
    ) -> Result<(), AppError> {
        self.get_hosted(property_id, caller_id).await?;

        let repo = PropertyImageRepository::new(self.db);
        match repo.find_by_id(image_id).await? {
            Some(image) if image.property_id == property_id => {
                repo.delete(image_id).await?;
                Ok(())
            }
            _ => Err(AppError::NotFound(format!(
                "Image {} not found on property {}",
                image_id, property_id
            ))),
        }
    }

    /// Fetches a listing and checks that `caller_id` hosts it.
    ///
    /// # Returns
    /// - `Ok(Property)` - Caller is the host
    /// - `Err(AppError::NotFound)` - No listing with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller is not the host
    pub async fn get_hosted(&self, id: i32, caller_id: i32) -> Result<Property, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| property_not_found(id))?;

        if property.host_id != caller_id {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!("User attempted to manage property {} they do not host", id),
            )
            .into());
        }

        Ok(property)
    }

    /// Attaches rating aggregates and thumbnails to listings with two batched queries.
    async fn list_items(&self, properties: Vec<Property>) -> Result<Vec<PropertyListItem>, AppError> {
        let ids: Vec<i32> = properties.iter().map(|p| p.id).collect();

        let ratings = ReviewRepository::new(self.db)
            .get_ratings_by_property_ids(&ids)
            .await?;
        let images = PropertyImageRepository::new(self.db)
            .get_by_property_ids(&ids)
            .await?;

        Ok(properties
            .into_iter()
            .map(|property| {
                let rating = ratings
                    .get(&property.id)
                    .map(|r| rating::summarize(r))
                    .unwrap_or_default();
                let primary_image = images
                    .get(&property.id)
                    .and_then(|images| primary_image(images))
                    .cloned();

                PropertyListItem {
                    property,
                    rating,
                    primary_image,
                }
            })
            .collect())
    }
}

pub(crate) fn property_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Property {} not found", id))
}

#[cfg(test)]
mod test;
