//! Property data repository for database operations.
//!
//! This module provides the `PropertyRepository` for managing rental listings. Listing
//! queries apply every `PropertyFilter` field in SQL, including the stay-availability
//! exclusion and ordering by average rating, so pagination counts stay exact.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, LikeExpr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::{
    model::booking::BookingStatus,
    server::{
        error::AppError,
        model::{
            booking::StayRange,
            property::{Property, PropertyFilter, PropertyOrderField, UpsertPropertyParams},
        },
    },
};

/// Average review rating of the outer `property` row, 0 when unreviewed.
const AVERAGE_RATING_SQL: &str =
    "(SELECT COALESCE(AVG(review.rating), 0) FROM review WHERE review.property_id = property.id)";

/// True when the outer `property` row's JSON amenities array holds the bound value exactly.
const HAS_AMENITY_SQL: &str =
    "EXISTS (SELECT 1 FROM json_each(property.amenities) WHERE json_each.value = ?)";

/// Repository providing database operations for property listings.
///
/// Generic over the connection so reads can take part in a booking transaction.
pub struct PropertyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PropertyRepository<'a, C> {
    /// Creates a new PropertyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new listing owned by `host_id`.
    ///
    /// # Returns
    /// - `Ok(Property)` - The created listing
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(
        &self,
        host_id: i32,
        params: UpsertPropertyParams,
    ) -> Result<Property, AppError> {
        let now = Utc::now();
        let mut active_model = entity::property::ActiveModel {
            host_id: ActiveValue::Set(host_id),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_params(&mut active_model, params);
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.insert(self.db).await?;

        Property::from_entity(entity)
    }

    /// Replaces every writable field of a listing.
    ///
    /// # Returns
    /// - `Ok(Some(Property))` - Updated listing
    /// - `Ok(None)` - No listing with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpsertPropertyParams,
    ) -> Result<Option<Property>, AppError> {
        let Some(property) = entity::prelude::Property::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::property::ActiveModel = property.into();
        apply_params(&mut active_model, params);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Property::from_entity(entity)?))
    }

    /// Finds a listing by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Property>, AppError> {
        entity::prelude::Property::find_by_id(id)
            .one(self.db)
            .await?
            .map(Property::from_entity)
            .transpose()
    }

    /// Deletes a listing; its images, reviews and bookings cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing deleted
    /// - `Ok(false)` - No listing with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Property::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of listings matching `filter`, in the filter's order.
    ///
    /// # Arguments
    /// - `filter` - Filters and ordering to apply
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of listings per page
    ///
    /// # Returns
    /// - `Ok((properties, total))` - Listings on the page and the total match count
    /// - `Err(AppError)` - Database error or unreadable stored row
    pub async fn get_paginated(
        &self,
        filter: &PropertyFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Property>, u64), AppError> {
        let paginator = filtered_query(filter).paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let properties = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Property::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((properties, total))
    }

    /// Gets listings that are both featured and accepting bookings, newest first.
    pub async fn get_featured(&self) -> Result<Vec<Property>, AppError> {
        entity::prelude::Property::find()
            .filter(entity::property::Column::IsFeatured.eq(true))
            .filter(entity::property::Column::IsAvailable.eq(true))
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Property::from_entity)
            .collect()
    }

    /// Gets available listings whose title, description, city, state or country contains
    /// `query`, newest first.
    pub async fn search(&self, query: &str) -> Result<Vec<Property>, AppError> {
        entity::prelude::Property::find()
            .filter(any_contains(
                &[
                    entity::property::Column::Title,
                    entity::property::Column::Description,
                    entity::property::Column::City,
                    entity::property::Column::State,
                    entity::property::Column::Country,
                ],
                query,
            ))
            .filter(entity::property::Column::IsAvailable.eq(true))
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Property::from_entity)
            .collect()
    }
}

fn apply_params(active_model: &mut entity::property::ActiveModel, params: UpsertPropertyParams) {
    active_model.title = ActiveValue::Set(params.title);
    active_model.description = ActiveValue::Set(params.description);
    active_model.address = ActiveValue::Set(params.address);
    active_model.city = ActiveValue::Set(params.city);
    active_model.state = ActiveValue::Set(params.state);
    active_model.country = ActiveValue::Set(params.country);
    active_model.zip_code = ActiveValue::Set(params.zip_code);
    active_model.property_type = ActiveValue::Set(params.property_type.as_str().to_string());
    active_model.room_type = ActiveValue::Set(params.room_type.as_str().to_string());
    active_model.price_per_night = ActiveValue::Set(params.price_per_night);
    active_model.max_guests = ActiveValue::Set(params.max_guests);
    active_model.bedrooms = ActiveValue::Set(params.bedrooms);
    active_model.bathrooms = ActiveValue::Set(params.bathrooms);
    active_model.amenities = ActiveValue::Set(serde_json::json!(params.amenities));
    active_model.latitude = ActiveValue::Set(params.latitude);
    active_model.longitude = ActiveValue::Set(params.longitude);
    active_model.is_available = ActiveValue::Set(params.is_available);
    active_model.is_featured = ActiveValue::Set(params.is_featured);
}

/// Builds the listing query for `filter`, ordering included.
fn filtered_query(filter: &PropertyFilter) -> Select<entity::prelude::Property> {
    use entity::property::Column;

    let mut query = entity::prelude::Property::find();

    if let Some(property_type) = filter.property_type {
        query = query.filter(Column::PropertyType.eq(property_type.as_str()));
    }
    if let Some(room_type) = filter.room_type {
        query = query.filter(Column::RoomType.eq(room_type.as_str()));
    }
    if let Some(city) = &filter.city {
        query = query.filter(Column::City.eq(city.as_str()));
    }
    if let Some(state) = &filter.state {
        query = query.filter(Column::State.eq(state.as_str()));
    }
    if let Some(country) = &filter.country {
        query = query.filter(Column::Country.eq(country.as_str()));
    }
    if let Some(is_available) = filter.is_available {
        query = query.filter(Column::IsAvailable.eq(is_available));
    }
    if let Some(is_featured) = filter.is_featured {
        query = query.filter(Column::IsFeatured.eq(is_featured));
    }
    if let Some(min_price) = filter.min_price {
        query = query.filter(Column::PricePerNight.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        query = query.filter(Column::PricePerNight.lte(max_price));
    }
    if let Some(guests) = filter.guests {
        query = query.filter(Column::MaxGuests.gte(guests));
    }
    for amenity in &filter.amenities {
        query = query.filter(Expr::cust_with_values(HAS_AMENITY_SQL, [amenity.clone()]));
    }
    if let Some(search) = &filter.search {
        query = query.filter(any_contains(
            &[
                Column::Title,
                Column::Description,
                Column::Address,
                Column::City,
                Column::State,
                Column::Country,
            ],
            search,
        ));
    }
    if let Some(stay) = &filter.stay {
        query = query.filter(Column::Id.not_in_subquery(booked_property_ids(stay)));
    }

    let order = if filter.ordering.descending {
        Order::Desc
    } else {
        Order::Asc
    };
    query = match filter.ordering.field {
        PropertyOrderField::PricePerNight => query.order_by(Column::PricePerNight, order.clone()),
        PropertyOrderField::CreatedAt => query.order_by(Column::CreatedAt, order.clone()),
        PropertyOrderField::AverageRating => {
            query.order_by(Expr::cust(AVERAGE_RATING_SQL), order.clone())
        }
    };

    query.order_by(Column::Id, order)
}

/// Matches rows where any of `columns` contains `text` literally.
///
/// `%`, `_` and `\` in `text` are escaped. Matching stays case-insensitive for ASCII
/// under SQLite's `LIKE`.
fn any_contains(columns: &[entity::property::Column], text: &str) -> Condition {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    let pattern = format!("%{}%", escaped);

    columns.iter().fold(Condition::any(), |condition, column| {
        condition.add(column.like(LikeExpr::new(pattern.as_str()).escape('\\')))
    })
}

/// Subquery selecting properties with a blocking booking overlapping `stay`.
fn booked_property_ids(stay: &StayRange) -> sea_orm::sea_query::SelectStatement {
    use entity::booking::Column;

    Query::select()
        .column(Column::PropertyId)
        .from(entity::prelude::Booking)
        .and_where(Column::Status.is_in(BookingStatus::BLOCKING.map(|s| s.as_str())))
        .and_where(Column::CheckInDate.lt(stay.check_out()))
        .and_where(Column::CheckOutDate.gt(stay.check_in()))
        .to_owned()
}
