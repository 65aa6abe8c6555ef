use crate::{
    model::property::{PropertyType, RoomType},
    server::{
        data::property::PropertyRepository,
        error::AppError,
        model::{
            booking::StayRange,
            property::{PropertyFilter, PropertyOrderField, PropertyOrdering, UpsertPropertyParams},
        },
    },
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date, property::PropertyFactory},
};

mod create;
mod delete;
mod get_featured;
mod get_paginated;
mod search;
mod update;

fn upsert_params(title: &str, price_per_night: Decimal) -> UpsertPropertyParams {
    UpsertPropertyParams {
        title: title.to_string(),
        description: "Sunny flat near the river".to_string(),
        address: "1 Main St".to_string(),
        city: "Lisbon".to_string(),
        state: "Lisboa".to_string(),
        country: "Portugal".to_string(),
        zip_code: "1100".to_string(),
        property_type: PropertyType::Apartment,
        room_type: RoomType::Entire,
        price_per_night,
        max_guests: 3,
        bedrooms: 1,
        bathrooms: 1,
        amenities: vec!["WiFi".to_string(), "Kitchen".to_string()],
        latitude: None,
        longitude: None,
        is_available: true,
        is_featured: false,
    }
}
