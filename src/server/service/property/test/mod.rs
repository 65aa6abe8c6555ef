use super::*;
use crate::{
    model::property::{PropertyType, RoomType},
    server::error::booking::BookingError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date, property::PropertyFactory},
};


fn upsert_params(title: &str, price_per_night: Decimal) -> UpsertPropertyParams {
    UpsertPropertyParams {
        title: title.to_string(),
        description: "Quiet cabin by the lake".to_string(),
        address: "4 Lake Rd".to_string(),
        city: "Tahoe".to_string(),
        state: "California".to_string(),
        country: "USA".to_string(),
        zip_code: "96150".to_string(),
        property_type: PropertyType::Cabin,
        room_type: RoomType::Entire,
        price_per_night,
        max_guests: 4,
        bedrooms: 2,
        bathrooms: 1,
        amenities: vec!["Fireplace".to_string()],
        latitude: None,
        longitude: None,
        is_available: true,
        is_featured: false,
    }
}

fn stay(check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> StayRange {
    StayRange::new(
        date(check_in.0, check_in.1, check_in.2),
        date(check_out.0, check_out.1, check_out.2),
    )
    .unwrap()
}
