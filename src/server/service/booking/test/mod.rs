use super::*;
use rust_decimal_macros::dec;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date, property::PropertyFactory},
};

mod visibility;

fn stay(check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> StayRange {
    StayRange::new(
        date(check_in.0, check_in.1, check_in.2),
        date(check_out.0, check_out.1, check_out.2),
    )
    .unwrap()
}

fn request(
    property_id: i32,
    user_id: i32,
    check_in: (i32, u32, u32),
    check_out: (i32, u32, u32),
    guests: i32,
) -> CreateBookingParams {
    CreateBookingParams {
        property_id,
        user_id,
        stay: stay(check_in, check_out),
        guests,
        special_requests: String::new(),
    }
}

fn is_unavailable(result: &Result<Booking, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::BookingErr(BookingError::Unavailable { .. }))
    )
}
