use crate::{
    model::booking::BookingStatus,
    server::{
        data::booking::BookingRepository,
        error::AppError,
        model::booking::{NewBooking, StayRange},
    },
};
use rust_decimal_macros::dec;
use test_utils::{builder::TestBuilder, factory, factory::helpers::date};

mod create;
mod get_slots_by_property_id;
mod overlap_guard;
mod update_status;

fn stay(check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> StayRange {
    StayRange::new(
        date(check_in.0, check_in.1, check_in.2),
        date(check_out.0, check_out.1, check_out.2),
    )
    .unwrap()
}
