pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_auth_token_table;
mod m20260301_000003_create_property_table;
mod m20260301_000004_create_property_image_table;
mod m20260301_000005_create_review_table;
mod m20260301_000006_create_booking_table;
mod m20260302_000007_create_booking_overlap_guard;

pub use m20260302_000007_create_booking_overlap_guard::{
    BOOKING_OVERLAP_GUARD, BOOKING_OVERLAP_GUARD_STATEMENTS,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_auth_token_table::Migration),
            Box::new(m20260301_000003_create_property_table::Migration),
            Box::new(m20260301_000004_create_property_image_table::Migration),
            Box::new(m20260301_000005_create_review_table::Migration),
            Box::new(m20260301_000006_create_booking_table::Migration),
            Box::new(m20260302_000007_create_booking_overlap_guard::Migration),
        ]
    }
}
