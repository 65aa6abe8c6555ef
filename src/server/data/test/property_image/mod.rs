use crate::server::{data::property_image::PropertyImageRepository, model::property::CreatePropertyImageParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod clear_primary;
mod create;
mod get_by_property_ids;
