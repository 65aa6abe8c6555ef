use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParams, UpdateReviewParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_ratings_by_property_ids;
mod update;
