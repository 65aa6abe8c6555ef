use crate::server::data::auth_token::AuthTokenRepository;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_user_id;
