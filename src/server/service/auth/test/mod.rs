use super::*;
use crate::server::service::auth::token::DatabaseTokenValidator;
use entity::prelude::*;
use test_utils::builder::TestBuilder;


fn register_params(username: &str, password: &str) -> RegisterUserParams {
    RegisterUserParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: password.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
    }
}
