use super::*;
use test_utils::{builder::TestBuilder, factory};


fn create_params(property_id: i32, user_id: i32, rating: i32) -> CreateReviewParams {
    CreateReviewParams {
        property_id,
        user_id,
        rating,
        comment: "Great location".to_string(),
    }
}
