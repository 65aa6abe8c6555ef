//! Property rating aggregation.

use crate::server::model::review::RatingSummary;

/// Arithmetic mean and count of `ratings`; the mean is `0.0` for no ratings.
pub fn summarize(ratings: &[i32]) -> RatingSummary {
    if ratings.is_empty() {
        return RatingSummary::default();
    }

    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let count = ratings.len() as u64;

    RatingSummary {
        average: sum as f64 / count as f64,
        count,
    }
}
