use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{property::PropertyRepository, review::ReviewRepository},
    error::{auth::AuthError, AppError},
    model::review::{validate_rating, CreateReviewParams, Review, UpdateReviewParams},
    service::property::property_not_found,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reviews a property; each user may review a property once.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5
    /// - `Err(AppError::NotFound)` - Property does not exist
    /// - `Err(AppError::Conflict)` - Caller already reviewed the property
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        validate_rating(params.rating)?;

        if PropertyRepository::new(self.db)
            .find_by_id(params.property_id)
            .await?
            .is_none()
        {
            return Err(property_not_found(params.property_id));
        }

        let repo = ReviewRepository::new(self.db);
        if repo
            .exists_for_user(params.property_id, params.user_id)
            .await?
        {
            return Err(already_reviewed(params.property_id));
        }

        let property_id = params.property_id;
        repo.create(params).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => already_reviewed(property_id),
            _ => err.into(),
        })
    }

    /// Gets reviews, optionally for one property, newest first.
    pub async fn get_all(&self, property_id: Option<i32>) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all(property_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| review_not_found(id))
    }

    /// Changes a review's rating and comment; only its author may do so.
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Review, AppError> {
        validate_rating(params.rating)?;

        let review = self.get(params.id).await?;
        require_author(&review, params.user_id)?;

        let id = params.id;
        ReviewRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| review_not_found(id))
    }

    /// Deletes a review; only its author may do so.
    pub async fn delete(&self, id: i32, caller_id: i32) -> Result<(), AppError> {
        let review = self.get(id).await?;
        require_author(&review, caller_id)?;

        ReviewRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

fn require_author(review: &Review, caller_id: i32) -> Result<(), AuthError> {
    if review.user.id != caller_id {
        return Err(AuthError::AccessDenied(
            caller_id,
            format!("User attempted to modify review {} they did not write", review.id),
        ));
    }

    Ok(())
}

fn already_reviewed(property_id: i32) -> AppError {
    AppError::Conflict(format!(
        "You have already reviewed property {}",
        property_id
    ))
}

fn review_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Review {} not found", id))
}

#[cfg(test)]
mod test;
