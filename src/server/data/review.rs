//! Review data repository for database operations.
//!
//! This module provides the `ReviewRepository` for managing property reviews. Reviews are
//! always loaded together with their author. The table carries a unique index on
//! `(property_id, user_id)`, so a second review by one user fails at insert.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::review::{CreateReviewParams, Review, UpdateReviewParams};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review and returns it with its author.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(DbErr)` - Database error, including a unique violation when the user has
    ///   already reviewed the property
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let now = Utc::now();
        let review = entity::review::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(review.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Review with id {} not found after creation",
            review.id
        )))
    }

    /// Finds a review by ID with its author.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let result = entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(review, author)| author.map(|a| Review::from_entity(review, a))))
    }

    /// Gets reviews, optionally limited to one property, newest first.
    pub async fn get_all(&self, property_id: Option<i32>) -> Result<Vec<Review>, DbErr> {
        let mut query = entity::prelude::Review::find().find_also_related(entity::prelude::User);

        if let Some(property_id) = property_id {
            query = query.filter(entity::review::Column::PropertyId.eq(property_id));
        }

        let results = query
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .filter_map(|(review, author)| author.map(|a| Review::from_entity(review, a)))
            .collect())
    }

    /// Checks whether `user_id` has already reviewed `property_id`.
    pub async fn exists_for_user(&self, property_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::PropertyId.eq(property_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces a review's rating and comment.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Updated review
    /// - `Ok(None)` - No review with that ID
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Option<Review>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::review::ActiveModel = review.into();
        active_model.rating = ActiveValue::Set(params.rating);
        active_model.comment = ActiveValue::Set(params.comment);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        self.find_by_id(params.id).await
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(true)` - Review deleted
    /// - `Ok(false)` - No review with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the raw ratings of several properties in one query, keyed by property ID.
    ///
    /// Properties without reviews have no entry.
    pub async fn get_ratings_by_property_ids(
        &self,
        property_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if property_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i32)> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::PropertyId)
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::PropertyId.is_in(property_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut ratings: HashMap<i32, Vec<i32>> = HashMap::new();
        for (property_id, rating) in rows {
            ratings.entry(property_id).or_default().push(rating);
        }

        Ok(ratings)
    }
}
