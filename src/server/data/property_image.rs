use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::property::{CreatePropertyImageParams, PropertyImage};

pub struct PropertyImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PropertyImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an image to a property.
    ///
    /// Does not touch other images; callers clear the previous primary first when the new
    /// image is primary.
    pub async fn create(&self, params: CreatePropertyImageParams) -> Result<PropertyImage, DbErr> {
        let entity = entity::property_image::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            url: ActiveValue::Set(params.url),
            caption: ActiveValue::Set(params.caption),
            is_primary: ActiveValue::Set(params.is_primary),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PropertyImage::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PropertyImage>, DbErr> {
        let entity = entity::prelude::PropertyImage::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PropertyImage::from_entity))
    }

    /// Gets a property's images in upload order.
    pub async fn get_by_property_id(&self, property_id: i32) -> Result<Vec<PropertyImage>, DbErr> {
        let entities = entity::prelude::PropertyImage::find()
            .filter(entity::property_image::Column::PropertyId.eq(property_id))
            .order_by_asc(entity::property_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PropertyImage::from_entity).collect())
    }

    /// Gets images of several properties in one query, keyed by property ID.
    ///
    /// Properties without images have no entry.
    pub async fn get_by_property_ids(
        &self,
        property_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<PropertyImage>>, DbErr> {
        if property_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::PropertyImage::find()
            .filter(entity::property_image::Column::PropertyId.is_in(property_ids.to_vec()))
            .order_by_asc(entity::property_image::Column::Id)
            .all(self.db)
            .await?;

        let mut images: HashMap<i32, Vec<PropertyImage>> = HashMap::new();
        for entity in entities {
            images
                .entry(entity.property_id)
                .or_default()
                .push(PropertyImage::from_entity(entity));
        }

        Ok(images)
    }

    /// Removes the primary flag from every image of a property.
    pub async fn clear_primary(&self, property_id: i32) -> Result<(), DbErr> {
        entity::prelude::PropertyImage::update_many()
            .filter(entity::property_image::Column::PropertyId.eq(property_id))
            .col_expr(
                entity::property_image::Column::IsPrimary,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes an image.
    ///
    /// # Returns
    /// - `Ok(true)` - Image deleted
    /// - `Ok(false)` - No image with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PropertyImage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
