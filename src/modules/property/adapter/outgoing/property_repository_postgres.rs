use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::property::application::domain::entities::{Property, PropertyImage};
use crate::property::application::ports::outgoing::property_repository::{
    NewProperty, PropertyChanges, PropertyRepository, PropertyRepositoryError,
};

use super::property_query_postgres::model_to_property;
use super::sea_orm_entity::{properties, property_images};

#[derive(Clone)]
pub struct PropertyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn images_for(&self, property_id: i64) -> Result<Vec<PropertyImage>, PropertyRepositoryError> {
        let rows = property_images::Entity::find()
            .filter(property_images::Column::PropertyId.eq(property_id))
            .order_by_asc(property_images::Column::Position)
            .all(&*self.db)
            .await
            .map_err(|e| PropertyRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| PropertyImage {
                id: row.id,
                url: row.url,
                position: row.position,
            })
            .collect())
    }
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryPostgres {
    async fn create(&self, data: NewProperty) -> Result<Property, PropertyRepositoryError> {
        let active = properties::ActiveModel {
            id: NotSet,
            title: Set(data.title),
            description: Set(data.description),
            price: Set(data.price),
            bedrooms: Set(data.bedrooms),
            property_type: Set(data.property_type),
            status: Set(data.status),
            latitude: Set(data.latitude),
            longitude: Set(data.longitude),
            published_at: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| PropertyRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_property(inserted, Vec::new()))
    }

    async fn update(
        &self,
        id: i64,
        changes: PropertyChanges,
    ) -> Result<Property, PropertyRepositoryError> {
        let existing = properties::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| PropertyRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PropertyRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(bedrooms) = changes.bedrooms {
            active.bedrooms = Set(bedrooms);
        }
        if let Some(property_type) = changes.property_type {
            active.property_type = Set(property_type);
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }
        if let Some(latitude) = changes.latitude {
            active.latitude = Set(Some(latitude));
        }
        if let Some(longitude) = changes.longitude {
            active.longitude = Set(Some(longitude));
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| PropertyRepositoryError::DatabaseError(e.to_string()))?;

        let images = self.images_for(updated.id).await?;
        Ok(model_to_property(updated, images))
    }

    async fn delete(&self, id: i64) -> Result<(), PropertyRepositoryError> {
        let result = properties::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| PropertyRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PropertyRepositoryError::NotFound);
        }

        Ok(())
    }
}
