use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::property::adapter::outgoing::property_query_postgres::model_to_property;
use crate::property::adapter::outgoing::sea_orm_entity::{properties, property_images};
use crate::property::application::domain::entities::{Property, PropertyImage};
use crate::watchlist::application::domain::entities::WatchedProperty;
use crate::watchlist::application::ports::outgoing::watchlist_repository::{
    WatchlistRepository, WatchlistRepositoryError,
};

use super::sea_orm_entity::watch_lists;

#[derive(Clone)]
pub struct WatchlistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WatchlistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn images_by_property(
        &self,
        property_ids: Vec<i64>,
    ) -> Result<HashMap<i64, Vec<PropertyImage>>, WatchlistRepositoryError> {
        let rows = property_images::Entity::find()
            .filter(property_images::Column::PropertyId.is_in(property_ids))
            .order_by_asc(property_images::Column::PropertyId)
            .order_by_asc(property_images::Column::Position)
            .all(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        let mut by_property: HashMap<i64, Vec<PropertyImage>> = HashMap::new();
        for row in rows {
            by_property
                .entry(row.property_id)
                .or_default()
                .push(PropertyImage {
                    id: row.id,
                    url: row.url,
                    position: row.position,
                });
        }

        Ok(by_property)
    }
}

#[async_trait]
impl WatchlistRepository for WatchlistRepositoryPostgres {
    async fn list_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<WatchedProperty>, WatchlistRepositoryError> {
        let entries = watch_lists::Entity::find()
            .filter(watch_lists::Column::UserId.eq(user_id))
            .order_by_asc(watch_lists::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let property_ids: Vec<i64> = entries.iter().map(|e| e.property_id).collect();

        let models = properties::Entity::find()
            .filter(properties::Column::Id.is_in(property_ids.clone()))
            .all(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        let mut images = self.images_by_property(property_ids).await?;

        let mut by_id: HashMap<i64, properties::Model> =
            models.into_iter().map(|m| (m.id, m)).collect();

        // Preserve watchlist-entry order; a dangling entry (property deleted
        // mid-request) is simply skipped.
        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                by_id.remove(&entry.property_id).map(|model| WatchedProperty {
                    watchlist_id: entry.id,
                    property: model_to_property(
                        model,
                        images.remove(&entry.property_id).unwrap_or_default(),
                    ),
                })
            })
            .collect())
    }

    async fn add(
        &self,
        user_id: i64,
        property_id: i64,
    ) -> Result<Property, WatchlistRepositoryError> {
        let property = properties::Entity::find_by_id(property_id)
            .one(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(WatchlistRepositoryError::PropertyNotFound)?;

        let existing = watch_lists::Entity::find()
            .filter(watch_lists::Column::UserId.eq(user_id))
            .filter(watch_lists::Column::PropertyId.eq(property_id))
            .one(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        if existing.is_some() {
            return Err(WatchlistRepositoryError::DuplicateEntry);
        }

        let entry = watch_lists::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            property_id: Set(property_id),
            created_at: NotSet,
            updated_at: NotSet,
        };

        entry.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return WatchlistRepositoryError::DuplicateEntry;
            }
            WatchlistRepositoryError::DatabaseError(e.to_string())
        })?;

        let mut images = self.images_by_property(vec![property_id]).await?;

        Ok(model_to_property(
            property,
            images.remove(&property_id).unwrap_or_default(),
        ))
    }

    async fn remove(
        &self,
        user_id: i64,
        watchlist_id: i64,
    ) -> Result<(), WatchlistRepositoryError> {
        let result = watch_lists::Entity::delete_many()
            .filter(watch_lists::Column::Id.eq(watchlist_id))
            .filter(watch_lists::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(WatchlistRepositoryError::NotFound);
        }

        Ok(())
    }
}
