use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::collections::HashMap;
use std::sync::Arc;

use crate::property::application::domain::entities::{Property, PropertyImage};
use crate::property::application::ports::outgoing::property_query::{
    CursorPage, PropertyFilter, PropertyPage, PropertyQuery,
};

use super::sea_orm_entity::{properties, property_images};

#[derive(Clone)]
pub struct PropertyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered_select(filter: &PropertyFilter) -> sea_orm::Select<properties::Entity> {
        let mut query = properties::Entity::find();

        if let Some(ref property_type) = filter.property_type {
            query = query.filter(properties::Column::PropertyType.eq(property_type.clone()));
        }
        if let Some(min) = filter.min_bedrooms {
            query = query.filter(properties::Column::Bedrooms.gte(min));
        }
        if let Some(max) = filter.max_bedrooms {
            query = query.filter(properties::Column::Bedrooms.lte(max));
        }
        if let Some(min) = filter.min_price {
            query = query.filter(properties::Column::Price.gte(min));
        }
        if let Some(max) = filter.max_price {
            query = query.filter(properties::Column::Price.lte(max));
        }

        query
    }

    async fn load_images(
        &self,
        property_ids: Vec<i64>,
    ) -> Result<HashMap<i64, Vec<PropertyImage>>, String> {
        let rows = property_images::Entity::find()
            .filter(property_images::Column::PropertyId.is_in(property_ids))
            .order_by_asc(property_images::Column::PropertyId)
            .order_by_asc(property_images::Column::Position)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

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

pub(crate) fn model_to_property(
    model: properties::Model,
    images: Vec<PropertyImage>,
) -> Property {
    Property {
        id: model.id,
        title: model.title,
        description: model.description,
        price: model.price,
        bedrooms: model.bedrooms,
        property_type: model.property_type,
        status: model.status,
        latitude: model.latitude,
        longitude: model.longitude,
        published_at: model.published_at.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
        images,
    }
}

#[async_trait]
impl PropertyQuery for PropertyQueryPostgres {
    async fn list(
        &self,
        filter: &PropertyFilter,
        page: &CursorPage,
    ) -> Result<PropertyPage, String> {
        let mut query = Self::filtered_select(filter).order_by_asc(properties::Column::Id);

        if let Some(after) = page.after {
            query = query.filter(properties::Column::Id.gt(after));
        }

        let models = query
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        if models.is_empty() {
            return Ok(PropertyPage {
                properties: Vec::new(),
                next_cursor: None,
            });
        }

        let mut images = self
            .load_images(models.iter().map(|m| m.id).collect())
            .await?;

        // Emit a cursor only when the page is full and another matching row
        // exists past the last returned id.
        let next_cursor = match models.last() {
            Some(last) if models.len() as u64 == page.limit => {
                let further = Self::filtered_select(filter)
                    .filter(properties::Column::Id.gt(last.id))
                    .order_by_asc(properties::Column::Id)
                    .limit(1)
                    .one(&*self.db)
                    .await
                    .map_err(|e| e.to_string())?;
                further.map(|_| last.id)
            }
            _ => None,
        };

        let properties = models
            .into_iter()
            .map(|m| {
                let id = m.id;
                model_to_property(m, images.remove(&id).unwrap_or_default())
            })
            .collect();

        Ok(PropertyPage {
            properties,
            next_cursor,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Property>, String> {
        let model = properties::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        let Some(model) = model else {
            return Ok(None);
        };

        let mut images = self.load_images(vec![model.id]).await?;
        let id = model.id;

        Ok(Some(model_to_property(
            model,
            images.remove(&id).unwrap_or_default(),
        )))
    }
}
