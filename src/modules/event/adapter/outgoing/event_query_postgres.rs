use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::event::application::domain::entities::PropertyEvent;
use crate::event::application::ports::outgoing::event_query::{EventQuery, EventQueryError};
use crate::property::adapter::outgoing::sea_orm_entity::properties;

use super::sea_orm_entity::property_events;

#[derive(Clone)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn list_for_property(
        &self,
        property_id: i64,
    ) -> Result<Vec<PropertyEvent>, EventQueryError> {
        // Distinguishes "no events yet" from "no such property".
        let property = properties::Entity::find_by_id(property_id)
            .one(&*self.db)
            .await
            .map_err(|e| EventQueryError::DatabaseError(e.to_string()))?;

        if property.is_none() {
            return Err(EventQueryError::PropertyNotFound);
        }

        let rows = property_events::Entity::find()
            .filter(property_events::Column::PropertyId.eq(property_id))
            .order_by_desc(property_events::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| EventQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| PropertyEvent {
                id: row.id,
                event_type: row.event_type,
                data: row.data.unwrap_or(serde_json::Value::Null),
                created_at: row.created_at.into(),
            })
            .collect())
    }
}
