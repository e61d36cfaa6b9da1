use async_trait::async_trait;
use thiserror::Error;

use crate::event::application::domain::entities::PropertyEvent;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EventQueryError {
    #[error("Property not found")]
    PropertyNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventQuery {
    /// Events for one property, newest first. A property with no events is an
    /// empty list; a missing property is an error.
    async fn list_for_property(
        &self,
        property_id: i64,
    ) -> Result<Vec<PropertyEvent>, EventQueryError>;
}
