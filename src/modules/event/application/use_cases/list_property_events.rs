use async_trait::async_trait;

use crate::event::application::domain::entities::PropertyEvent;
use crate::event::application::ports::outgoing::event_query::{EventQuery, EventQueryError};

#[derive(Debug, Clone)]
pub enum ListPropertyEventsError {
    PropertyNotFound,
    QueryError(String),
}

impl std::fmt::Display for ListPropertyEventsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListPropertyEventsError::PropertyNotFound => write!(f, "Property not found"),
            ListPropertyEventsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListPropertyEventsError {}

#[async_trait]
pub trait IListPropertyEventsUseCase: Send + Sync {
    async fn execute(&self, property_id: i64)
        -> Result<Vec<PropertyEvent>, ListPropertyEventsError>;
}

#[derive(Clone)]
pub struct ListPropertyEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListPropertyEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListPropertyEventsUseCase for ListPropertyEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(
        &self,
        property_id: i64,
    ) -> Result<Vec<PropertyEvent>, ListPropertyEventsError> {
        self.query
            .list_for_property(property_id)
            .await
            .map_err(|e| match e {
                EventQueryError::PropertyNotFound => ListPropertyEventsError::PropertyNotFound,
                EventQueryError::DatabaseError(msg) => ListPropertyEventsError::QueryError(msg),
            })
    }
}
