use async_trait::async_trait;

use crate::property::application::domain::entities::Property;
use crate::property::application::ports::outgoing::property_query::PropertyQuery;

#[derive(Debug, Clone)]
pub enum GetPropertyError {
    NotFound,
    QueryError(String),
}

impl std::fmt::Display for GetPropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetPropertyError::NotFound => write!(f, "Property not found"),
            GetPropertyError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for GetPropertyError {}

#[async_trait]
pub trait IGetPropertyUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<Property, GetPropertyError>;
}

#[derive(Clone)]
pub struct GetPropertyUseCase<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPropertyUseCase<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetPropertyUseCase for GetPropertyUseCase<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<Property, GetPropertyError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(GetPropertyError::QueryError)?
            .ok_or(GetPropertyError::NotFound)
    }
}
