use async_trait::async_trait;

use crate::property::application::ports::outgoing::property_repository::{
    PropertyRepository, PropertyRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeletePropertyError {
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeletePropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletePropertyError::NotFound => write!(f, "Property not found"),
            DeletePropertyError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeletePropertyError {}

/// Row-level delete; images, events, and watchlist entries go with it via the
/// schema's cascading foreign keys.
#[async_trait]
pub trait IDeletePropertyUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), DeletePropertyError>;
}

#[derive(Clone)]
pub struct DeletePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeletePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeletePropertyUseCase for DeletePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<(), DeletePropertyError> {
        self.repository.delete(id).await.map_err(|e| match e {
            PropertyRepositoryError::NotFound => DeletePropertyError::NotFound,
            PropertyRepositoryError::DatabaseError(msg) => {
                DeletePropertyError::RepositoryError(msg)
            }
        })
    }
}
