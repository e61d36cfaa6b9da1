use async_trait::async_trait;

use crate::property::application::domain::entities::Property;
use crate::watchlist::application::ports::outgoing::watchlist_repository::{
    WatchlistRepository, WatchlistRepositoryError,
};

#[derive(Debug, Clone)]
pub enum AddToWatchlistError {
    PropertyNotFound,
    AlreadyWatched,
    RepositoryError(String),
}

impl std::fmt::Display for AddToWatchlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddToWatchlistError::PropertyNotFound => write!(f, "Property not found"),
            AddToWatchlistError::AlreadyWatched => {
                write!(f, "Property is already in your watchlist")
            }
            AddToWatchlistError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for AddToWatchlistError {}

#[async_trait]
pub trait IAddToWatchlistUseCase: Send + Sync {
    async fn execute(&self, user_id: i64, property_id: i64)
        -> Result<Property, AddToWatchlistError>;
}

#[derive(Clone)]
pub struct AddToWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddToWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IAddToWatchlistUseCase for AddToWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: i64,
        property_id: i64,
    ) -> Result<Property, AddToWatchlistError> {
        self.repository
            .add(user_id, property_id)
            .await
            .map_err(|e| match e {
                WatchlistRepositoryError::PropertyNotFound => {
                    AddToWatchlistError::PropertyNotFound
                }
                WatchlistRepositoryError::DuplicateEntry => AddToWatchlistError::AlreadyWatched,
                other => AddToWatchlistError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchlist::application::domain::entities::WatchedProperty;
    use chrono::Utc;

    struct MockRepository {
        result: Result<(), WatchlistRepositoryError>,
    }

    #[async_trait]
    impl WatchlistRepository for MockRepository {
        async fn list_for_user(
            &self,
            _user_id: i64,
        ) -> Result<Vec<WatchedProperty>, WatchlistRepositoryError> {
            unimplemented!()
        }

        async fn add(
            &self,
            _user_id: i64,
            property_id: i64,
        ) -> Result<Property, WatchlistRepositoryError> {
            self.result.clone()?;
            Ok(Property {
                id: property_id,
                title: "Bayside Cottage".to_string(),
                description: None,
                price: 450000,
                bedrooms: 2,
                property_type: "house".to_string(),
                status: "active".to_string(),
                latitude: None,
                longitude: None,
                published_at: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
                images: Vec::new(),
            })
        }

        async fn remove(
            &self,
            _user_id: i64,
            _watchlist_id: i64,
        ) -> Result<(), WatchlistRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_add_success() {
        let use_case = AddToWatchlistUseCase::new(MockRepository { result: Ok(()) });
        let property = use_case.execute(1, 7).await.unwrap();
        assert_eq!(property.id, 7);
    }

    #[tokio::test]
    async fn test_add_missing_property() {
        let use_case = AddToWatchlistUseCase::new(MockRepository {
            result: Err(WatchlistRepositoryError::PropertyNotFound),
        });

        let result = use_case.execute(1, 999).await;
        assert!(matches!(result, Err(AddToWatchlistError::PropertyNotFound)));
    }

    #[tokio::test]
    async fn test_add_duplicate() {
        let use_case = AddToWatchlistUseCase::new(MockRepository {
            result: Err(WatchlistRepositoryError::DuplicateEntry),
        });

        let result = use_case.execute(1, 7).await;
        assert!(matches!(result, Err(AddToWatchlistError::AlreadyWatched)));
    }

    #[tokio::test]
    async fn test_add_repository_error() {
        let use_case = AddToWatchlistUseCase::new(MockRepository {
            result: Err(WatchlistRepositoryError::DatabaseError(
                "db down".to_string(),
            )),
        });

        let result = use_case.execute(1, 7).await;
        assert!(matches!(result, Err(AddToWatchlistError::RepositoryError(_))));
    }
}
