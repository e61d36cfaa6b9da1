use async_trait::async_trait;

use crate::watchlist::application::domain::entities::WatchedProperty;
use crate::watchlist::application::ports::outgoing::watchlist_repository::{
    WatchlistRepository, WatchlistRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ListWatchlistError {
    QueryError(String),
}

impl std::fmt::Display for ListWatchlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListWatchlistError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListWatchlistError {}

#[async_trait]
pub trait IListWatchlistUseCase: Send + Sync {
    async fn execute(&self, user_id: i64) -> Result<Vec<WatchedProperty>, ListWatchlistError>;
}

#[derive(Clone)]
pub struct ListWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListWatchlistUseCase for ListWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    async fn execute(&self, user_id: i64) -> Result<Vec<WatchedProperty>, ListWatchlistError> {
        self.repository
            .list_for_user(user_id)
            .await
            .map_err(|e| match e {
                WatchlistRepositoryError::DatabaseError(msg) => {
                    ListWatchlistError::QueryError(msg)
                }
                other => ListWatchlistError::QueryError(other.to_string()),
            })
    }
}
