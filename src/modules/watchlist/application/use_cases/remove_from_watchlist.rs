use async_trait::async_trait;

use crate::watchlist::application::ports::outgoing::watchlist_repository::{
    WatchlistRepository, WatchlistRepositoryError,
};

#[derive(Debug, Clone)]
pub enum RemoveFromWatchlistError {
    /// Covers both a missing entry and one owned by another user.
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for RemoveFromWatchlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveFromWatchlistError::NotFound => write!(f, "Watchlist entry not found"),
            RemoveFromWatchlistError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for RemoveFromWatchlistError {}

#[async_trait]
pub trait IRemoveFromWatchlistUseCase: Send + Sync {
    async fn execute(&self, user_id: i64, watchlist_id: i64)
        -> Result<(), RemoveFromWatchlistError>;
}

#[derive(Clone)]
pub struct RemoveFromWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    repository: R,
}

impl<R> RemoveFromWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IRemoveFromWatchlistUseCase for RemoveFromWatchlistUseCase<R>
where
    R: WatchlistRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: i64,
        watchlist_id: i64,
    ) -> Result<(), RemoveFromWatchlistError> {
        self.repository
            .remove(user_id, watchlist_id)
            .await
            .map_err(|e| match e {
                WatchlistRepositoryError::NotFound => RemoveFromWatchlistError::NotFound,
                other => RemoveFromWatchlistError::RepositoryError(other.to_string()),
            })
    }
}
