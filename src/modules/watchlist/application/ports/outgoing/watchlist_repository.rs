use async_trait::async_trait;
use thiserror::Error;

use crate::property::application::domain::entities::Property;
use crate::watchlist::application::domain::entities::WatchedProperty;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WatchlistRepositoryError {
    #[error("Property not found")]
    PropertyNotFound,

    /// The (user, property) pair already exists; also raised when a
    /// concurrent insert loses the race on the unique index.
    #[error("Property is already in your watchlist")]
    DuplicateEntry,

    #[error("Watchlist entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait WatchlistRepository {
    async fn list_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<WatchedProperty>, WatchlistRepositoryError>;

    /// Links the property to the user and returns it with its images.
    async fn add(
        &self,
        user_id: i64,
        property_id: i64,
    ) -> Result<Property, WatchlistRepositoryError>;

    /// Deletes the entry only when it belongs to `user_id`; an entry owned by
    /// another user is indistinguishable from a missing one.
    async fn remove(&self, user_id: i64, watchlist_id: i64)
        -> Result<(), WatchlistRepositoryError>;
}
