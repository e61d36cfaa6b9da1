use async_trait::async_trait;
use thiserror::Error;

use crate::property::application::domain::entities::Property;

#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub bedrooms: i32,
    pub property_type: String,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i32>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PropertyRepositoryError {
    #[error("Property not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PropertyRepository {
    async fn create(&self, data: NewProperty) -> Result<Property, PropertyRepositoryError>;

    async fn update(
        &self,
        id: i64,
        changes: PropertyChanges,
    ) -> Result<Property, PropertyRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), PropertyRepositoryError>;
}
