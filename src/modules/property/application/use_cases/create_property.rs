use async_trait::async_trait;

use crate::property::application::domain::entities::Property;
use crate::property::application::ports::outgoing::property_repository::{
    NewProperty, PropertyRepository, PropertyRepositoryError,
};

/// Listing attributes as submitted by the client, before validation.
#[derive(Debug, Clone, Default)]
pub struct PropertyParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i32>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub enum CreatePropertyError {
    /// Human-readable messages, one per failed validation.
    Validation(Vec<String>),
    RepositoryError(String),
}

impl std::fmt::Display for CreatePropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePropertyError::Validation(messages) => {
                write!(f, "Validation failed: {}", messages.join(", "))
            }
            CreatePropertyError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreatePropertyError {}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Presence checks for the columns the schema requires, in field order.
pub(crate) fn validate_params(params: &PropertyParams) -> Vec<String> {
    let mut messages = Vec::new();

    if blank(&params.title) {
        messages.push("Title can't be blank".to_string());
    }
    if params.price.is_none() {
        messages.push("Price can't be blank".to_string());
    }
    if params.bedrooms.is_none() {
        messages.push("Bedrooms can't be blank".to_string());
    }
    if blank(&params.property_type) {
        messages.push("Property type can't be blank".to_string());
    }
    if blank(&params.status) {
        messages.push("Status can't be blank".to_string());
    }

    messages
}

#[async_trait]
pub trait ICreatePropertyUseCase: Send + Sync {
    async fn execute(&self, params: PropertyParams) -> Result<Property, CreatePropertyError>;
}

#[derive(Clone)]
pub struct CreatePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreatePropertyUseCase for CreatePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    async fn execute(&self, params: PropertyParams) -> Result<Property, CreatePropertyError> {
        let messages = validate_params(&params);
        if !messages.is_empty() {
            return Err(CreatePropertyError::Validation(messages));
        }

        // validate_params guarantees presence of the required fields.
        let data = NewProperty {
            title: params.title.unwrap_or_default().trim().to_string(),
            description: params.description,
            price: params.price.unwrap_or_default(),
            bedrooms: params.bedrooms.unwrap_or_default(),
            property_type: params.property_type.unwrap_or_default().trim().to_string(),
            status: params.status.unwrap_or_default().trim().to_string(),
            latitude: params.latitude,
            longitude: params.longitude,
        };

        self.repository.create(data).await.map_err(|e| match e {
            PropertyRepositoryError::NotFound => {
                CreatePropertyError::RepositoryError(e.to_string())
            }
            PropertyRepositoryError::DatabaseError(msg) => {
                CreatePropertyError::RepositoryError(msg)
            }
        })
    }
}
