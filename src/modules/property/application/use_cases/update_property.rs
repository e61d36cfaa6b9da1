use async_trait::async_trait;

use crate::property::application::domain::entities::Property;
use crate::property::application::ports::outgoing::property_repository::{
    PropertyChanges, PropertyRepository, PropertyRepositoryError,
};
use crate::property::application::use_cases::create_property::PropertyParams;

#[derive(Debug, Clone)]
pub enum UpdatePropertyError {
    NotFound,
    Validation(Vec<String>),
    RepositoryError(String),
}

impl std::fmt::Display for UpdatePropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdatePropertyError::NotFound => write!(f, "Property not found"),
            UpdatePropertyError::Validation(messages) => {
                write!(f, "Validation failed: {}", messages.join(", "))
            }
            UpdatePropertyError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdatePropertyError {}

/// Updates touch only the supplied fields; a required field supplied blank is
/// a validation failure rather than a silent no-op.
fn validate_changes(params: &PropertyParams) -> Result<PropertyChanges, Vec<String>> {
    let mut messages = Vec::new();

    let check_present = |value: &Option<String>, message: &str, messages: &mut Vec<String>| {
        if let Some(v) = value {
            if v.trim().is_empty() {
                messages.push(message.to_string());
            }
        }
    };

    check_present(&params.title, "Title can't be blank", &mut messages);
    check_present(
        &params.property_type,
        "Property type can't be blank",
        &mut messages,
    );
    check_present(&params.status, "Status can't be blank", &mut messages);

    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(PropertyChanges {
        title: params.title.as_ref().map(|t| t.trim().to_string()),
        description: params.description.clone(),
        price: params.price,
        bedrooms: params.bedrooms,
        property_type: params.property_type.as_ref().map(|t| t.trim().to_string()),
        status: params.status.as_ref().map(|s| s.trim().to_string()),
        latitude: params.latitude,
        longitude: params.longitude,
    })
}

#[async_trait]
pub trait IUpdatePropertyUseCase: Send + Sync {
    async fn execute(&self, id: i64, params: PropertyParams)
        -> Result<Property, UpdatePropertyError>;
}

#[derive(Clone)]
pub struct UpdatePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdatePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdatePropertyUseCase for UpdatePropertyUseCase<R>
where
    R: PropertyRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i64,
        params: PropertyParams,
    ) -> Result<Property, UpdatePropertyError> {
        let changes = validate_changes(&params).map_err(UpdatePropertyError::Validation)?;

        self.repository
            .update(id, changes)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => UpdatePropertyError::NotFound,
                PropertyRepositoryError::DatabaseError(msg) => {
                    UpdatePropertyError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::application::ports::outgoing::property_repository::NewProperty;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockRepository {
        result: Result<(), PropertyRepositoryError>,
        seen: Mutex<Option<PropertyChanges>>,
    }

    impl MockRepository {
        fn ok() -> Self {
            Self {
                result: Ok(()),
                seen: Mutex::new(None),
            }
        }

        fn failing(err: PropertyRepositoryError) -> Self {
            Self {
                result: Err(err),
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl PropertyRepository for MockRepository {
        async fn create(&self, _data: NewProperty) -> Result<Property, PropertyRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            id: i64,
            changes: PropertyChanges,
        ) -> Result<Property, PropertyRepositoryError> {
            *self.seen.lock().unwrap() = Some(changes.clone());
            self.result.clone()?;
            Ok(Property {
                id,
                title: changes.title.unwrap_or_else(|| "Bayside Cottage".to_string()),
                description: changes.description,
                price: changes.price.unwrap_or(450000),
                bedrooms: changes.bedrooms.unwrap_or(2),
                property_type: changes
                    .property_type
                    .unwrap_or_else(|| "house".to_string()),
                status: changes.status.unwrap_or_else(|| "active".to_string()),
                latitude: changes.latitude,
                longitude: changes.longitude,
                published_at: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
                images: Vec::new(),
            })
        }

        async fn delete(&self, _id: i64) -> Result<(), PropertyRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_update_partial_changes_only() {
        let use_case = UpdatePropertyUseCase::new(MockRepository::ok());

        let property = use_case
            .execute(
                1,
                PropertyParams {
                    price: Some(475000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(property.price, 475000);

        let seen = use_case.repository.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.price, Some(475000));
        assert_eq!(seen.title, None);
    }

    #[tokio::test]
    async fn test_update_blank_required_field_rejected() {
        let use_case = UpdatePropertyUseCase::new(MockRepository::ok());

        let result = use_case
            .execute(
                1,
                PropertyParams {
                    status: Some("".to_string()),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Err(UpdatePropertyError::Validation(messages)) => {
                assert_eq!(messages, vec!["Status can't be blank"]);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_missing_property() {
        let use_case =
            UpdatePropertyUseCase::new(MockRepository::failing(PropertyRepositoryError::NotFound));

        let result = use_case
            .execute(
                999,
                PropertyParams {
                    price: Some(1),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UpdatePropertyError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_repository_error() {
        let use_case = UpdatePropertyUseCase::new(MockRepository::failing(
            PropertyRepositoryError::DatabaseError("connection refused".to_string()),
        ));

        let result = use_case
            .execute(
                1,
                PropertyParams {
                    price: Some(1),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UpdatePropertyError::RepositoryError(_))));
    }
}
