use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::auth::application::domain::entities::normalize_email;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError,
};

// ========================= Register Request =========================

#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Field-keyed validation messages, e.g. `{"email": ["can't be blank"]}`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

// ========================= Register Error =========================

#[derive(Debug, Clone)]
pub enum RegisterError {
    Validation(FieldErrors),
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::Validation(errors) => write!(f, "Validation failed: {:?}", errors),
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

fn field_error(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message.to_string()]);
    errors
}

// ========================= Register Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub email: String,
}

// ========================= Register Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    fn validate(request: &RegisterRequest) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = request
            .email
            .as_deref()
            .map(normalize_email)
            .unwrap_or_default();
        if email.is_empty() {
            errors
                .entry("email".to_string())
                .or_default()
                .push("can't be blank".to_string());
        } else if !EmailAddress::is_valid(&email) {
            errors
                .entry("email".to_string())
                .or_default()
                .push("is invalid".to_string());
        }

        let password = request.password.clone().unwrap_or_default();
        if password.is_empty() {
            errors
                .entry("password".to_string())
                .or_default()
                .push("can't be blank".to_string());
        }

        if errors.is_empty() {
            Ok((email, password))
        } else {
            Err(errors)
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError> {
        let (email, password) = Self::validate(&request).map_err(RegisterError::Validation)?;

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailTaken => {
                    RegisterError::Validation(field_error("email", "has already been taken"))
                }
                UserRepositoryError::DatabaseError(msg) => RegisterError::RepositoryError(msg),
            })?;

        Ok(RegisteredUser {
            id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::password_hasher::HashError;
    use async_trait::async_trait;

    struct MockRepository {
        result: Result<(), UserRepositoryError>,
    }

    #[async_trait]
    impl UserRepository for MockRepository {
        async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
            self.result.clone()?;
            Ok(User {
                id: 1,
                email: data.email,
                password_hash: data.password_hash,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            })
        }
    }

    struct MockHasher;

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    fn use_case(result: Result<(), UserRepositoryError>) -> RegisterUserUseCase<MockRepository> {
        RegisterUserUseCase::new(MockRepository { result }, Arc::new(MockHasher))
    }

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_success_normalizes_email() {
        let uc = use_case(Ok(()));

        let user = uc
            .execute(request("  NewUser@Example.COM ", "Password123!"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "newuser@example.com");
    }

    #[tokio::test]
    async fn test_register_missing_email() {
        let uc = use_case(Ok(()));

        let result = uc
            .execute(RegisterRequest {
                email: None,
                password: Some("Password123!".to_string()),
            })
            .await;

        match result {
            Err(RegisterError::Validation(errors)) => {
                assert_eq!(errors["email"], vec!["can't be blank"]);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_invalid_email_format() {
        let uc = use_case(Ok(()));

        let result = uc.execute(request("invalid-email", "Password123!")).await;

        match result {
            Err(RegisterError::Validation(errors)) => {
                assert_eq!(errors["email"], vec!["is invalid"]);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_missing_password() {
        let uc = use_case(Ok(()));

        let result = uc
            .execute(RegisterRequest {
                email: Some("test@example.com".to_string()),
                password: None,
            })
            .await;

        match result {
            Err(RegisterError::Validation(errors)) => {
                assert_eq!(errors["password"], vec!["can't be blank"]);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_collects_both_field_errors() {
        let uc = use_case(Ok(()));

        let result = uc.execute(RegisterRequest::default()).await;

        match result {
            Err(RegisterError::Validation(errors)) => {
                assert!(errors.contains_key("email"));
                assert!(errors.contains_key("password"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let uc = use_case(Err(UserRepositoryError::EmailTaken));

        let result = uc.execute(request("existing@example.com", "Password123!")).await;

        match result {
            Err(RegisterError::Validation(errors)) => {
                assert_eq!(errors["email"], vec!["has already been taken"]);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_repository_error() {
        let uc = use_case(Err(UserRepositoryError::DatabaseError(
            "connection refused".to_string(),
        )));

        let result = uc.execute(request("new@example.com", "Password123!")).await;

        assert!(matches!(result, Err(RegisterError::RepositoryError(_))));
    }
}
