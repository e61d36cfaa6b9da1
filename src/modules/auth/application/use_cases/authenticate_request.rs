use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenError, TokenProvider, UserQuery};

/// The resolved caller of an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

#[derive(Debug, Clone)]
pub enum AuthenticateError {
    Expired,
    Invalid(String),
    UnknownUser,
    QueryError(String),
}

impl std::fmt::Display for AuthenticateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticateError::Expired => write!(f, "Token has expired"),
            AuthenticateError::Invalid(msg) => write!(f, "Invalid token: {}", msg),
            AuthenticateError::UnknownUser => write!(f, "User not found"),
            AuthenticateError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for AuthenticateError {}

/// Verify a bearer token and load the user it names. A token that verifies
/// but points at a deleted account is rejected the same way as a bad token.
#[async_trait]
pub trait IAuthenticateRequestUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<AuthenticatedUser, AuthenticateError>;
}

#[derive(Clone)]
pub struct AuthenticateRequestUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    query: Q,
}

impl<Q> AuthenticateRequestUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(token_provider: Arc<dyn TokenProvider + Send + Sync>, query: Q) -> Self {
        Self {
            token_provider,
            query,
        }
    }
}

#[async_trait]
impl<Q> IAuthenticateRequestUseCase for AuthenticateRequestUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<AuthenticatedUser, AuthenticateError> {
        let claims = self.token_provider.verify_token(token).map_err(|e| match e {
            TokenError::Expired => AuthenticateError::Expired,
            TokenError::Invalid(msg) => AuthenticateError::Invalid(msg),
            TokenError::GenerationFailed(msg) => AuthenticateError::Invalid(msg),
        })?;

        let user = self
            .query
            .find_by_id(claims.user_id)
            .await
            .map_err(AuthenticateError::QueryError)?
            .ok_or(AuthenticateError::UnknownUser)?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            email: user.email,
        })
    }
}
