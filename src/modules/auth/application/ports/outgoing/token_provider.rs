use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

pub trait TokenProvider: Send + Sync {
    fn generate_token(&self, user_id: i64) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
