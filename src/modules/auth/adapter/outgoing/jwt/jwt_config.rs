use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_expiry: i64, // Session lifetime in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let token_expiry = env::var("JWT_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string()) // Default 24 hours
            .parse::<i64>()
            .expect("Invalid JWT_TOKEN_EXPIRY value");

        Self {
            secret_key,
            issuer: String::from("realty_api"),
            token_expiry,
        }
    }
}
