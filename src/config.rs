use std::env;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

/// Application configuration, loaded once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Only called from `main`; a missing required variable is a startup failure.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("Invalid PORT value");
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");

        Self {
            host,
            port,
            database_url,
            jwt: JwtConfig::from_env(),
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
