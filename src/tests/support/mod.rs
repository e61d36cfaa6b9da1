pub mod app_state_builder;
pub mod stubs;

use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::use_cases::authenticate_request::{
    AuthenticateError, AuthenticatedUser, IAuthenticateRequestUseCase,
};

struct FixedUserAuthenticate {
    user_id: i64,
}

#[async_trait]
impl IAuthenticateRequestUseCase for FixedUserAuthenticate {
    async fn execute(&self, _token: &str) -> Result<AuthenticatedUser, AuthenticateError> {
        Ok(AuthenticatedUser {
            user_id: self.user_id,
            email: "test@example.com".to_string(),
        })
    }
}

/// App data that resolves any presented token to the given user. Requests
/// without an Authorization header still 401 in the extractor before this
/// use case is consulted.
pub fn authenticated(user_id: i64) -> web::Data<Arc<dyn IAuthenticateRequestUseCase + Send + Sync>> {
    let use_case: Arc<dyn IAuthenticateRequestUseCase + Send + Sync> =
        Arc::new(FixedUserAuthenticate { user_id });
    web::Data::new(use_case)
}
