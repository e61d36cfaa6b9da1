use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::shared::api::{ApiResponse, ErrorBody};
use actix_web::{delete, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    /// Confirmation message
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// User logout
///
/// Tokens are stateless, so logout only confirms the caller held a valid
/// token; the client discards it.
#[utoipa::path(
    delete,
    path = "/api/v1/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Logout acknowledged",
            body = LogoutResponseBody,
            example = json!({ "message": "Logged out successfully" })
        ),
        (
            status = 401,
            description = "Missing or invalid token",
            body = ErrorBody,
            example = json!({ "error": "Missing authorization header" })
        ),
    )
)]
#[delete("/api/v1/auth/logout")]
pub async fn logout_user_handler(user: AuthenticatedUser) -> impl Responder {
    info!(user_id = %user.user_id, "User logged out");

    ApiResponse::ok(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::authenticate_request::{
        AuthenticateError, IAuthenticateRequestUseCase,
    };
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockAuthenticate {
        result: Result<AuthenticatedUser, AuthenticateError>,
    }

    #[async_trait]
    impl IAuthenticateRequestUseCase for MockAuthenticate {
        async fn execute(&self, _token: &str) -> Result<AuthenticatedUser, AuthenticateError> {
            self.result.clone()
        }
    }

    fn auth_data(
        result: Result<AuthenticatedUser, AuthenticateError>,
    ) -> web::Data<Arc<dyn IAuthenticateRequestUseCase + Send + Sync>> {
        let uc: Arc<dyn IAuthenticateRequestUseCase + Send + Sync> =
            Arc::new(MockAuthenticate { result });
        web::Data::new(uc)
    }

    #[actix_web::test]
    async fn test_logout_with_valid_token() {
        let app = test::init_service(
            App::new()
                .app_data(auth_data(Ok(AuthenticatedUser {
                    user_id: 3,
                    email: "test@example.com".to_string(),
                })))
                .service(logout_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/auth/logout")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Logged out successfully");
    }

    #[actix_web::test]
    async fn test_logout_without_token() {
        let app = test::init_service(
            App::new()
                .app_data(auth_data(Err(AuthenticateError::Invalid(
                    "unused".to_string(),
                ))))
                .service(logout_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/auth/logout")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing authorization header");
    }
}
