use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login credentials from the client. Fields stay optional so a missing one
/// falls through to the use case and comes back as a 401, not a 400.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID
    #[schema(example = 1)]
    pub id: i64,

    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// Authenticated user information
    pub user: LoginUserInfo,
}

/// User login
///
/// Authenticates a user with email and password, returns a JWT bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = LoginResponse,
            example = json!({
                "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                "user": { "id": 1, "email": "john@example.com" }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorBody,
            example = json!({ "error": "Invalid email or password" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorBody,
            example = json!({ "error": "An unexpected error occurred" })
        ),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let dto = req.into_inner();

    let request = LoginRequest {
        email: dto.email,
        password: dto.password,
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");

            ApiResponse::ok(LoginResponse {
                token: response.token,
                user: LoginUserInfo {
                    id: response.user.id,
                    email: response.user.email,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::login_user::{
        ILoginUserUseCase, LoginUserResponse, SessionUserInfo,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockLoginUserSuccess;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUserSuccess {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Ok(LoginUserResponse {
                token: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test".to_string(),
                user: SessionUserInfo {
                    id: 1,
                    email: "test@example.com".to_string(),
                },
            })
        }
    }

    #[derive(Clone)]
    struct MockLoginInvalidCredentials;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginInvalidCredentials {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Err(LoginError::InvalidCredentials)
        }
    }

    #[derive(Clone)]
    struct MockLoginQueryError;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginQueryError {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            Err(LoginError::QueryError("connection pool exhausted".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_login_success_returns_token_and_user() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUserSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "email": "test@example.com",
                "password": "password123"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["token"].is_string());
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["email"], "test@example.com");
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginInvalidCredentials)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "email": "test@example.com",
                "password": "wrong"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_login_missing_fields_still_reach_use_case() {
        // Absent email/password must not 400 at deserialization.
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginInvalidCredentials)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_login_query_error_is_internal() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginQueryError)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "email": "test@example.com",
                "password": "password123"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "An unexpected error occurred");
    }
}
