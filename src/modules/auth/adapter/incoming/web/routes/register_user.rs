use crate::auth::application::use_cases::register_user::{
    FieldErrors, RegisterError, RegisterRequest,
};
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SignupParams {
    /// Email address
    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

/// Signup payload. The user attributes arrive nested under a `user` key; a
/// body without that key is a 400, not a validation failure.
#[derive(Deserialize, ToSchema)]
pub struct SignupBody {
    pub user: Option<SignupParams>,
}

#[derive(Serialize, ToSchema)]
pub struct SignupResponse {
    /// User ID
    #[schema(example = 1)]
    pub id: i64,

    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,
}

/// User registration
///
/// Creates a new account from `{"user": {"email", "password"}}`.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "auth",
    request_body = SignupBody,
    responses(
        (
            status = 201,
            description = "Account created",
            body = SignupResponse,
            example = json!({ "id": 1, "email": "john@example.com" })
        ),
        (
            status = 400,
            description = "Missing user key",
            body = ErrorBody,
            example = json!({ "error": "param is missing or the value is empty: user" })
        ),
        (
            status = 422,
            description = "Validation failed, keyed by field",
            example = json!({ "email": ["has already been taken"] })
        ),
    )
)]
#[post("/api/v1/users")]
pub async fn register_user_handler(
    req: web::Json<SignupBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;

    let params = match req.into_inner().user {
        Some(params) => params,
        None => {
            return ApiResponse::bad_request("param is missing or the value is empty: user");
        }
    };

    let request = RegisterRequest {
        email: params.email,
        password: params.password,
    };

    match use_case.execute(request).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");

            ApiResponse::created(SignupResponse {
                id: user.id,
                email: user.email,
            })
        }

        Err(RegisterError::Validation(errors)) => {
            warn!(?errors, "Signup rejected");
            field_errors_response(&errors)
        }

        Err(RegisterError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterError::RepositoryError(ref e)) => {
            error!(error = %e, "User insert failed");
            ApiResponse::internal_error()
        }
    }
}

fn field_errors_response(errors: &FieldErrors) -> actix_web::HttpResponse {
    actix_web::HttpResponse::UnprocessableEntity().json(errors)
}
