// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body used by 400/401/404 and conflict-style 422 responses.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    #[schema(example = "Invalid email or password")]
    pub error: String,
}

/// Error body used by 422 responses carrying model validation messages.
#[derive(Serialize, ToSchema)]
pub struct ErrorListBody {
    /// One human-readable message per failed validation
    #[schema(example = json!(["Title can't be blank"]))]
    pub errors: Vec<String>,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            error: message.to_string(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// 422 with the `{"errors": [...]}` shape used by property create/update.
    pub fn validation_errors(messages: &[String]) -> HttpResponse {
        HttpResponse::UnprocessableEntity().json(ErrorListBody {
            errors: messages.to_vec(),
        })
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }
}
