use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::property::application::use_cases::delete_property::DeletePropertyError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};

/// Delete a property
///
/// Requires authentication. Images, events, and watchlist entries cascade.
#[utoipa::path(
    delete,
    path = "/api/v1/properties/{id}",
    tag = "properties",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Property id")),
    responses(
        (status = 204, description = "Deleted"),
        (
            status = 404,
            description = "No such property",
            body = ErrorBody,
            example = json!({ "error": "Property not found" })
        ),
    )
)]
#[delete("/api/v1/properties/{id}")]
pub async fn delete_property_handler(
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.delete_property_use_case;
    let id = path.into_inner();

    match use_case.execute(id).await {
        Ok(()) => {
            info!(property_id = id, "Property deleted");
            ApiResponse::no_content()
        }

        Err(DeletePropertyError::NotFound) => ApiResponse::not_found("Property not found"),

        Err(DeletePropertyError::RepositoryError(ref e)) => {
            error!(error = %e, property_id = id, "Property delete failed");
            ApiResponse::internal_error()
        }
    }
}
