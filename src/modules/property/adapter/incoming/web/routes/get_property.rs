use crate::property::adapter::incoming::web::dto::PropertyDto;
use crate::property::application::use_cases::get_property::GetPropertyError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Fetch a property
///
/// Public read of a single property with its ordered images.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    tag = "properties",
    params(("id" = i64, Path, description = "Property id")),
    responses(
        (status = 200, description = "The property", body = PropertyDto),
        (
            status = 404,
            description = "No such property",
            body = ErrorBody,
            example = json!({ "error": "Property not found" })
        ),
    )
)]
#[get("/api/v1/properties/{id}")]
pub async fn get_property_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.get_property_use_case;
    let id = path.into_inner();

    match use_case.execute(id).await {
        Ok(property) => ApiResponse::ok(PropertyDto::from(property)),

        Err(GetPropertyError::NotFound) => ApiResponse::not_found("Property not found"),

        Err(GetPropertyError::QueryError(ref e)) => {
            error!(error = %e, property_id = id, "Property fetch failed");
            ApiResponse::internal_error()
        }
    }
}
