use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::property::adapter::incoming::web::dto::PropertyDto;
use crate::property::adapter::incoming::web::routes::create_property::PropertyBody;
use crate::property::application::use_cases::update_property::UpdatePropertyError;
use crate::shared::api::{ApiResponse, ErrorBody, ErrorListBody};
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::{error, info, warn};

/// Update a property
///
/// Requires authentication. Only the supplied attributes change.
#[utoipa::path(
    put,
    path = "/api/v1/properties/{id}",
    tag = "properties",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Property id")),
    request_body = PropertyBody,
    responses(
        (status = 200, description = "Updated", body = PropertyDto),
        (
            status = 404,
            description = "No such property",
            body = ErrorBody,
            example = json!({ "error": "Property not found" })
        ),
        (
            status = 422,
            description = "Validation failed",
            body = ErrorListBody,
            example = json!({ "errors": ["Status can't be blank"] })
        ),
    )
)]
#[put("/api/v1/properties/{id}")]
pub async fn update_property_handler(
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    req: web::Json<PropertyBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.update_property_use_case;
    let id = path.into_inner();

    let params = match req.into_inner().property {
        Some(params) => params,
        None => {
            return ApiResponse::bad_request("param is missing or the value is empty: property");
        }
    };

    match use_case.execute(id, params.into()).await {
        Ok(property) => {
            info!(property_id = %property.id, "Property updated");
            ApiResponse::ok(PropertyDto::from(property))
        }

        Err(UpdatePropertyError::NotFound) => ApiResponse::not_found("Property not found"),

        Err(UpdatePropertyError::Validation(messages)) => {
            warn!(?messages, "Property update rejected");
            ApiResponse::validation_errors(&messages)
        }

        Err(UpdatePropertyError::RepositoryError(ref e)) => {
            error!(error = %e, property_id = id, "Property update failed");
            ApiResponse::internal_error()
        }
    }
}
