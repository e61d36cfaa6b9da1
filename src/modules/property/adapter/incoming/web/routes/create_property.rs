use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::property::adapter::incoming::web::dto::PropertyDto;
use crate::property::application::use_cases::create_property::{
    CreatePropertyError, PropertyParams,
};
use crate::shared::api::{ApiResponse, ErrorBody, ErrorListBody};
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PropertyParamsDto {
    #[schema(example = "Bayside Cottage")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = 450000)]
    pub price: Option<i64>,
    #[schema(example = 2)]
    pub bedrooms: Option<i32>,
    #[schema(example = "house")]
    pub property_type: Option<String>,
    #[schema(example = "active")]
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Deserialize, ToSchema)]
pub struct PropertyBody {
    pub property: Option<PropertyParamsDto>,
}

impl From<PropertyParamsDto> for PropertyParams {
    fn from(dto: PropertyParamsDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            price: dto.price,
            bedrooms: dto.bedrooms,
            property_type: dto.property_type,
            status: dto.status,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

/// Create a property
///
/// Requires authentication. Attributes arrive nested under a `property` key.
#[utoipa::path(
    post,
    path = "/api/v1/properties",
    tag = "properties",
    security(("bearer_auth" = [])),
    request_body = PropertyBody,
    responses(
        (status = 201, description = "Created", body = PropertyDto),
        (
            status = 400,
            description = "Missing property key",
            body = ErrorBody,
            example = json!({ "error": "param is missing or the value is empty: property" })
        ),
        (
            status = 422,
            description = "Validation failed",
            body = ErrorListBody,
            example = json!({ "errors": ["Title can't be blank"] })
        ),
    )
)]
#[post("/api/v1/properties")]
pub async fn create_property_handler(
    _user: AuthenticatedUser,
    req: web::Json<PropertyBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.create_property_use_case;

    let params = match req.into_inner().property {
        Some(params) => params,
        None => {
            return ApiResponse::bad_request("param is missing or the value is empty: property");
        }
    };

    match use_case.execute(params.into()).await {
        Ok(property) => {
            info!(property_id = %property.id, "Property created");
            ApiResponse::created(PropertyDto::from(property))
        }

        Err(CreatePropertyError::Validation(messages)) => {
            warn!(?messages, "Property rejected");
            ApiResponse::validation_errors(&messages)
        }

        Err(CreatePropertyError::RepositoryError(ref e)) => {
            error!(error = %e, "Property insert failed");
            ApiResponse::internal_error()
        }
    }
}
