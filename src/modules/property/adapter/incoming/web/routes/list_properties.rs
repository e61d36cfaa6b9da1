use crate::property::adapter::incoming::web::dto::PropertyDto;
use crate::property::application::use_cases::list_properties::{
    ListPropertiesError, ListPropertiesRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

/// Query params arrive as text; numeric ones are coerced leniently, so a
/// value like `limit=abc` falls back to the default instead of a 400.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPropertiesQueryDto {
    /// Exact property type match
    pub property_type: Option<String>,
    /// Inclusive lower bedroom bound
    #[param(value_type = Option<i32>)]
    pub min_bedrooms: Option<String>,
    /// Inclusive upper bedroom bound
    #[param(value_type = Option<i32>)]
    pub max_bedrooms: Option<String>,
    /// Inclusive lower price bound
    #[param(value_type = Option<i64>)]
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    #[param(value_type = Option<i64>)]
    pub max_price: Option<String>,
    /// Page size; clamped to [1, 100], default 25
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Last-seen property id from the previous page's metadata
    pub cursor: Option<String>,
}

fn numeric<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[derive(Serialize, ToSchema)]
pub struct ListMetadata {
    #[schema(example = 25)]
    pub limit: u64,

    /// Present only when a further page exists
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "25")]
    pub next_cursor: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ListPropertiesResponse {
    pub properties: Vec<PropertyDto>,
    pub metadata: ListMetadata,
}

/// List properties
///
/// Public cursor-paginated listing ordered by ascending id. All filters are
/// optional and combined with AND.
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    tag = "properties",
    params(ListPropertiesQueryDto),
    responses(
        (status = 200, description = "One page of properties", body = ListPropertiesResponse),
    )
)]
#[get("/api/v1/properties")]
pub async fn list_properties_handler(
    query: web::Query<ListPropertiesQueryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.list_properties_use_case;
    let dto = query.into_inner();

    let request = ListPropertiesRequest {
        property_type: dto.property_type,
        min_bedrooms: numeric(dto.min_bedrooms),
        max_bedrooms: numeric(dto.max_bedrooms),
        min_price: numeric(dto.min_price),
        max_price: numeric(dto.max_price),
        limit: numeric(dto.limit),
        cursor: dto.cursor,
    };

    match use_case.execute(request).await {
        Ok(listing) => ApiResponse::ok(ListPropertiesResponse {
            properties: listing.properties.into_iter().map(Into::into).collect(),
            metadata: ListMetadata {
                limit: listing.limit,
                next_cursor: listing.next_cursor.map(|id| id.to_string()),
            },
        }),

        Err(ListPropertiesError::QueryError(ref e)) => {
            error!(error = %e, "Property listing failed");
            ApiResponse::internal_error()
        }
    }
}
