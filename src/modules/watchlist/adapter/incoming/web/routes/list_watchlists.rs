use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::property::adapter::incoming::web::dto::PropertyDto;
use crate::shared::api::ApiResponse;
use crate::watchlist::application::domain::entities::WatchedProperty;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// A watched property: the full listing plus the watchlist entry id used
/// for removal.
#[derive(Serialize, ToSchema)]
pub struct WatchedPropertyDto {
    #[schema(example = 10)]
    pub watchlist_id: i64,
    #[serde(flatten)]
    pub property: PropertyDto,
}

#[derive(Serialize, ToSchema)]
pub struct WatchlistResponse {
    pub properties: Vec<WatchedPropertyDto>,
    #[schema(example = 1)]
    pub count: usize,
}

impl From<WatchedProperty> for WatchedPropertyDto {
    fn from(watched: WatchedProperty) -> Self {
        Self {
            watchlist_id: watched.watchlist_id,
            property: PropertyDto::from(watched.property),
        }
    }
}

/// List the current user's watchlist
///
/// Entries come back oldest-first, each carrying the property it points at.
#[utoipa::path(
    get,
    path = "/api/v1/watchlists",
    tag = "watchlists",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The user's watched properties", body = WatchlistResponse),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/v1/watchlists")]
pub async fn list_watchlists_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.list_watchlist_use_case;

    match use_case.execute(user.user_id).await {
        Ok(watched) => {
            let properties: Vec<WatchedPropertyDto> =
                watched.into_iter().map(WatchedPropertyDto::from).collect();
            let count = properties.len();

            ApiResponse::ok(WatchlistResponse { properties, count })
        }

        Err(ref e) => {
            error!(error = %e, "Watchlist lookup failed");
            ApiResponse::internal_error()
        }
    }
}
