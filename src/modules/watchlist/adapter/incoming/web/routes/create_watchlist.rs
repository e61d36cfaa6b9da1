use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::property::adapter::incoming::web::dto::PropertyDto;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::watchlist::application::use_cases::add_to_watchlist::AddToWatchlistError;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct WatchlistParams {
    #[schema(example = 7)]
    pub property_id: Option<i64>,
}

#[derive(Deserialize, ToSchema)]
pub struct WatchlistBody {
    pub watchlist: Option<WatchlistParams>,
}

#[derive(Serialize, ToSchema)]
pub struct WatchlistCreatedResponse {
    pub property: PropertyDto,
    #[schema(example = "Property added to watchlist")]
    pub message: String,
}

/// Add a property to the current user's watchlist
///
/// An absent `property_id` is treated the same as one pointing at no
/// property, so both come back as 404.
#[utoipa::path(
    post,
    path = "/api/v1/watchlists",
    tag = "watchlists",
    security(("bearer_auth" = [])),
    request_body = WatchlistBody,
    responses(
        (status = 201, description = "Added", body = WatchlistCreatedResponse),
        (
            status = 400,
            description = "Missing watchlist key",
            body = ErrorBody,
            example = json!({ "error": "param is missing or the value is empty: watchlist" })
        ),
        (
            status = 404,
            description = "Property not found",
            body = ErrorBody,
            example = json!({ "error": "Property not found" })
        ),
        (
            status = 422,
            description = "Already watched",
            body = ErrorBody,
            example = json!({ "error": "Property is already in your watchlist" })
        ),
    )
)]
#[post("/api/v1/watchlists")]
pub async fn create_watchlist_handler(
    user: AuthenticatedUser,
    req: web::Json<WatchlistBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.add_to_watchlist_use_case;

    let params = match req.into_inner().watchlist {
        Some(params) => params,
        None => {
            return ApiResponse::bad_request("param is missing or the value is empty: watchlist");
        }
    };

    let property_id = match params.property_id {
        Some(id) => id,
        None => return ApiResponse::not_found("Property not found"),
    };

    match use_case.execute(user.user_id, property_id).await {
        Ok(property) => {
            info!(user_id = %user.user_id, property_id = %property.id, "Property watched");
            ApiResponse::created(WatchlistCreatedResponse {
                property: PropertyDto::from(property),
                message: "Property added to watchlist".to_string(),
            })
        }

        Err(AddToWatchlistError::PropertyNotFound) => ApiResponse::not_found("Property not found"),

        Err(AddToWatchlistError::AlreadyWatched) => {
            warn!(user_id = %user.user_id, property_id = %property_id, "Duplicate watch");
            ApiResponse::unprocessable("Property is already in your watchlist")
        }

        Err(AddToWatchlistError::RepositoryError(ref e)) => {
            error!(error = %e, "Watchlist insert failed");
            ApiResponse::internal_error()
        }
    }
}
