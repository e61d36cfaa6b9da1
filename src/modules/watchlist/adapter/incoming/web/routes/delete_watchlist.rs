use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::watchlist::application::use_cases::remove_from_watchlist::RemoveFromWatchlistError;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};

/// Remove a watchlist entry
///
/// The id is the watchlist entry id, not the property id. Entries owned by
/// other users are invisible here, so they 404 rather than 403.
#[utoipa::path(
    delete,
    path = "/api/v1/watchlists/{id}",
    tag = "watchlists",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Watchlist entry id")),
    responses(
        (status = 204, description = "Removed"),
        (
            status = 404,
            description = "No such entry for this user",
            body = ErrorBody,
            example = json!({ "error": "Watchlist entry not found" })
        ),
    )
)]
#[delete("/api/v1/watchlists/{id}")]
pub async fn delete_watchlist_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let watchlist_id = path.into_inner();
    let use_case = &data.remove_from_watchlist_use_case;

    match use_case.execute(user.user_id, watchlist_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, watchlist_id = %watchlist_id, "Watchlist entry removed");
            ApiResponse::no_content()
        }

        Err(RemoveFromWatchlistError::NotFound) => {
            ApiResponse::not_found("Watchlist entry not found")
        }

        Err(RemoveFromWatchlistError::RepositoryError(ref e)) => {
            error!(error = %e, "Watchlist delete failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::authenticated;
    use crate::watchlist::application::use_cases::remove_from_watchlist::IRemoveFromWatchlistUseCase;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockRemove {
        result: Result<(), RemoveFromWatchlistError>,
    }

    #[async_trait]
    impl IRemoveFromWatchlistUseCase for MockRemove {
        async fn execute(
            &self,
            _user_id: i64,
            _watchlist_id: i64,
        ) -> Result<(), RemoveFromWatchlistError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_delete_watchlist_success() {
        let app_state = TestAppStateBuilder::default()
            .with_remove_from_watchlist(MockRemove { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(authenticated(1))
                .service(delete_watchlist_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/watchlists/10")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn test_delete_watchlist_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_remove_from_watchlist(MockRemove {
                result: Err(RemoveFromWatchlistError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(authenticated(1))
                .service(delete_watchlist_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/watchlists/999")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Watchlist entry not found");
    }

    #[actix_web::test]
    async fn test_delete_watchlist_requires_auth() {
        let app_state = TestAppStateBuilder::default()
            .with_remove_from_watchlist(MockRemove { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(authenticated(1))
                .service(delete_watchlist_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/watchlists/10")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
