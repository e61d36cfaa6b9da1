use crate::auth::application::use_cases::authenticate_request::AuthenticatedUser;
use crate::event::application::domain::entities::PropertyEvent;
use crate::event::application::use_cases::list_property_events::ListPropertyEventsError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EventDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "price_changed")]
    pub event_type: String,
    /// Opaque payload, interpreted by event_type
    #[schema(example = json!({"old_price": 450000, "new_price": 500000}))]
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct EventListResponse {
    pub events: Vec<EventDto>,
    #[schema(example = 2)]
    pub count: usize,
}

impl From<PropertyEvent> for EventDto {
    fn from(event: PropertyEvent) -> Self {
        Self {
            id: event.id,
            event_type: event.event_type,
            data: event.data,
            created_at: event.created_at,
        }
    }
}

/// Property event history
///
/// All events for a property, most recent first.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}/property_events",
    tag = "events",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Property id")),
    responses(
        (status = 200, description = "Event history", body = EventListResponse),
        (
            status = 404,
            description = "No such property",
            body = ErrorBody,
            example = json!({ "error": "Property not found" })
        ),
    )
)]
#[get("/api/v1/properties/{id}/property_events")]
pub async fn get_property_events_handler(
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.list_property_events_use_case;
    let property_id = path.into_inner();

    match use_case.execute(property_id).await {
        Ok(events) => {
            let events: Vec<EventDto> = events.into_iter().map(Into::into).collect();
            let count = events.len();
            ApiResponse::ok(EventListResponse { events, count })
        }

        Err(ListPropertyEventsError::PropertyNotFound) => {
            ApiResponse::not_found("Property not found")
        }

        Err(ListPropertyEventsError::QueryError(ref e)) => {
            error!(error = %e, property_id, "Event listing failed");
            ApiResponse::internal_error()
        }
    }
}
