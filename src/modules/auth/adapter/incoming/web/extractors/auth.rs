use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::error;

use crate::auth::application::use_cases::authenticate_request::{
    AuthenticateError, AuthenticatedUser, IAuthenticateRequestUseCase,
};
use crate::shared::api::ApiResponse;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Result<Option<String>, ()> {
    let header = match req.headers().get("Authorization") {
        Some(h) => h,
        None => return Ok(None),
    };

    // Tolerate "Bearer <token>" as well as a bare token.
    header
        .to_str()
        .ok()
        .and_then(|h| h.split_whitespace().last())
        .map(|t| Some(t.to_string()))
        .ok_or(())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let use_case = match req
                .app_data::<web::Data<Arc<dyn IAuthenticateRequestUseCase + Send + Sync>>>()
            {
                Some(uc) => uc.clone(),
                None => {
                    error!("AuthenticateRequest use case not registered");
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            let token = match extract_token_from_header(&req) {
                Ok(Some(t)) => t,
                Ok(None) => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "Missing authorization header",
                    )));
                }
                Err(()) => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "Invalid authorization header format",
                    )));
                }
            };

            match use_case.execute(&token).await {
                Ok(user) => Ok(user),
                Err(e @ AuthenticateError::Expired)
                | Err(e @ AuthenticateError::Invalid(_))
                | Err(e @ AuthenticateError::UnknownUser) => {
                    Err(create_api_error(ApiResponse::unauthorized(&e.to_string())))
                }
                Err(AuthenticateError::QueryError(msg)) => {
                    error!(error = %msg, "User lookup failed during authentication");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
