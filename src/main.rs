pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::event;
pub use modules::property;
pub use modules::watchlist;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::use_cases::{
    authenticate_request::{AuthenticateRequestUseCase, IAuthenticateRequestUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::event::adapter::outgoing::event_query_postgres::EventQueryPostgres;
use crate::event::application::use_cases::list_property_events::{
    IListPropertyEventsUseCase, ListPropertyEventsUseCase,
};

use crate::property::adapter::outgoing::{PropertyQueryPostgres, PropertyRepositoryPostgres};
use crate::property::application::use_cases::{
    create_property::{CreatePropertyUseCase, ICreatePropertyUseCase},
    delete_property::{DeletePropertyUseCase, IDeletePropertyUseCase},
    get_property::{GetPropertyUseCase, IGetPropertyUseCase},
    list_properties::{IListPropertiesUseCase, ListPropertiesUseCase},
    update_property::{IUpdatePropertyUseCase, UpdatePropertyUseCase},
};

use crate::watchlist::adapter::outgoing::WatchlistRepositoryPostgres;
use crate::watchlist::application::use_cases::{
    add_to_watchlist::{AddToWatchlistUseCase, IAddToWatchlistUseCase},
    list_watchlist::{IListWatchlistUseCase, ListWatchlistUseCase},
    remove_from_watchlist::{IRemoveFromWatchlistUseCase, RemoveFromWatchlistUseCase},
};

use crate::config::AppConfig;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub list_properties_use_case: Arc<dyn IListPropertiesUseCase + Send + Sync>,
    pub get_property_use_case: Arc<dyn IGetPropertyUseCase + Send + Sync>,
    pub create_property_use_case: Arc<dyn ICreatePropertyUseCase + Send + Sync>,
    pub update_property_use_case: Arc<dyn IUpdatePropertyUseCase + Send + Sync>,
    pub delete_property_use_case: Arc<dyn IDeletePropertyUseCase + Send + Sync>,
    pub list_property_events_use_case: Arc<dyn IListPropertyEventsUseCase + Send + Sync>,
    pub list_watchlist_use_case: Arc<dyn IListWatchlistUseCase + Send + Sync>,
    pub add_to_watchlist_use_case: Arc<dyn IAddToWatchlistUseCase + Send + Sync>,
    pub remove_from_watchlist_use_case: Arc<dyn IRemoveFromWatchlistUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    let server_url = config.server_url();

    info!("Starting server on {}", server_url);

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth wiring
    let jwt_service = Arc::new(JwtTokenService::new(config.jwt.clone()));
    let password_hasher = Arc::new(BcryptHasher::new());
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        password_hasher.clone(),
        jwt_service.clone(),
    );
    let register_user_use_case = RegisterUserUseCase::new(user_repo, password_hasher);
    let authenticate_use_case = AuthenticateRequestUseCase::new(jwt_service, user_query);

    // Property wiring
    let property_query = PropertyQueryPostgres::new(Arc::clone(&db_arc));
    let property_repo = PropertyRepositoryPostgres::new(Arc::clone(&db_arc));

    let list_properties_use_case = ListPropertiesUseCase::new(property_query.clone());
    let get_property_use_case = GetPropertyUseCase::new(property_query);
    let create_property_use_case = CreatePropertyUseCase::new(property_repo.clone());
    let update_property_use_case = UpdatePropertyUseCase::new(property_repo.clone());
    let delete_property_use_case = DeletePropertyUseCase::new(property_repo);

    // Event wiring
    let event_query = EventQueryPostgres::new(Arc::clone(&db_arc));
    let list_property_events_use_case = ListPropertyEventsUseCase::new(event_query);

    // Watchlist wiring
    let watchlist_repo = WatchlistRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_watchlist_use_case = ListWatchlistUseCase::new(watchlist_repo.clone());
    let add_to_watchlist_use_case = AddToWatchlistUseCase::new(watchlist_repo.clone());
    let remove_from_watchlist_use_case = RemoveFromWatchlistUseCase::new(watchlist_repo);

    let state = AppState {
        login_user_use_case: Arc::new(login_user_use_case),
        register_user_use_case: Arc::new(register_user_use_case),
        list_properties_use_case: Arc::new(list_properties_use_case),
        get_property_use_case: Arc::new(get_property_use_case),
        create_property_use_case: Arc::new(create_property_use_case),
        update_property_use_case: Arc::new(update_property_use_case),
        delete_property_use_case: Arc::new(delete_property_use_case),
        list_property_events_use_case: Arc::new(list_property_events_use_case),
        list_watchlist_use_case: Arc::new(list_watchlist_use_case),
        add_to_watchlist_use_case: Arc::new(add_to_watchlist_use_case),
        remove_from_watchlist_use_case: Arc::new(remove_from_watchlist_use_case),
    };

    let authenticate_arc: Arc<dyn IAuthenticateRequestUseCase + Send + Sync> =
        Arc::new(authenticate_use_case);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&authenticate_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Properties
    cfg.service(crate::property::adapter::incoming::web::routes::list_properties_handler);
    cfg.service(crate::property::adapter::incoming::web::routes::get_property_handler);
    cfg.service(crate::property::adapter::incoming::web::routes::create_property_handler);
    cfg.service(crate::property::adapter::incoming::web::routes::update_property_handler);
    cfg.service(crate::property::adapter::incoming::web::routes::delete_property_handler);
    // Property events
    cfg.service(crate::event::adapter::incoming::web::routes::get_property_events_handler);
    // Watchlists
    cfg.service(crate::watchlist::adapter::incoming::web::routes::list_watchlists_handler);
    cfg.service(crate::watchlist::adapter::incoming::web::routes::create_watchlist_handler);
    cfg.service(crate::watchlist::adapter::incoming::web::routes::delete_watchlist_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
