use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
};
use crate::event::application::use_cases::list_property_events::IListPropertyEventsUseCase;
use crate::property::application::use_cases::{
    create_property::ICreatePropertyUseCase, delete_property::IDeletePropertyUseCase,
    get_property::IGetPropertyUseCase, list_properties::IListPropertiesUseCase,
    update_property::IUpdatePropertyUseCase,
};
use crate::tests::support::stubs::*;
use crate::watchlist::application::use_cases::{
    add_to_watchlist::IAddToWatchlistUseCase, list_watchlist::IListWatchlistUseCase,
    remove_from_watchlist::IRemoveFromWatchlistUseCase,
};
use crate::AppState;

/// Builds an `AppState` seeded with panicking stubs; tests override only the
/// use cases their route touches.
pub struct TestAppStateBuilder {
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    list_properties: Arc<dyn IListPropertiesUseCase + Send + Sync>,
    get_property: Arc<dyn IGetPropertyUseCase + Send + Sync>,
    create_property: Arc<dyn ICreatePropertyUseCase + Send + Sync>,
    update_property: Arc<dyn IUpdatePropertyUseCase + Send + Sync>,
    delete_property: Arc<dyn IDeletePropertyUseCase + Send + Sync>,
    list_property_events: Arc<dyn IListPropertyEventsUseCase + Send + Sync>,
    list_watchlist: Arc<dyn IListWatchlistUseCase + Send + Sync>,
    add_to_watchlist: Arc<dyn IAddToWatchlistUseCase + Send + Sync>,
    remove_from_watchlist: Arc<dyn IRemoveFromWatchlistUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(StubLoginUserUseCase),
            register_user: Arc::new(StubRegisterUserUseCase),
            list_properties: Arc::new(StubListPropertiesUseCase),
            get_property: Arc::new(StubGetPropertyUseCase),
            create_property: Arc::new(StubCreatePropertyUseCase),
            update_property: Arc::new(StubUpdatePropertyUseCase),
            delete_property: Arc::new(StubDeletePropertyUseCase),
            list_property_events: Arc::new(StubListPropertyEventsUseCase),
            list_watchlist: Arc::new(StubListWatchlistUseCase),
            add_to_watchlist: Arc::new(StubAddToWatchlistUseCase),
            remove_from_watchlist: Arc::new(StubRemoveFromWatchlistUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_list_properties(mut self, uc: impl IListPropertiesUseCase + 'static) -> Self {
        self.list_properties = Arc::new(uc);
        self
    }

    pub fn with_get_property(mut self, uc: impl IGetPropertyUseCase + 'static) -> Self {
        self.get_property = Arc::new(uc);
        self
    }

    pub fn with_create_property(mut self, uc: impl ICreatePropertyUseCase + 'static) -> Self {
        self.create_property = Arc::new(uc);
        self
    }

    pub fn with_update_property(mut self, uc: impl IUpdatePropertyUseCase + 'static) -> Self {
        self.update_property = Arc::new(uc);
        self
    }

    pub fn with_delete_property(mut self, uc: impl IDeletePropertyUseCase + 'static) -> Self {
        self.delete_property = Arc::new(uc);
        self
    }

    pub fn with_list_property_events(
        mut self,
        uc: impl IListPropertyEventsUseCase + 'static,
    ) -> Self {
        self.list_property_events = Arc::new(uc);
        self
    }

    pub fn with_list_watchlist(mut self, uc: impl IListWatchlistUseCase + 'static) -> Self {
        self.list_watchlist = Arc::new(uc);
        self
    }

    pub fn with_add_to_watchlist(mut self, uc: impl IAddToWatchlistUseCase + 'static) -> Self {
        self.add_to_watchlist = Arc::new(uc);
        self
    }

    pub fn with_remove_from_watchlist(
        mut self,
        uc: impl IRemoveFromWatchlistUseCase + 'static,
    ) -> Self {
        self.remove_from_watchlist = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user_use_case: self.login_user,
            register_user_use_case: self.register_user,
            list_properties_use_case: self.list_properties,
            get_property_use_case: self.get_property,
            create_property_use_case: self.create_property,
            update_property_use_case: self.update_property,
            delete_property_use_case: self.delete_property,
            list_property_events_use_case: self.list_property_events,
            list_watchlist_use_case: self.list_watchlist,
            add_to_watchlist_use_case: self.add_to_watchlist,
            remove_from_watchlist_use_case: self.remove_from_watchlist,
        })
    }
}
