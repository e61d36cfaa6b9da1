//! Default use-case stubs for route tests. Each panics if reached, so a test
//! only swaps in real doubles for the endpoints it actually exercises.

use async_trait::async_trait;

use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest, RegisteredUser,
};
use crate::event::application::domain::entities::PropertyEvent;
use crate::event::application::use_cases::list_property_events::{
    IListPropertyEventsUseCase, ListPropertyEventsError,
};
use crate::property::application::domain::entities::Property;
use crate::property::application::use_cases::create_property::{
    CreatePropertyError, ICreatePropertyUseCase, PropertyParams,
};
use crate::property::application::use_cases::delete_property::{
    DeletePropertyError, IDeletePropertyUseCase,
};
use crate::property::application::use_cases::get_property::{GetPropertyError, IGetPropertyUseCase};
use crate::property::application::use_cases::list_properties::{
    IListPropertiesUseCase, ListPropertiesError, ListPropertiesRequest, PropertyListing,
};
use crate::property::application::use_cases::update_property::{
    IUpdatePropertyUseCase, UpdatePropertyError,
};
use crate::watchlist::application::domain::entities::WatchedProperty;
use crate::watchlist::application::use_cases::add_to_watchlist::{
    AddToWatchlistError, IAddToWatchlistUseCase,
};
use crate::watchlist::application::use_cases::list_watchlist::{
    IListWatchlistUseCase, ListWatchlistError,
};
use crate::watchlist::application::use_cases::remove_from_watchlist::{
    IRemoveFromWatchlistUseCase, RemoveFromWatchlistError,
};

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisteredUser, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPropertiesUseCase;

#[async_trait]
impl IListPropertiesUseCase for StubListPropertiesUseCase {
    async fn execute(
        &self,
        _request: ListPropertiesRequest,
    ) -> Result<PropertyListing, ListPropertiesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPropertyUseCase;

#[async_trait]
impl IGetPropertyUseCase for StubGetPropertyUseCase {
    async fn execute(&self, _id: i64) -> Result<Property, GetPropertyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreatePropertyUseCase;

#[async_trait]
impl ICreatePropertyUseCase for StubCreatePropertyUseCase {
    async fn execute(&self, _params: PropertyParams) -> Result<Property, CreatePropertyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePropertyUseCase;

#[async_trait]
impl IUpdatePropertyUseCase for StubUpdatePropertyUseCase {
    async fn execute(
        &self,
        _id: i64,
        _params: PropertyParams,
    ) -> Result<Property, UpdatePropertyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePropertyUseCase;

#[async_trait]
impl IDeletePropertyUseCase for StubDeletePropertyUseCase {
    async fn execute(&self, _id: i64) -> Result<(), DeletePropertyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPropertyEventsUseCase;

#[async_trait]
impl IListPropertyEventsUseCase for StubListPropertyEventsUseCase {
    async fn execute(
        &self,
        _property_id: i64,
    ) -> Result<Vec<PropertyEvent>, ListPropertyEventsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListWatchlistUseCase;

#[async_trait]
impl IListWatchlistUseCase for StubListWatchlistUseCase {
    async fn execute(&self, _user_id: i64) -> Result<Vec<WatchedProperty>, ListWatchlistError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddToWatchlistUseCase;

#[async_trait]
impl IAddToWatchlistUseCase for StubAddToWatchlistUseCase {
    async fn execute(
        &self,
        _user_id: i64,
        _property_id: i64,
    ) -> Result<Property, AddToWatchlistError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveFromWatchlistUseCase;

#[async_trait]
impl IRemoveFromWatchlistUseCase for StubRemoveFromWatchlistUseCase {
    async fn execute(
        &self,
        _user_id: i64,
        _watchlist_id: i64,
    ) -> Result<(), RemoveFromWatchlistError> {
        unimplemented!("Not used in this test")
    }
}
