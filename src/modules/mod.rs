pub mod auth;
pub mod event;
pub mod property;
pub mod watchlist;
