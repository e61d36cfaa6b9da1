pub mod add_to_watchlist;
pub mod list_watchlist;
pub mod remove_from_watchlist;
