pub mod create_watchlist;
pub mod delete_watchlist;
pub mod list_watchlists;

// Glob re-exports keep the utoipa-generated path items visible to ApiDoc.
pub use create_watchlist::*;
pub use delete_watchlist::*;
pub use list_watchlists::*;
