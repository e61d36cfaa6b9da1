use crate::property::application::domain::entities::Property;

/// A property on a user's watchlist, annotated with the entry id the client
/// needs to remove it later.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedProperty {
    pub watchlist_id: i64,
    pub property: Property,
}
