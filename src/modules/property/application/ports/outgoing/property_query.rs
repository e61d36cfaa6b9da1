use async_trait::async_trait;

use crate::property::application::domain::entities::Property;

/// Listing filters; omitted fields impose no constraint, supplied ones are
/// ANDed with inclusive bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub property_type: Option<String>,
    pub min_bedrooms: Option<i32>,
    pub max_bedrooms: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

/// A page request: rows with id strictly greater than `after`, ascending id.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage {
    pub limit: u64,
    pub after: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPage {
    pub properties: Vec<Property>,
    /// Present only when the page is full and a further matching row exists.
    pub next_cursor: Option<i64>,
}

#[async_trait]
pub trait PropertyQuery {
    async fn list(&self, filter: &PropertyFilter, page: &CursorPage)
        -> Result<PropertyPage, String>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Property>, String>;
}
