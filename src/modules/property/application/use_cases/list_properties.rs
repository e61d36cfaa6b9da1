use async_trait::async_trait;

use crate::property::application::domain::entities::Property;
use crate::property::application::ports::outgoing::property_query::{
    CursorPage, PropertyFilter, PropertyQuery,
};

pub const DEFAULT_LIMIT: u64 = 25;
pub const MAX_LIMIT: u64 = 100;

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Clone, Default)]
pub struct ListPropertiesRequest {
    pub property_type: Option<String>,
    pub min_bedrooms: Option<i32>,
    pub max_bedrooms: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PropertyListing {
    pub properties: Vec<Property>,
    /// The clamped limit actually applied, echoed in response metadata.
    pub limit: u64,
    pub next_cursor: Option<i64>,
}

#[derive(Debug, Clone)]
pub enum ListPropertiesError {
    QueryError(String),
}

impl std::fmt::Display for ListPropertiesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListPropertiesError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListPropertiesError {}

/// Absent or non-positive limits fall back to the default; oversized limits
/// clamp to the maximum. Never an error.
fn effective_limit(requested: Option<i64>) -> u64 {
    match requested {
        Some(limit) if limit > 0 => (limit as u64).min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// The cursor is the last-seen id. Anything that does not parse to a positive
/// id is treated as no cursor at all.
fn parse_cursor(cursor: Option<&str>) -> Option<i64> {
    cursor
        .and_then(|c| c.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

#[async_trait]
pub trait IListPropertiesUseCase: Send + Sync {
    async fn execute(
        &self,
        request: ListPropertiesRequest,
    ) -> Result<PropertyListing, ListPropertiesError>;
}

#[derive(Clone)]
pub struct ListPropertiesUseCase<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListPropertiesUseCase<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListPropertiesUseCase for ListPropertiesUseCase<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: ListPropertiesRequest,
    ) -> Result<PropertyListing, ListPropertiesError> {
        let limit = effective_limit(request.limit);

        let filter = PropertyFilter {
            property_type: request
                .property_type
                .filter(|t| !t.trim().is_empty()),
            min_bedrooms: request.min_bedrooms,
            max_bedrooms: request.max_bedrooms,
            min_price: request.min_price,
            max_price: request.max_price,
        };

        let page = CursorPage {
            limit,
            after: parse_cursor(request.cursor.as_deref()),
        };

        let result = self
            .query
            .list(&filter, &page)
            .await
            .map_err(ListPropertiesError::QueryError)?;

        Ok(PropertyListing {
            properties: result.properties,
            limit,
            next_cursor: result.next_cursor,
        })
    }
}
