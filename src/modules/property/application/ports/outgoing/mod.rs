pub mod property_query;
pub mod property_repository;

pub use property_query::{CursorPage, PropertyFilter, PropertyPage, PropertyQuery};
pub use property_repository::{
    NewProperty, PropertyChanges, PropertyRepository, PropertyRepositoryError,
};
