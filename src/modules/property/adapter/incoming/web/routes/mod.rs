pub mod create_property;
pub mod delete_property;
pub mod get_property;
pub mod list_properties;
pub mod update_property;

// Glob re-exports keep the utoipa-generated path items visible to ApiDoc.
pub use create_property::*;
pub use delete_property::*;
pub use get_property::*;
pub use list_properties::*;
pub use update_property::*;
