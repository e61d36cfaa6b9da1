pub mod get_property_events;

// Glob re-export keeps the utoipa-generated path item visible to ApiDoc.
pub use get_property_events::*;
