pub mod create_property;
pub mod delete_property;
pub mod get_property;
pub mod list_properties;
pub mod update_property;
