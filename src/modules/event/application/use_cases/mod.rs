pub mod list_property_events;
