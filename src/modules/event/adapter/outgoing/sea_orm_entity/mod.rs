pub mod property_events;
