pub mod event_query;

pub use event_query::{EventQuery, EventQueryError};
