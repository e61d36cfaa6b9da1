pub mod event_query_postgres;
pub mod sea_orm_entity;

pub use event_query_postgres::EventQueryPostgres;
