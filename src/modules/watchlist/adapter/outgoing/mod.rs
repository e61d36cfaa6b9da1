pub mod sea_orm_entity;
pub mod watchlist_repository_postgres;

pub use watchlist_repository_postgres::WatchlistRepositoryPostgres;
