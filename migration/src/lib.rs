pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_users_table;
mod m20250810_000002_create_properties_table;
mod m20250810_000003_create_property_images_table;
mod m20250810_000004_create_property_events_table;
mod m20250810_000005_create_watch_lists_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_users_table::Migration),
            Box::new(m20250810_000002_create_properties_table::Migration),
            Box::new(m20250810_000003_create_property_images_table::Migration),
            Box::new(m20250810_000004_create_property_events_table::Migration),
            Box::new(m20250810_000005_create_watch_lists_table::Migration),
        ]
    }
}
