use sea_orm_migration::prelude::*;

use crate::m20250810_000002_create_properties_table::Properties;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PropertyEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PropertyEvents::PropertyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PropertyEvents::EventType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PropertyEvents::Data).json_binary())
                    .col(
                        ColumnDef::new(PropertyEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PropertyEvents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_events_property")
                            .from(PropertyEvents::Table, PropertyEvents::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // History is served newest-first per property.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_property_events_property_created_at
                ON property_events (property_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PropertyEvents {
    Table,
    Id,
    PropertyId,
    EventType,
    Data,
    CreatedAt,
    UpdatedAt,
}
