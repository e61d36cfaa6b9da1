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
                    .table(WatchLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WatchLists::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WatchLists::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(WatchLists::PropertyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WatchLists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WatchLists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_lists_user")
                            .from(WatchLists::Table, WatchLists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_lists_property")
                            .from(WatchLists::Table, WatchLists::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One entry per (user, property); concurrent duplicate inserts are resolved here.
        manager
            .create_index(
                Index::create()
                    .name("idx_watch_lists_user_property")
                    .table(WatchLists::Table)
                    .col(WatchLists::UserId)
                    .col(WatchLists::PropertyId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatchLists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WatchLists {
    Table,
    Id,
    UserId,
    PropertyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
