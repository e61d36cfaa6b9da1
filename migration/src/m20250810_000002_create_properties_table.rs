use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Properties::Description).text())
                    .col(ColumnDef::new(Properties::Price).big_integer().not_null())
                    .col(ColumnDef::new(Properties::Bedrooms).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::PropertyType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Status).string_len(50).not_null())
                    .col(ColumnDef::new(Properties::Latitude).double())
                    .col(ColumnDef::new(Properties::Longitude).double())
                    .col(ColumnDef::new(Properties::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Filter columns used by the listing endpoint.
        for (name, col) in [
            ("idx_properties_price", Properties::Price),
            ("idx_properties_bedrooms", Properties::Bedrooms),
            ("idx_properties_property_type", Properties::PropertyType),
            ("idx_properties_status", Properties::Status),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Properties::Table)
                        .col(col)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Properties {
    Table,
    Id,
    Title,
    Description,
    Price,
    Bedrooms,
    PropertyType,
    Status,
    Latitude,
    Longitude,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
