use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_property_table::Property;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyImage::Table)
                    .if_not_exists()
                    .col(pk_auto(PropertyImage::Id))
                    .col(integer(PropertyImage::PropertyId))
                    .col(string(PropertyImage::Url))
                    .col(string_len(PropertyImage::Caption, 200))
                    .col(boolean(PropertyImage::IsPrimary).default(false))
                    .col(
                        timestamp(PropertyImage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_image_property_id")
                            .from(PropertyImage::Table, PropertyImage::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PropertyImage {
    Table,
    Id,
    PropertyId,
    Url,
    Caption,
    IsPrimary,
    CreatedAt,
}
