use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(integer(Property::HostId))
                    .col(string_len(Property::Title, 200))
                    .col(text(Property::Description))
                    .col(string_len(Property::Address, 500))
                    .col(string_len(Property::City, 100))
                    .col(string_len(Property::State, 100))
                    .col(string_len(Property::Country, 100))
                    .col(string_len(Property::ZipCode, 20))
                    .col(string_len(Property::PropertyType, 20))
                    .col(string_len(Property::RoomType, 20))
                    .col(decimal_len(Property::PricePerNight, 10, 2))
                    .col(integer(Property::MaxGuests))
                    .col(integer(Property::Bedrooms))
                    .col(integer(Property::Bathrooms))
                    .col(json(Property::Amenities))
                    .col(decimal_len_null(Property::Latitude, 9, 6))
                    .col(decimal_len_null(Property::Longitude, 9, 6))
                    .col(boolean(Property::IsAvailable).default(true))
                    .col(boolean(Property::IsFeatured).default(false))
                    .col(
                        timestamp(Property::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Property::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_host_id")
                            .from(Property::Table, Property::HostId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_city")
                    .table(Property::Table)
                    .col(Property::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    HostId,
    Title,
    Description,
    Address,
    City,
    State,
    Country,
    ZipCode,
    PropertyType,
    RoomType,
    PricePerNight,
    MaxGuests,
    Bedrooms,
    Bathrooms,
    Amenities,
    Latitude,
    Longitude,
    IsAvailable,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}
