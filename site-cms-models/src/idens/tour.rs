use super::{created_at_col, order_index, unique_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Tour {
    Table,
    Id,
    Title,
    Slug,
    Description,
    ShortDescription,
    Price,
    Duration,
    Location,
    Images,
    Category,
    IsFeatured,
    IsActive,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Tour,
    name = "tour",
    order = super::INIT_TOUR_ORDER,
    create_table = create_tour_table,
    create_indexes = create_tour_indexes,
);

fn create_tour_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Tour::Table)
        .if_not_exists()
        .col(pk_auto(Tour::Id))
        .col(ColumnDef::new(Tour::Title).string_len(255).not_null())
        .col(
            ColumnDef::new(Tour::Slug)
                .string_len(255)
                .not_null()
                .comment("URL slug, unique"),
        )
        .col(ColumnDef::new(Tour::Description).text().null())
        .col(ColumnDef::new(Tour::ShortDescription).string_len(512).null())
        .col(ColumnDef::new(Tour::Price).double().null())
        .col(ColumnDef::new(Tour::Duration).string_len(64).null())
        .col(ColumnDef::new(Tour::Location).string_len(255).null())
        .col(
            ColumnDef::new(Tour::Images)
                .text()
                .null()
                .comment("JSON array of image URLs"),
        )
        .col(ColumnDef::new(Tour::Category).string_len(64).null())
        .col(
            ColumnDef::new(Tour::IsFeatured)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Tour::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Tour::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(created_at_col(Tour::CreatedAt))
        .col(updated_at_col(Tour::UpdatedAt))
        .to_owned()
}

fn create_tour_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        unique_index(Tour::Table, "tour", Tour::Slug, "slug"),
        order_index(Tour::Table, "tour", Tour::OrderIndex),
    ])
}
