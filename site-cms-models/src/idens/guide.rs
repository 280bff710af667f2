use super::{created_at_col, order_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Guide {
    Table,
    Id,
    Name,
    Role,
    Bio,
    Photo,
    Languages,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Guide,
    name = "guide",
    order = super::INIT_GUIDE_ORDER,
    create_table = create_guide_table,
    create_indexes = create_guide_indexes,
);

fn create_guide_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Guide::Table)
        .if_not_exists()
        .col(pk_auto(Guide::Id))
        .col(ColumnDef::new(Guide::Name).string_len(255).not_null())
        .col(ColumnDef::new(Guide::Role).string_len(128).null())
        .col(ColumnDef::new(Guide::Bio).text().null())
        .col(ColumnDef::new(Guide::Photo).string_len(512).null())
        .col(ColumnDef::new(Guide::Languages).string_len(255).null())
        .col(
            ColumnDef::new(Guide::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Guide::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(Guide::CreatedAt))
        .col(updated_at_col(Guide::UpdatedAt))
        .to_owned()
}

fn create_guide_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(Guide::Table, "guide", Guide::OrderIndex)])
}
