use super::{created_at_col, order_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Partner {
    Table,
    Id,
    Name,
    Logo,
    Website,
    Description,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Partner,
    name = "partner",
    order = super::INIT_PARTNER_ORDER,
    create_table = create_partner_table,
    create_indexes = create_partner_indexes,
);

fn create_partner_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Partner::Table)
        .if_not_exists()
        .col(pk_auto(Partner::Id))
        .col(ColumnDef::new(Partner::Name).string_len(255).not_null())
        .col(ColumnDef::new(Partner::Logo).string_len(512).null())
        .col(ColumnDef::new(Partner::Website).string_len(512).null())
        .col(ColumnDef::new(Partner::Description).text().null())
        .col(
            ColumnDef::new(Partner::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Partner::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(Partner::CreatedAt))
        .col(updated_at_col(Partner::UpdatedAt))
        .to_owned()
}

fn create_partner_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(Partner::Table, "partner", Partner::OrderIndex)])
}
