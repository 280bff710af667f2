use super::{created_at_col, order_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Achievement {
    Table,
    Id,
    Title,
    Value,
    Icon,
    Description,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Achievement,
    name = "achievement",
    order = super::INIT_ACHIEVEMENT_ORDER,
    create_table = create_achievement_table,
    create_indexes = create_achievement_indexes,
);

fn create_achievement_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Achievement::Table)
        .if_not_exists()
        .col(pk_auto(Achievement::Id))
        .col(ColumnDef::new(Achievement::Title).string_len(255).not_null())
        .col(ColumnDef::new(Achievement::Value).string_len(64).not_null())
        .col(ColumnDef::new(Achievement::Icon).string_len(128).null())
        .col(ColumnDef::new(Achievement::Description).text().null())
        .col(
            ColumnDef::new(Achievement::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Achievement::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(Achievement::CreatedAt))
        .col(updated_at_col(Achievement::UpdatedAt))
        .to_owned()
}

fn create_achievement_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(Achievement::Table, "achievement", Achievement::OrderIndex)])
}
