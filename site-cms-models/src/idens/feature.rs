use super::{created_at_col, order_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Feature {
    Table,
    Id,
    Title,
    Description,
    Icon,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Feature,
    name = "feature",
    order = super::INIT_FEATURE_ORDER,
    create_table = create_feature_table,
    create_indexes = create_feature_indexes,
);

fn create_feature_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Feature::Table)
        .if_not_exists()
        .col(pk_auto(Feature::Id))
        .col(ColumnDef::new(Feature::Title).string_len(255).not_null())
        .col(ColumnDef::new(Feature::Description).text().null())
        .col(ColumnDef::new(Feature::Icon).string_len(128).null())
        .col(
            ColumnDef::new(Feature::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Feature::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(Feature::CreatedAt))
        .col(updated_at_col(Feature::UpdatedAt))
        .to_owned()
}

fn create_feature_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(Feature::Table, "feature", Feature::OrderIndex)])
}
