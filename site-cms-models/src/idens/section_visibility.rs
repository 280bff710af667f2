//! Section ordering table.
//!
//! Deliberately left empty by the migration: the default sections are
//! inserted on first read.

use super::{created_at_col, order_index, unique_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum SectionVisibility {
    Table,
    Id,
    SectionKey,
    SectionName,
    Visible,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    SectionVisibility,
    name = "section_visibility",
    order = super::INIT_SECTION_ORDER,
    create_table = create_section_visibility_table,
    create_indexes = create_section_visibility_indexes,
);

fn create_section_visibility_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(SectionVisibility::Table)
        .if_not_exists()
        .col(pk_auto(SectionVisibility::Id))
        .col(
            ColumnDef::new(SectionVisibility::SectionKey)
                .string_len(64)
                .not_null()
                .comment("Section key"),
        )
        .col(
            ColumnDef::new(SectionVisibility::SectionName)
                .string_len(128)
                .not_null(),
        )
        .col(
            ColumnDef::new(SectionVisibility::Visible)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(SectionVisibility::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(created_at_col(SectionVisibility::CreatedAt))
        .col(updated_at_col(SectionVisibility::UpdatedAt))
        .to_owned()
}

fn create_section_visibility_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        unique_index(
            SectionVisibility::Table,
            "section_visibility",
            SectionVisibility::SectionKey,
            "section_key",
        ),
        order_index(
            SectionVisibility::Table,
            "section_visibility",
            SectionVisibility::OrderIndex,
        ),
    ])
}
