use super::{created_at_col, unique_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum SiteContent {
    Table,
    Id,
    ContentKey,
    ContentValue,
    ContentType,
    Section,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    SiteContent,
    name = "site_content",
    order = super::INIT_CONTENT_ORDER,
    create_table = create_site_content_table,
    create_indexes = create_site_content_indexes,
);

fn create_site_content_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(SiteContent::Table)
        .if_not_exists()
        .col(pk_auto(SiteContent::Id))
        .col(
            ColumnDef::new(SiteContent::ContentKey)
                .string_len(128)
                .not_null()
                .comment("Content key"),
        )
        .col(ColumnDef::new(SiteContent::ContentValue).text().null())
        .col(
            ColumnDef::new(SiteContent::ContentType)
                .string_len(16)
                .not_null()
                .default("text"),
        )
        .col(
            ColumnDef::new(SiteContent::Section)
                .string_len(64)
                .null()
                .comment("Owning section key"),
        )
        .col(created_at_col(SiteContent::CreatedAt))
        .col(updated_at_col(SiteContent::UpdatedAt))
        .to_owned()
}

fn create_site_content_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![unique_index(
        SiteContent::Table,
        "site_content",
        SiteContent::ContentKey,
        "content_key",
    )])
}
