use super::{created_at_col, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum MediaLibrary {
    Table,
    Id,
    Filename,
    OriginalName,
    Url,
    MimeType,
    Size,
    AltText,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    MediaLibrary,
    name = "media_library",
    order = super::INIT_MEDIA_ORDER,
    create_table = create_media_library_table,
);

fn create_media_library_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(MediaLibrary::Table)
        .if_not_exists()
        .col(pk_auto(MediaLibrary::Id))
        .col(ColumnDef::new(MediaLibrary::Filename).string_len(255).not_null())
        .col(ColumnDef::new(MediaLibrary::OriginalName).string_len(255).null())
        .col(
            ColumnDef::new(MediaLibrary::Url)
                .string_len(512)
                .not_null()
                .comment("Public URL"),
        )
        .col(ColumnDef::new(MediaLibrary::MimeType).string_len(128).null())
        .col(ColumnDef::new(MediaLibrary::Size).big_integer().null())
        .col(ColumnDef::new(MediaLibrary::AltText).string_len(255).null())
        .col(created_at_col(MediaLibrary::CreatedAt))
        .col(updated_at_col(MediaLibrary::UpdatedAt))
        .to_owned()
}
