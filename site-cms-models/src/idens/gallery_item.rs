use super::{created_at_col, media_library::MediaLibrary, order_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum GalleryItem {
    Table,
    Id,
    MediaId,
    Title,
    Description,
    Category,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    GalleryItem,
    name = "gallery_item",
    order = super::INIT_GALLERY_ORDER,
    create_table = create_gallery_item_table,
    create_indexes = create_gallery_item_indexes,
);

fn create_gallery_item_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(GalleryItem::Table)
        .if_not_exists()
        .col(pk_auto(GalleryItem::Id))
        .col(
            ColumnDef::new(GalleryItem::MediaId)
                .integer()
                .not_null()
                .comment("media_library.id"),
        )
        .col(ColumnDef::new(GalleryItem::Title).string_len(255).null())
        .col(ColumnDef::new(GalleryItem::Description).text().null())
        .col(ColumnDef::new(GalleryItem::Category).string_len(64).null())
        .col(
            ColumnDef::new(GalleryItem::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(GalleryItem::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(GalleryItem::CreatedAt))
        .col(updated_at_col(GalleryItem::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_gallery_item_media_id")
                .from(GalleryItem::Table, GalleryItem::MediaId)
                .to(MediaLibrary::Table, MediaLibrary::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_gallery_item_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(
        GalleryItem::Table,
        "gallery_item",
        GalleryItem::OrderIndex,
    )])
}
