use super::{created_at_col, order_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Video {
    Table,
    Id,
    Title,
    Description,
    VideoUrl,
    Thumbnail,
    OrderIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Video,
    name = "video",
    order = super::INIT_VIDEO_ORDER,
    create_table = create_video_table,
    create_indexes = create_video_indexes,
);

fn create_video_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Video::Table)
        .if_not_exists()
        .col(pk_auto(Video::Id))
        .col(ColumnDef::new(Video::Title).string_len(255).not_null())
        .col(ColumnDef::new(Video::Description).text().null())
        .col(ColumnDef::new(Video::VideoUrl).string_len(512).not_null())
        .col(ColumnDef::new(Video::Thumbnail).string_len(512).null())
        .col(
            ColumnDef::new(Video::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Video::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(created_at_col(Video::CreatedAt))
        .col(updated_at_col(Video::UpdatedAt))
        .to_owned()
}

fn create_video_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(Video::Table, "video", Video::OrderIndex)])
}
