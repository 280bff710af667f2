use super::{created_at_col, unique_index, updated_at_col};
use crate::entities::theme_color::ActiveModel;
use sea_orm::{DatabaseBackend, DeriveIden, Set};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum ThemeColor {
    Table,
    Id,
    ColorKey,
    ColorValue,
    ColorName,
    Category,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    ThemeColor,
    name = "theme_color",
    order = super::INIT_COLOR_ORDER,
    create_table = create_theme_color_table,
    create_indexes = create_theme_color_indexes,
    seed_data = get_theme_color_seed_data,
);

fn create_theme_color_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(ThemeColor::Table)
        .if_not_exists()
        .col(pk_auto(ThemeColor::Id))
        .col(
            ColumnDef::new(ThemeColor::ColorKey)
                .string_len(64)
                .not_null()
                .comment("Color key"),
        )
        .col(
            ColumnDef::new(ThemeColor::ColorValue)
                .string_len(64)
                .not_null()
                .comment("CSS color"),
        )
        .col(ColumnDef::new(ThemeColor::ColorName).string_len(128).null())
        .col(ColumnDef::new(ThemeColor::Category).string_len(64).null())
        .col(created_at_col(ThemeColor::CreatedAt))
        .col(updated_at_col(ThemeColor::UpdatedAt))
        .to_owned()
}

fn create_theme_color_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![unique_index(
        ThemeColor::Table,
        "theme_color",
        ThemeColor::ColorKey,
        "color_key",
    )])
}

fn get_theme_color_seed_data() -> Vec<ActiveModel> {
    [
        ("primary", "#1e40af", "Primary"),
        ("secondary", "#f59e0b", "Secondary"),
        ("accent", "#10b981", "Accent"),
        ("background", "#ffffff", "Background"),
        ("text", "#111827", "Text"),
    ]
    .into_iter()
    .map(|(key, value, name)| ActiveModel {
        color_key: Set(key.into()),
        color_value: Set(value.into()),
        color_name: Set(Some(name.into())),
        category: Set(Some("brand".into())),
        ..Default::default()
    })
    .collect()
}
