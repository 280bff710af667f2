use super::{created_at_col, order_index, updated_at_col};
use crate::entities::navbar_item::ActiveModel;
use sea_orm::{DatabaseBackend, DeriveIden, Set};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum NavbarItem {
    Table,
    Id,
    Label,
    Href,
    Icon,
    OrderIndex,
    IsActive,
    IsExternal,
    Target,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    NavbarItem,
    name = "navbar_item",
    order = super::INIT_NAVBAR_ORDER,
    create_table = create_navbar_item_table,
    create_indexes = create_navbar_item_indexes,
    seed_data = get_navbar_item_seed_data,
);

fn create_navbar_item_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(NavbarItem::Table)
        .if_not_exists()
        .col(pk_auto(NavbarItem::Id))
        .col(ColumnDef::new(NavbarItem::Label).string_len(128).not_null())
        .col(ColumnDef::new(NavbarItem::Href).string_len(512).not_null())
        .col(ColumnDef::new(NavbarItem::Icon).string_len(128).null())
        .col(
            ColumnDef::new(NavbarItem::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(NavbarItem::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(NavbarItem::IsExternal)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(NavbarItem::Target)
                .string_len(16)
                .not_null()
                .default("_self"),
        )
        .col(created_at_col(NavbarItem::CreatedAt))
        .col(updated_at_col(NavbarItem::UpdatedAt))
        .to_owned()
}

fn create_navbar_item_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![order_index(
        NavbarItem::Table,
        "navbar_item",
        NavbarItem::OrderIndex,
    )])
}

fn get_navbar_item_seed_data() -> Vec<ActiveModel> {
    [
        ("Home", "#hero"),
        ("About", "#about"),
        ("Services", "#Services"),
        ("Gallery", "#gallery"),
        ("Contact", "#contact"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, href))| ActiveModel {
        label: Set(label.into()),
        href: Set(href.into()),
        order_index: Set(i as i32),
        is_active: Set(true),
        is_external: Set(false),
        target: Set("_self".into()),
        ..Default::default()
    })
    .collect()
}
