//! Typed site settings, seeded with the identity keys the public site expects.

use super::{created_at_col, unique_index, updated_at_col};
use crate::entities::site_setting::ActiveModel;
use sea_orm::{DatabaseBackend, DeriveIden, Set};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum SiteSetting {
    Table,
    Id,
    SettingKey,
    SettingValue,
    SettingType,
    Category,
    Description,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    SiteSetting,
    name = "site_setting",
    order = super::INIT_SETTING_ORDER,
    create_table = create_site_setting_table,
    create_indexes = create_site_setting_indexes,
    seed_data = get_site_setting_seed_data,
);

fn create_site_setting_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(SiteSetting::Table)
        .if_not_exists()
        .col(pk_auto(SiteSetting::Id))
        .col(
            ColumnDef::new(SiteSetting::SettingKey)
                .string_len(128)
                .not_null()
                .comment("Setting key"),
        )
        .col(
            ColumnDef::new(SiteSetting::SettingValue)
                .text()
                .null()
                .comment("Raw value, decoded per setting_type"),
        )
        .col(
            ColumnDef::new(SiteSetting::SettingType)
                .string_len(16)
                .not_null()
                .default("text")
                .comment("boolean | number | json | text"),
        )
        .col(ColumnDef::new(SiteSetting::Category).string_len(64).null())
        .col(ColumnDef::new(SiteSetting::Description).text().null())
        .col(created_at_col(SiteSetting::CreatedAt))
        .col(updated_at_col(SiteSetting::UpdatedAt))
        .to_owned()
}

fn create_site_setting_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![unique_index(
        SiteSetting::Table,
        "site_setting",
        SiteSetting::SettingKey,
        "setting_key",
    )])
}

fn get_site_setting_seed_data() -> Vec<ActiveModel> {
    [
        ("site_name", "Site CMS", "text", "general"),
        ("site_tagline", "", "text", "general"),
        ("contact_email", "", "text", "contact"),
        ("contact_phone", "", "text", "contact"),
        ("contact_address", "", "text", "contact"),
        ("maintenance_mode", "false", "boolean", "general"),
    ]
    .into_iter()
    .map(|(key, value, kind, category)| ActiveModel {
        setting_key: Set(key.into()),
        setting_value: Set(Some(value.into())),
        setting_type: Set(kind.into()),
        category: Set(Some(category.into())),
        ..Default::default()
    })
    .collect()
}
