use super::{created_at_col, unique_index, updated_at_col};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

/// Administrators are not seeded here: the app context bootstraps the first
/// account from settings so the password never lands in a migration.
#[derive(DeriveIden)]
pub enum Admin {
    Table,
    Id,
    Username,
    PasswordHash,
    Email,
    FullName,
    Role,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

cms_initializer!(
    Admin,
    name = "admin",
    order = super::INIT_ADMIN_ORDER,
    create_table = create_admin_table,
    create_indexes = create_admin_indexes,
);

fn create_admin_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Admin::Table)
        .if_not_exists()
        .col(pk_auto(Admin::Id))
        .col(
            ColumnDef::new(Admin::Username)
                .string_len(64)
                .not_null()
                .comment("Login name"),
        )
        .col(
            ColumnDef::new(Admin::PasswordHash)
                .string_len(128)
                .not_null()
                .comment("bcrypt hash"),
        )
        .col(ColumnDef::new(Admin::Email).string_len(255).null())
        .col(ColumnDef::new(Admin::FullName).string_len(128).null())
        .col(
            ColumnDef::new(Admin::Role)
                .string_len(32)
                .not_null()
                .default("admin"),
        )
        .col(
            ColumnDef::new(Admin::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(ColumnDef::new(Admin::LastLogin).timestamp().null())
        .col(created_at_col(Admin::CreatedAt))
        .col(updated_at_col(Admin::UpdatedAt))
        .to_owned()
}

fn create_admin_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![unique_index(
        Admin::Table,
        "admin",
        Admin::Username,
        "username",
    )])
}
