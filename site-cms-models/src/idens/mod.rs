use sea_orm_migration::prelude::*;

/// Implements [`CmsInitializer`](crate::initializer::CmsInitializer) for a `DeriveIden` enum.
///
/// Every table carries `created_at`/`updated_at`, so `has_update_col` is always true.
macro_rules! cms_initializer {
    (
        $iden:ident,
        name = $name:literal,
        order = $order:expr,
        create_table = $create:path
        $(, create_indexes = $indexes:path)?
        $(, seed_data = $seed:path)?
        $(,)?
    ) => {
        #[::async_trait::async_trait]
        impl $crate::initializer::CmsInitializer for $iden {
            fn order(&self) -> i32 {
                $order
            }

            fn name(&self) -> &str {
                $name
            }

            fn has_update_col(&self) -> bool {
                true
            }

            fn to_create_table_stmt(
                &self,
                backend: ::sea_orm::DatabaseBackend,
            ) -> ::sea_orm::sea_query::TableCreateStatement {
                $create(backend)
            }

            fn to_drop_table_stmt(
                &self,
                _: ::sea_orm::DatabaseBackend,
            ) -> ::sea_orm::sea_query::TableDropStatement {
                ::sea_orm_migration::prelude::Table::drop()
                    .table($iden::Table)
                    .if_exists()
                    .to_owned()
            }

            fn to_create_indexes_stmt(
                &self,
                backend: ::sea_orm::DatabaseBackend,
            ) -> Option<Vec<::sea_orm::sea_query::IndexCreateStatement>> {
                cms_initializer!(@indexes backend $(, $indexes)?)
            }

            async fn seeding_data(
                &self,
                transaction: &::sea_orm::DatabaseTransaction,
            ) -> Result<(), ::sea_orm::DbErr> {
                cms_initializer!(@seed transaction $(, $seed)?)
            }
        }
    };
    (@indexes $backend:ident) => {{
        let _ = $backend;
        None
    }};
    (@indexes $backend:ident, $indexes:path) => {
        $indexes($backend)
    };
    (@seed $transaction:ident) => {{
        let _ = $transaction;
        Ok(())
    }};
    (@seed $transaction:ident, $seed:path) => {
        $crate::initializer::insert_seed_rows($transaction, $seed()).await
    };
}

pub mod achievement;
pub mod admin;
pub mod feature;
pub mod gallery_item;
pub mod guide;
pub mod hero_section;
pub mod media_library;
pub mod navbar_item;
pub mod partner;
pub mod section_style;
pub mod section_visibility;
pub mod site_content;
pub mod site_setting;
pub mod testimonial;
pub mod theme_color;
pub mod tour;
pub mod video;

const INIT_SYSTEM_ORDER: i32 = 0;
const INIT_ADMIN_ORDER: i32 = INIT_SYSTEM_ORDER + 1;

const INIT_CMS_ORDER: i32 = 10;
const INIT_SETTING_ORDER: i32 = INIT_CMS_ORDER + 1;
const INIT_CONTENT_ORDER: i32 = INIT_SETTING_ORDER + 1;
const INIT_COLOR_ORDER: i32 = INIT_CONTENT_ORDER + 1;
const INIT_FEATURE_ORDER: i32 = INIT_COLOR_ORDER + 1;
const INIT_HERO_ORDER: i32 = INIT_FEATURE_ORDER + 1;
const INIT_SECTION_ORDER: i32 = INIT_HERO_ORDER + 1;
const INIT_STYLE_ORDER: i32 = INIT_SECTION_ORDER + 1;
const INIT_NAVBAR_ORDER: i32 = INIT_STYLE_ORDER + 1;

const INIT_MEDIA_ORDER: i32 = 100;
const INIT_GALLERY_ORDER: i32 = INIT_MEDIA_ORDER + 1;

const INIT_RESOURCE_ORDER: i32 = 200;
const INIT_TOUR_ORDER: i32 = INIT_RESOURCE_ORDER + 1;
const INIT_GUIDE_ORDER: i32 = INIT_TOUR_ORDER + 1;
const INIT_PARTNER_ORDER: i32 = INIT_GUIDE_ORDER + 1;
const INIT_VIDEO_ORDER: i32 = INIT_PARTNER_ORDER + 1;
const INIT_ACHIEVEMENT_ORDER: i32 = INIT_VIDEO_ORDER + 1;
const INIT_TESTIMONIAL_ORDER: i32 = INIT_ACHIEVEMENT_ORDER + 1;

/// `created_at` column defaulting to the insert time.
fn created_at_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp()
        .default(Expr::current_timestamp())
        .comment("Created at")
        .to_owned()
}

/// `updated_at` column, refreshed by the SQLite trigger created in the migration.
fn updated_at_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp()
        .default(Expr::current_timestamp())
        .comment("Updated at")
        .to_owned()
}

/// Unique index named `uk_<table>_<column>`.
fn unique_index<T, C>(table: T, table_name: &str, col: C, col_name: &str) -> IndexCreateStatement
where
    T: IntoTableRef + 'static,
    C: IntoIndexColumn,
{
    Index::create()
        .name(format!("uk_{table_name}_{col_name}"))
        .table(table)
        .col(col)
        .unique()
        .to_owned()
}

/// Non-unique index used for the `order_index` listings.
fn order_index<T, C>(table: T, table_name: &str, col: C) -> IndexCreateStatement
where
    T: IntoTableRef + 'static,
    C: IntoIndexColumn,
{
    Index::create()
        .name(format!("idx_{table_name}_order_index"))
        .table(table)
        .col(col)
        .to_owned()
}
