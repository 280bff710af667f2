//! `SeaORM` Entity for registered media files.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "media_library")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub filename: String,
    pub original_name: Option<String>,
    pub url: String,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub alt_text: Option<String>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gallery_item::Entity")]
    GalleryItem,
}

impl Related<super::gallery_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GalleryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
