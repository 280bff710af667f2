use crate::entities::gallery_item::{ActiveModel, Model as GalleryItemModel};
use chrono::{DateTime, Utc};
use sea_orm::DeriveIntoActiveModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, Patch};

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewGalleryItem {
    #[validate(range(min = 1, message = "media_id is required"))]
    pub media_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateGalleryItem {
    #[validate(range(min = 1))]
    pub media_id: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdateGalleryItem {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            media_id,
            title,
            description,
            category,
            order_index,
            is_active,
        });
    }
}

/// Gallery entry joined with the URL of its media file.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryItemInfo {
    pub id: i32,
    pub media_id: i32,
    pub url: Option<String>,
    pub alt_text: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl GalleryItemInfo {
    pub fn new(item: GalleryItemModel, url: Option<String>, alt_text: Option<String>) -> Self {
        GalleryItemInfo {
            id: item.id,
            media_id: item.media_id,
            url,
            alt_text,
            title: item.title,
            description: item.description,
            category: item.category,
            order_index: item.order_index,
            is_active: item.is_active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
