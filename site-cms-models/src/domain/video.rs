use crate::entities::video::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

use super::{default_true, Patch};

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewVideo {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 512, message = "video_url is required"))]
    pub video_url: String,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateVideo {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[validate(length(min = 1, max = 512))]
    pub video_url: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub thumbnail: Option<Option<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdateVideo {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            title,
            description,
            video_url,
            thumbnail,
            order_index,
            is_active,
        });
    }
}
