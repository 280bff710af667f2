use crate::entities::feature::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

use super::{default_true, Patch};

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewFeature {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateFeature {
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub icon: Option<Option<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdateFeature {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model { title, description, icon, order_index, is_active });
    }
}
