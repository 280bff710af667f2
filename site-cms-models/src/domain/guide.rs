use crate::entities::guide::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

use super::{default_true, Patch};

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewGuide {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub languages: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateGuide {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub role: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub photo: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub languages: Option<Option<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdateGuide {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            name,
            role,
            bio,
            photo,
            languages,
            order_index,
            is_active,
        });
    }
}
