use crate::entities::partner::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

use super::{default_true, Patch};

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewPartner {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    pub logo: Option<String>,
    #[validate(url(message = "website must be a URL"))]
    pub website: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdatePartner {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub logo: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub website: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdatePartner {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            name,
            logo,
            website,
            description,
            order_index,
            is_active,
        });
    }
}
