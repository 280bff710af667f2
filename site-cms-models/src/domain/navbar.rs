use crate::entities::navbar_item::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

use super::{default_true, Patch};

fn target_default() -> String {
    "_self".into()
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewNavbarItem {
    #[validate(length(min = 1, max = 128, message = "label is required"))]
    pub label: String,
    #[validate(length(min = 1, max = 512, message = "href is required"))]
    pub href: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default = "target_default")]
    pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateNavbarItem {
    #[validate(length(min = 1, max = 128))]
    pub label: Option<String>,
    #[validate(length(min = 1, max = 512))]
    pub href: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub icon: Option<Option<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
    pub is_external: Option<bool>,
    pub target: Option<String>,
}

impl Patch<ActiveModel> for UpdateNavbarItem {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            label,
            href,
            icon,
            order_index,
            is_active,
            is_external,
            target,
        });
    }
}
