use crate::entities::hero_section::ActiveModel;
use serde::Deserialize;
use validator::Validate;

use super::Patch;

/// Id of the singleton hero row.
pub const HERO_ID: i32 = 1;

/// Partial update of the hero banner. `null` clears a field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateHero {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub subtitle: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub background_image: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub background_video: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cta_text: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cta_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub secondary_cta_text: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub secondary_cta_link: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdateHero {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            title,
            subtitle,
            description,
            background_image,
            background_video,
            cta_text,
            cta_link,
            secondary_cta_text,
            secondary_cta_link,
            is_active,
        });
    }
}
