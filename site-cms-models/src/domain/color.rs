use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `PUT /cms/colors/{key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpsertColor {
    #[validate(length(min = 1, max = 64, message = "color_value length must be 1..=64"))]
    pub color_value: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub color_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ColorEntry {
    #[validate(length(min = 1, max = 64, message = "color_key length must be 1..=64"))]
    pub color_key: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub upsert: UpsertColor,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkColors {
    #[validate(length(min = 1, message = "colors is required"), nested)]
    pub colors: Vec<ColorEntry>,
}
