use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `PUT /cms/content/{key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpsertContent {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub content_value: Option<Option<String>>,
    #[validate(length(min = 1, max = 16))]
    pub content_type: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub section: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContentEntry {
    #[validate(length(min = 1, max = 128, message = "content_key length must be 1..=128"))]
    pub content_key: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub upsert: UpsertContent,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkContent {
    #[validate(length(min = 1, message = "content is required"), nested)]
    pub content: Vec<ContentEntry>,
}
