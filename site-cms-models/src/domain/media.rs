use crate::entities::media_library::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

/// Registers an already hosted file. Uploading the bytes is not handled here.
#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewMedia {
    #[validate(length(min = 1, max = 255, message = "filename is required"))]
    pub filename: String,
    pub original_name: Option<String>,
    #[validate(length(min = 1, max = 512, message = "url is required"))]
    pub url: String,
    pub mime_type: Option<String>,
    #[validate(range(min = 0))]
    pub size: Option<i64>,
    pub alt_text: Option<String>,
}
