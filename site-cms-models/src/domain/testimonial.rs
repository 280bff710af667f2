use crate::entities::testimonial::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

use super::{default_true, Patch};

fn rating_default() -> i32 {
    5
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
pub struct NewTestimonial {
    #[validate(length(min = 1, max = 255, message = "customer_name is required"))]
    pub customer_name: String,
    pub customer_location: Option<String>,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "rating must be 1..=5"))]
    #[serde(default = "rating_default")]
    pub rating: i32,
    pub avatar: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 255))]
    pub customer_name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub customer_location: Option<Option<String>>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub avatar: Option<Option<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdateTestimonial {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            customer_name,
            customer_location,
            content,
            rating,
            avatar,
            order_index,
            is_active,
        });
    }
}
