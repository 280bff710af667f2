//! Tours. Slugs and image lists are normalized by the repository, so the
//! payloads keep them loosely typed.

use crate::entities::tour::{ActiveModel, Model as TourModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use validator::Validate;

use super::{default_true, Patch};

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
pub struct NewTour {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    /// Generated from `title` when absent.
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub location: Option<String>,
    /// Array, JSON-encoded array string, single URL or null.
    #[serde(default)]
    pub images: Json,
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateTour {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub short_description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub price: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub duration: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub location: Option<Option<String>>,
    /// `null` clears the list.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub images: Option<Option<Json>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    pub order_index: Option<i32>,
}

/// Applies the plain columns. `slug` and `images` need normalization and are
/// handled by the repository before calling this.
impl Patch<ActiveModel> for UpdateTour {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model {
            title,
            description,
            short_description,
            price,
            duration,
            location,
            category,
            is_featured,
            is_active,
            order_index,
        });
    }
}

/// Tour as returned by the API, with `images` decoded into a list.
#[derive(Debug, Clone, Serialize)]
pub struct TourInfo {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub images: Vec<String>,
    pub category: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub order_index: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TourInfo {
    pub fn new(tour: TourModel, images: Vec<String>) -> Self {
        TourInfo {
            id: tour.id,
            title: tour.title,
            slug: tour.slug,
            description: tour.description,
            short_description: tour.short_description,
            price: tour.price,
            duration: tour.duration,
            location: tour.location,
            images,
            category: tour.category,
            is_featured: tour.is_featured,
            is_active: tour.is_active,
            order_index: tour.order_index,
            created_at: tour.created_at,
            updated_at: tour.updated_at,
        }
    }
}
