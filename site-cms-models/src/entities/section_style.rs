//! `SeaORM` Entity for per-section visual styling.
//!
//! A row starts as a draft (`is_published = false`) and is promoted by an
//! explicit publish. Edits never reset the flag.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "section_style")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub section_key: String,
    pub section_name: String,
    pub background_color: Option<String>,
    /// JSON `{ "direction": .., "colors": [..] }`.
    pub background_gradient: Option<String>,
    pub background_image: Option<String>,
    pub background_overlay: Option<String>,
    pub text_color: Option<String>,
    pub heading_color: Option<String>,
    pub subheading_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub card_background: Option<String>,
    pub card_border: Option<String>,
    pub card_radius: Option<String>,
    pub card_shadow: Option<String>,
    pub card_text_color: Option<String>,
    pub button_background: Option<String>,
    pub button_text: Option<String>,
    pub button_hover: Option<String>,
    pub is_published: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
