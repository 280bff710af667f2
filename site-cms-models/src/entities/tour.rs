//! `SeaORM` Entity for tours / services.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub location: Option<String>,
    /// JSON-encoded array of image URLs.
    pub images: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub order_index: i32,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
