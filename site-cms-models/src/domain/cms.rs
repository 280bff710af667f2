use super::style::StyleView;
use crate::entities::prelude::{
    FeatureModel, HeroSectionModel, NavbarItemModel, SectionVisibilityModel,
};
use serde::Serialize;
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;

/// Everything the public site needs on first load, in one document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsDocument {
    /// `setting_key` to its typed value.
    pub settings: Map<String, Json>,
    /// `content_key` to raw content.
    pub content: BTreeMap<String, Option<String>>,
    /// `color_key` to CSS color.
    pub colors: BTreeMap<String, String>,
    pub features: Vec<FeatureModel>,
    pub hero: HeroSectionModel,
    pub sections: Vec<SectionVisibilityModel>,
    /// Published styles only, keyed by `section_key`.
    pub section_styles: BTreeMap<String, StyleView>,
    pub navbar_items: Vec<NavbarItemModel>,
}
