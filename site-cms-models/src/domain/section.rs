use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sections inserted when the visibility table is read while empty,
/// as `(section_key, section_name)` in display order.
pub const DEFAULT_SECTIONS: [(&str, &str); 9] = [
    ("hero", "Hero"),
    ("about", "About"),
    ("videos", "Videos"),
    ("Services", "Services"),
    ("partners", "Partners"),
    ("stats", "Stats"),
    ("testimonials", "Testimonials"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionListQuery {
    /// `true` drops hidden sections.
    pub visible: Option<bool>,
}

/// Body of `PUT /cms/sections/{key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpsertSection {
    #[validate(length(min = 1, max = 128))]
    pub section_name: Option<String>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

/// One entry of a bulk section reorder.
///
/// Entries carrying `section_key` are upserted by key; entries with only an
/// `id` patch that row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReorderSectionItem {
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 64))]
    pub section_key: Option<String>,
    pub order_index: i32,
    pub visible: Option<bool>,
    #[validate(length(min = 1, max = 128))]
    pub section_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReorderSections {
    #[validate(length(min = 1, message = "sections is required"), nested)]
    pub sections: Vec<ReorderSectionItem>,
}
