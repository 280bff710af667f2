use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub tours: u64,
    pub active_testimonials: u64,
    pub guides: u64,
    pub partners: u64,
    pub videos: u64,
    pub gallery_items: u64,
    pub published_styles: u64,
    pub draft_styles: u64,
}
