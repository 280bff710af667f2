pub use crate::domain::{
    achievement::{NewAchievement, UpdateAchievement},
    admin::{AdminInfo, NewAdmin, UpdateAdmin},
    auth::{Claims, LoginRequest, LoginResponse},
    cms::CmsDocument,
    color::{BulkColors, ColorEntry, UpsertColor},
    common::{DeletedResponse, ReorderItem, ReorderPayload},
    content::{BulkContent, ContentEntry, UpsertContent},
    dashboard::DashboardStats,
    feature::{NewFeature, UpdateFeature},
    gallery::{GalleryItemInfo, NewGalleryItem, UpdateGalleryItem},
    guide::{NewGuide, UpdateGuide},
    hero::{UpdateHero, HERO_ID},
    media::NewMedia,
    navbar::{NewNavbarItem, UpdateNavbarItem},
    partner::{NewPartner, UpdatePartner},
    section::{
        ReorderSectionItem, ReorderSections, SectionListQuery, UpsertSection, DEFAULT_SECTIONS,
    },
    setting::{BulkSettings, SettingEntry, SettingType, SettingValue, SiteIdentity, UpsertSetting},
    style::{Background, SectionStylePatch, StyleQuery, StyleView},
    testimonial::{NewTestimonial, UpdateTestimonial},
    tour::{NewTour, TourInfo, UpdateTour},
    video::{NewVideo, UpdateVideo},
    Patch,
};
