//! `SeaORM` entities, one module per table.

pub mod achievement;
pub mod admin;
pub mod feature;
pub mod gallery_item;
pub mod guide;
pub mod hero_section;
pub mod media_library;
pub mod navbar_item;
pub mod partner;
pub mod section_style;
pub mod section_visibility;
pub mod site_content;
pub mod site_setting;
pub mod testimonial;
pub mod theme_color;
pub mod tour;
pub mod video;

pub mod prelude {
    pub use super::achievement::{
        ActiveModel as AchievementActiveModel,
        Column as AchievementColumn,
        Entity as Achievement,
        Model as AchievementModel,
    };
    pub use super::admin::{
        ActiveModel as AdminActiveModel,
        Column as AdminColumn,
        Entity as Admin,
        Model as AdminModel,
    };
    pub use super::feature::{
        ActiveModel as FeatureActiveModel,
        Column as FeatureColumn,
        Entity as Feature,
        Model as FeatureModel,
    };
    pub use super::gallery_item::{
        ActiveModel as GalleryItemActiveModel,
        Column as GalleryItemColumn,
        Entity as GalleryItem,
        Model as GalleryItemModel,
    };
    pub use super::guide::{
        ActiveModel as GuideActiveModel,
        Column as GuideColumn,
        Entity as Guide,
        Model as GuideModel,
    };
    pub use super::hero_section::{
        ActiveModel as HeroSectionActiveModel,
        Column as HeroSectionColumn,
        Entity as HeroSection,
        Model as HeroSectionModel,
    };
    pub use super::media_library::{
        ActiveModel as MediaLibraryActiveModel,
        Column as MediaLibraryColumn,
        Entity as MediaLibrary,
        Model as MediaLibraryModel,
    };
    pub use super::navbar_item::{
        ActiveModel as NavbarItemActiveModel,
        Column as NavbarItemColumn,
        Entity as NavbarItem,
        Model as NavbarItemModel,
    };
    pub use super::partner::{
        ActiveModel as PartnerActiveModel,
        Column as PartnerColumn,
        Entity as Partner,
        Model as PartnerModel,
    };
    pub use super::section_style::{
        ActiveModel as SectionStyleActiveModel,
        Column as SectionStyleColumn,
        Entity as SectionStyle,
        Model as SectionStyleModel,
    };
    pub use super::section_visibility::{
        ActiveModel as SectionVisibilityActiveModel,
        Column as SectionVisibilityColumn,
        Entity as SectionVisibility,
        Model as SectionVisibilityModel,
    };
    pub use super::site_content::{
        ActiveModel as SiteContentActiveModel,
        Column as SiteContentColumn,
        Entity as SiteContent,
        Model as SiteContentModel,
    };
    pub use super::site_setting::{
        ActiveModel as SiteSettingActiveModel,
        Column as SiteSettingColumn,
        Entity as SiteSetting,
        Model as SiteSettingModel,
    };
    pub use super::testimonial::{
        ActiveModel as TestimonialActiveModel,
        Column as TestimonialColumn,
        Entity as Testimonial,
        Model as TestimonialModel,
    };
    pub use super::theme_color::{
        ActiveModel as ThemeColorActiveModel,
        Column as ThemeColorColumn,
        Entity as ThemeColor,
        Model as ThemeColorModel,
    };
    pub use super::tour::{
        ActiveModel as TourActiveModel,
        Column as TourColumn,
        Entity as Tour,
        Model as TourModel,
    };
    pub use super::video::{
        ActiveModel as VideoActiveModel,
        Column as VideoColumn,
        Entity as Video,
        Model as VideoModel,
    };
}
