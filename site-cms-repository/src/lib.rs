//! Data access for every site-cms table.
//!
//! Repositories are stateless unit structs whose functions take the connection
//! (or an open transaction) explicitly, so callers decide the transaction scope.

mod admin;
mod color;
mod content;
mod gallery;
pub mod generic;
mod hero;
mod media;
mod resource;
mod section;
mod setting;
mod style;
mod tour;

pub use admin::AdminRepository;
pub use color::ColorRepository;
pub use content::ContentRepository;
pub use gallery::GalleryRepository;
pub use generic::{find_or_create, KeyedEntity, OrderedEntity, ResourceRepository};
pub use hero::HeroRepository;
pub use media::MediaRepository;
pub use resource::{
    AchievementRepository, FeatureRepository, GuideRepository, NavbarRepository,
    PartnerRepository, TestimonialRepository, VideoRepository,
};
pub use section::SectionRepository;
pub use setting::SettingRepository;
pub use style::StyleRepository;
pub use tour::TourRepository;
