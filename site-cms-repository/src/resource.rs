//! Ordered resources whose CRUD needs nothing beyond the defaults.

use crate::generic::resource_repository;
use site_cms_models::{domain::prelude::*, entities::prelude::*};

resource_repository! {
    FeatureRepository: Feature, FeatureModel, FeatureActiveModel, NewFeature, UpdateFeature;
    NavbarRepository: NavbarItem, NavbarItemModel, NavbarItemActiveModel, NewNavbarItem, UpdateNavbarItem;
    GuideRepository: Guide, GuideModel, GuideActiveModel, NewGuide, UpdateGuide;
    PartnerRepository: Partner, PartnerModel, PartnerActiveModel, NewPartner, UpdatePartner;
    VideoRepository: Video, VideoModel, VideoActiveModel, NewVideo, UpdateVideo;
    AchievementRepository: Achievement, AchievementModel, AchievementActiveModel, NewAchievement, UpdateAchievement;
    TestimonialRepository: Testimonial, TestimonialModel, TestimonialActiveModel, NewTestimonial, UpdateTestimonial;
}
