//! V1 API routes
mod admin;
mod auth;
mod cms;
mod color;
mod content;
mod dashboard;
mod gallery;
mod hero;
mod media;
mod resource;
mod section;
mod setting;
mod style;
mod tour;

use crate::middleware::auth::AuthRules;
use actix_web::web;
use site_cms_repository::{
    AchievementRepository, GuideRepository, PartnerRepository, TestimonialRepository,
    VideoRepository,
};

const GUIDE_PREFIX: &str = "/guides";
const PARTNER_PREFIX: &str = "/partners";
const VIDEO_PREFIX: &str = "/videos";
const ACHIEVEMENT_PREFIX: &str = "/achievements";
const TESTIMONIAL_PREFIX: &str = "/testimonials";

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(auth::ROUTER_PREFIX).configure(auth::configure_routes))
        .service(web::scope(admin::ROUTER_PREFIX).configure(admin::configure_routes))
        .service(web::scope(cms::ROUTER_PREFIX).configure(cms::configure_routes))
        .service(web::scope(tour::ROUTER_PREFIX).configure(tour::configure_routes))
        .service(
            web::scope(GUIDE_PREFIX).configure(resource::configure_routes::<GuideRepository>),
        )
        .service(
            web::scope(PARTNER_PREFIX).configure(resource::configure_routes::<PartnerRepository>),
        )
        .service(
            web::scope(VIDEO_PREFIX).configure(resource::configure_routes::<VideoRepository>),
        )
        .service(
            web::scope(ACHIEVEMENT_PREFIX)
                .configure(resource::configure_routes::<AchievementRepository>),
        )
        .service(
            web::scope(TESTIMONIAL_PREFIX)
                .configure(resource::configure_routes::<TestimonialRepository>),
        )
        .service(web::scope(dashboard::ROUTER_PREFIX).configure(dashboard::configure_routes));
}

/// Register the protected routes of every v1 module.
pub fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    auth::init_auth_rules(router_prefix, rules);
    admin::init_auth_rules(router_prefix, rules);
    cms::init_auth_rules(router_prefix, rules);
    tour::init_auth_rules(router_prefix, rules);
    for prefix in [
        GUIDE_PREFIX,
        PARTNER_PREFIX,
        VIDEO_PREFIX,
        ACHIEVEMENT_PREFIX,
        TESTIMONIAL_PREFIX,
    ] {
        resource::init_auth_rules(&format!("{router_prefix}{prefix}"), rules);
    }
    dashboard::init_auth_rules(router_prefix, rules);
}
