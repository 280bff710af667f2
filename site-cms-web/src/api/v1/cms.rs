//! Everything under `/cms`: the aggregate document and the per-table routes
//! the public site is assembled from.

use super::{color, content, gallery, hero, media, resource, section, setting, style};
use crate::{middleware::auth::AuthRules, AppState};
use actix_web::web::{self, Data};
use site_cms_core::CmsAggregator;
use site_cms_error::WebResult;
use site_cms_models::{domain::prelude::CmsDocument, web::WebResponse};
use site_cms_repository::{FeatureRepository, NavbarRepository};

pub(super) const ROUTER_PREFIX: &str = "/cms";

const FEATURE_PREFIX: &str = "/features";
const NAVBAR_PREFIX: &str = "/navbar";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/all", web::get().to(all))
        .service(web::scope(setting::ROUTER_PREFIX).configure(setting::configure_routes))
        .service(web::scope(content::ROUTER_PREFIX).configure(content::configure_routes))
        .service(web::scope(color::ROUTER_PREFIX).configure(color::configure_routes))
        .service(web::scope(hero::ROUTER_PREFIX).configure(hero::configure_routes))
        .service(web::scope(section::ROUTER_PREFIX).configure(section::configure_routes))
        .service(web::scope(style::ROUTER_PREFIX).configure(style::configure_routes))
        .service(web::scope(media::ROUTER_PREFIX).configure(media::configure_routes))
        .service(web::scope(gallery::ROUTER_PREFIX).configure(gallery::configure_routes))
        .service(
            web::scope(FEATURE_PREFIX).configure(resource::configure_routes::<FeatureRepository>),
        )
        .service(
            web::scope(NAVBAR_PREFIX).configure(resource::configure_routes::<NavbarRepository>),
        );
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    let prefix = format!("{router_prefix}{ROUTER_PREFIX}");
    setting::init_auth_rules(&prefix, rules);
    content::init_auth_rules(&prefix, rules);
    color::init_auth_rules(&prefix, rules);
    hero::init_auth_rules(&prefix, rules);
    section::init_auth_rules(&prefix, rules);
    style::init_auth_rules(&prefix, rules);
    media::init_auth_rules(&prefix, rules);
    gallery::init_auth_rules(&prefix, rules);
    resource::init_auth_rules(&format!("{prefix}{FEATURE_PREFIX}"), rules);
    resource::init_auth_rules(&format!("{prefix}{NAVBAR_PREFIX}"), rules);
}

/// The document the public site loads on start.
async fn all(state: Data<AppState>) -> WebResult<WebResponse<CmsDocument>> {
    Ok(WebResponse::ok(CmsAggregator::document(&state.db).await?))
}
