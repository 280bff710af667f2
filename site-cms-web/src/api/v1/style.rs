//! Per-section styles with a draft and a published state.
//!
//! # Routes
//! - GET `""`: every style row (admin)
//! - POST `/publish-all`: publish every style of a known section (admin)
//! - GET `/{key}`: `?published=true` or an anonymous caller gets the row only
//!   once published and never creates one; an admin gets the draft, created
//!   when missing
//! - PUT `/{key}`: patch the draft (admin)
//! - POST `/{key}/publish`: publish one style (admin)

use crate::{
    middleware::{auth::AuthRules, CurrentAdmin},
    AppState,
};
use actix_web::{
    http::Method,
    web::{self, Data, Path, Query},
};
use actix_web_validator::Json;
use site_cms_core::StyleService;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{SectionStylePatch, StyleQuery, StyleView},
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/section-styles";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/publish-all", web::post().to(publish_all))
        .service(
            web::resource("/{key}")
                .route(web::get().to(get))
                .route(web::put().to(upsert)),
        )
        .route("/{key}/publish", web::post().to(publish));
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    let base = format!("{router_prefix}{ROUTER_PREFIX}");
    rules
        .protect(Method::GET, base.as_str())
        .identify(Method::GET, format!("{base}/{{key}}"))
        .protect(Method::POST, format!("{base}/publish-all"))
        .protect(Method::PUT, format!("{base}/{{key}}"))
        .protect(Method::POST, format!("{base}/{{key}}/publish"));
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<StyleView>>> {
    Ok(WebResponse::ok(StyleService::list(&state.db).await?))
}

/// `data` is `null` while a published read finds nothing.
async fn get(
    state: Data<AppState>,
    key: Path<String>,
    query: Query<StyleQuery>,
    admin: Option<CurrentAdmin>,
) -> WebResult<WebResponse<Option<StyleView>>> {
    let published_only = query.published || admin.is_none();
    Ok(WebResponse::ok(
        StyleService::get(&state.db, &key, published_only).await?,
    ))
}

async fn upsert(
    state: Data<AppState>,
    key: Path<String>,
    payload: Json<SectionStylePatch>,
) -> WebResult<WebResponse<StyleView>> {
    Ok(WebResponse::ok(
        StyleService::upsert(&state.db, &key, payload.into_inner()).await?,
    ))
}

async fn publish(state: Data<AppState>, key: Path<String>) -> WebResult<WebResponse<StyleView>> {
    Ok(WebResponse::ok(StyleService::publish(&state.db, &key).await?))
}

async fn publish_all(state: Data<AppState>) -> WebResult<WebResponse<Vec<String>>> {
    Ok(WebResponse::ok(StyleService::publish_all(&state.db).await?))
}
