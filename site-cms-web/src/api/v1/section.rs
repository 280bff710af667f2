//! Section order and visibility.
//!
//! # Routes
//! - GET `""`: every section ordered, `?visible=true` drops hidden ones.
//!   An empty table is seeded with the default sections first.
//! - PUT `/reorder`: bulk upsert of order and visibility (admin)
//! - PUT `/{key}`: upsert one section (admin)

use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data, Path, Query},
};
use actix_web_validator::Json;
use site_cms_core::SectionService;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{ReorderSections, SectionListQuery, UpsertSection},
    entities::prelude::SectionVisibilityModel,
    web::WebResponse,
};
use tracing::info;

pub(super) const ROUTER_PREFIX: &str = "/sections";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/reorder", web::put().to(reorder))
        .route("/{key}", web::put().to(upsert));
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    let base = format!("{router_prefix}{ROUTER_PREFIX}");
    rules
        .protect(Method::PUT, format!("{base}/reorder"))
        .protect(Method::PUT, format!("{base}/{{key}}"));
}

async fn list(
    state: Data<AppState>,
    query: Query<SectionListQuery>,
) -> WebResult<WebResponse<Vec<SectionVisibilityModel>>> {
    let visible_only = query.visible.unwrap_or(false);
    Ok(WebResponse::ok(
        SectionService::list(&state.db, visible_only).await?,
    ))
}

async fn upsert(
    state: Data<AppState>,
    key: Path<String>,
    payload: Json<UpsertSection>,
) -> WebResult<WebResponse<SectionVisibilityModel>> {
    Ok(WebResponse::ok(
        SectionService::upsert(&state.db, &key, payload.into_inner()).await?,
    ))
}

async fn reorder(
    state: Data<AppState>,
    payload: Json<ReorderSections>,
) -> WebResult<WebResponse<Vec<SectionVisibilityModel>>> {
    let sections = payload.into_inner().sections;
    info!(count = sections.len(), "Reordering sections");
    Ok(WebResponse::ok(
        SectionService::reorder(&state.db, sections).await?,
    ))
}
