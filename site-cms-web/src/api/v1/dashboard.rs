use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data},
};
use site_cms_core::DashboardService;
use site_cms_error::WebResult;
use site_cms_models::{domain::prelude::DashboardStats, web::WebResponse};

pub(super) const ROUTER_PREFIX: &str = "/dashboard";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(stats));
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    rules.protect(Method::GET, format!("{router_prefix}{ROUTER_PREFIX}/stats"));
}

async fn stats(state: Data<AppState>) -> WebResult<WebResponse<DashboardStats>> {
    Ok(WebResponse::ok(DashboardService::stats(&state.db).await?))
}
