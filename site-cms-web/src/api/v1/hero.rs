use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data},
};
use actix_web_validator::Json;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::UpdateHero, entities::prelude::HeroSectionModel, web::WebResponse,
};
use site_cms_repository::HeroRepository;

pub(super) const ROUTER_PREFIX: &str = "/hero";

/// The hero banner is a single row, created empty on first read.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(get))
            .route(web::put().to(update)),
    );
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    rules.protect(Method::PUT, format!("{router_prefix}{ROUTER_PREFIX}"));
}

async fn get(state: Data<AppState>) -> WebResult<WebResponse<HeroSectionModel>> {
    Ok(WebResponse::ok(HeroRepository::get_or_create(&state.db).await?))
}

async fn update(
    state: Data<AppState>,
    payload: Json<UpdateHero>,
) -> WebResult<WebResponse<HeroSectionModel>> {
    Ok(WebResponse::ok(
        HeroRepository::update(&state.db, payload.into_inner()).await?,
    ))
}
