//! Site settings.
//!
//! # Routes
//! - GET `""`: `{setting_key: typed value}`
//! - GET `/identity`: the well-known identity settings as one object
//! - GET `/list`: raw rows (admin)
//! - PUT `""`: bulk upsert (admin)
//! - PUT `/{key}`: upsert one key (admin)
//! - DELETE `/{key}`: delete one key (admin)

use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data, Path},
};
use actix_web_validator::Json;
use serde_json::{Map, Value};
use site_cms_core::SettingService;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{BulkSettings, SiteIdentity, UpsertSetting},
    entities::prelude::SiteSettingModel,
    web::WebResponse,
};
use site_cms_repository::SettingRepository;
use tracing::info;

pub(super) const ROUTER_PREFIX: &str = "/settings";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(typed_map))
            .route(web::put().to(bulk_upsert)),
    )
    .route("/identity", web::get().to(identity))
    .route("/list", web::get().to(list))
    .service(
        web::resource("/{key}")
            .route(web::put().to(upsert))
            .route(web::delete().to(delete)),
    );
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    let base = format!("{router_prefix}{ROUTER_PREFIX}");
    rules
        .protect(Method::PUT, base.as_str())
        .protect(Method::GET, format!("{base}/list"))
        .protect(Method::PUT, format!("{base}/{{key}}"))
        .protect(Method::DELETE, format!("{base}/{{key}}"));
}

async fn typed_map(state: Data<AppState>) -> WebResult<WebResponse<Map<String, Value>>> {
    Ok(WebResponse::ok(SettingService::typed_map(&state.db).await?))
}

async fn identity(state: Data<AppState>) -> WebResult<WebResponse<SiteIdentity>> {
    Ok(WebResponse::ok(SettingService::identity(&state.db).await?))
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<SiteSettingModel>>> {
    Ok(WebResponse::ok(SettingRepository::find_all(&state.db).await?))
}

async fn upsert(
    state: Data<AppState>,
    key: Path<String>,
    payload: Json<UpsertSetting>,
) -> WebResult<WebResponse<SiteSettingModel>> {
    let (setting, created) =
        SettingRepository::upsert(&state.db, &key, payload.into_inner()).await?;
    let message = if created { "created" } else { "updated" };
    Ok(WebResponse::ok_with_message(message, setting))
}

async fn bulk_upsert(
    state: Data<AppState>,
    payload: Json<BulkSettings>,
) -> WebResult<WebResponse<Vec<SiteSettingModel>>> {
    let settings = SettingRepository::bulk_upsert(&state.db, payload.into_inner().settings).await?;
    info!(count = settings.len(), "Settings saved");
    Ok(WebResponse::ok(settings))
}

async fn delete(state: Data<AppState>, key: Path<String>) -> WebResult<WebResponse<()>> {
    SettingRepository::delete(&state.db, &key).await?;
    Ok(WebResponse::<()>::ok_empty())
}
