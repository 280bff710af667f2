//! Theme colors keyed by `color_key`.

use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data, Path},
};
use actix_web_validator::Json;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{BulkColors, UpsertColor},
    entities::prelude::ThemeColorModel,
    web::WebResponse,
};
use site_cms_repository::ColorRepository;
use std::collections::BTreeMap;

pub(super) const ROUTER_PREFIX: &str = "/colors";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(map))
            .route(web::put().to(bulk_upsert)),
    )
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

async fn map(state: Data<AppState>) -> WebResult<WebResponse<BTreeMap<String, String>>> {
    let rows = ColorRepository::find_all(&state.db).await?;
    Ok(WebResponse::ok(
        rows.into_iter()
            .map(|row| (row.color_key, row.color_value))
            .collect(),
    ))
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<ThemeColorModel>>> {
    Ok(WebResponse::ok(ColorRepository::find_all(&state.db).await?))
}

/// A new key needs `color_value`.
async fn upsert(
    state: Data<AppState>,
    key: Path<String>,
    payload: Json<UpsertColor>,
) -> WebResult<WebResponse<ThemeColorModel>> {
    let (color, created) = ColorRepository::upsert(&state.db, &key, payload.into_inner()).await?;
    let message = if created { "created" } else { "updated" };
    Ok(WebResponse::ok_with_message(message, color))
}

async fn bulk_upsert(
    state: Data<AppState>,
    payload: Json<BulkColors>,
) -> WebResult<WebResponse<Vec<ThemeColorModel>>> {
    Ok(WebResponse::ok(
        ColorRepository::bulk_upsert(&state.db, payload.into_inner().colors).await?,
    ))
}

async fn delete(state: Data<AppState>, key: Path<String>) -> WebResult<WebResponse<()>> {
    ColorRepository::delete(&state.db, &key).await?;
    Ok(WebResponse::<()>::ok_empty())
}
