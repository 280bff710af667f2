//! Free-form site copy keyed by `content_key`. Values are returned as stored.

use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data, Path},
};
use actix_web_validator::Json;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{BulkContent, UpsertContent},
    entities::prelude::SiteContentModel,
    web::WebResponse,
};
use site_cms_repository::ContentRepository;
use std::collections::BTreeMap;

pub(super) const ROUTER_PREFIX: &str = "/content";

/// # Routes
/// - GET `""`: `{content_key: content_value}`
/// - GET `/list`: raw rows (admin)
/// - PUT `""`: bulk upsert (admin)
/// - PUT `/{key}`, DELETE `/{key}` (admin)
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

async fn map(
    state: Data<AppState>,
) -> WebResult<WebResponse<BTreeMap<String, Option<String>>>> {
    let rows = ContentRepository::find_all(&state.db).await?;
    Ok(WebResponse::ok(
        rows.into_iter()
            .map(|row| (row.content_key, row.content_value))
            .collect(),
    ))
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<SiteContentModel>>> {
    Ok(WebResponse::ok(ContentRepository::find_all(&state.db).await?))
}

async fn upsert(
    state: Data<AppState>,
    key: Path<String>,
    payload: Json<UpsertContent>,
) -> WebResult<WebResponse<SiteContentModel>> {
    let (content, created) =
        ContentRepository::upsert(&state.db, &key, payload.into_inner()).await?;
    let message = if created { "created" } else { "updated" };
    Ok(WebResponse::ok_with_message(message, content))
}

async fn bulk_upsert(
    state: Data<AppState>,
    payload: Json<BulkContent>,
) -> WebResult<WebResponse<Vec<SiteContentModel>>> {
    Ok(WebResponse::ok(
        ContentRepository::bulk_upsert(&state.db, payload.into_inner().content).await?,
    ))
}

async fn delete(state: Data<AppState>, key: Path<String>) -> WebResult<WebResponse<()>> {
    ContentRepository::delete(&state.db, &key).await?;
    Ok(WebResponse::<()>::ok_empty())
}
