//! Media library. Files are hosted elsewhere; rows only record their metadata.

use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data, Path},
};
use actix_web_validator::Json;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{DeletedResponse, NewMedia},
    entities::prelude::MediaLibraryModel,
    web::WebResponse,
};
use site_cms_repository::MediaRepository;
use tracing::info;

pub(super) const ROUTER_PREFIX: &str = "/media";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .route("/{id}", web::delete().to(delete));
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    let base = format!("{router_prefix}{ROUTER_PREFIX}");
    rules
        .protect(Method::GET, base.as_str())
        .protect(Method::POST, base.as_str())
        .protect(Method::DELETE, format!("{base}/{{id}}"));
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<MediaLibraryModel>>> {
    Ok(WebResponse::ok(MediaRepository::find_all(&state.db).await?))
}

async fn create(
    state: Data<AppState>,
    payload: Json<NewMedia>,
) -> WebResult<WebResponse<MediaLibraryModel>> {
    let media = MediaRepository::create(&state.db, payload.into_inner()).await?;
    info!(media_id = media.id, url = %media.url, "Media registered");
    Ok(WebResponse::ok(media))
}

async fn delete(state: Data<AppState>, id: Path<i32>) -> WebResult<WebResponse<DeletedResponse>> {
    let id = id.into_inner();
    MediaRepository::delete(&state.db, id).await?;
    Ok(WebResponse::ok(DeletedResponse { id, deleted: true }))
}
