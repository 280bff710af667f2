//! Gallery entries, listed together with the URL of their media file.
//! Deleting an entry only deactivates it.

use super::resource;
use crate::{middleware::auth::AuthRules, AppState};
use actix_web::web::{self, Data};
use site_cms_error::WebResult;
use site_cms_models::{domain::prelude::GalleryItemInfo, web::WebResponse};
use site_cms_repository::GalleryRepository;

pub(super) const ROUTER_PREFIX: &str = "/gallery";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(resource::create::<GalleryRepository>)),
    )
    .route("/all", web::get().to(list_all))
    .route("/reorder", web::put().to(resource::reorder::<GalleryRepository>))
    .service(
        web::resource("/{id}")
            .route(web::get().to(resource::get_by_id::<GalleryRepository>))
            .route(web::put().to(resource::update::<GalleryRepository>))
            .route(web::delete().to(resource::delete::<GalleryRepository>)),
    );
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    resource::init_auth_rules(&format!("{router_prefix}{ROUTER_PREFIX}"), rules);
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<GalleryItemInfo>>> {
    Ok(WebResponse::ok(
        GalleryRepository::list_with_media(&state.db, true).await?,
    ))
}

async fn list_all(state: Data<AppState>) -> WebResult<WebResponse<Vec<GalleryItemInfo>>> {
    Ok(WebResponse::ok(
        GalleryRepository::list_with_media(&state.db, false).await?,
    ))
}
