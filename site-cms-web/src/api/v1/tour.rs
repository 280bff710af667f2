//! Tours: the resource routes plus lookup by slug.

use crate::{api::v1::resource, middleware::auth::AuthRules, AppState};
use actix_web::web::{self, Data, Path};
use actix_web_validator::Json;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{DeletedResponse, NewTour, ReorderPayload, TourInfo, UpdateTour},
    web::WebResponse,
};
use site_cms_repository::TourRepository;
use tracing::info;

pub(super) const ROUTER_PREFIX: &str = "/tours";

/// Same shape as [`resource::configure_routes`] with GET `/slug/{slug}` added.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .route("/all", web::get().to(list_all))
    .route("/reorder", web::put().to(reorder))
    .route("/slug/{slug}", web::get().to(get_by_slug))
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_by_id))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    resource::init_auth_rules(&format!("{router_prefix}{ROUTER_PREFIX}"), rules);
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<TourInfo>>> {
    Ok(WebResponse::ok(TourRepository::list(&state.db, true).await?))
}

async fn list_all(state: Data<AppState>) -> WebResult<WebResponse<Vec<TourInfo>>> {
    Ok(WebResponse::ok(TourRepository::list(&state.db, false).await?))
}

async fn get_by_id(state: Data<AppState>, id: Path<i32>) -> WebResult<WebResponse<TourInfo>> {
    Ok(WebResponse::ok(
        TourRepository::find(&state.db, id.into_inner()).await?,
    ))
}

async fn get_by_slug(
    state: Data<AppState>,
    slug: Path<String>,
) -> WebResult<WebResponse<TourInfo>> {
    Ok(WebResponse::ok(
        TourRepository::find_by_slug(&state.db, &slug).await?,
    ))
}

async fn create(state: Data<AppState>, payload: Json<NewTour>) -> WebResult<WebResponse<TourInfo>> {
    let tour = TourRepository::create(&state.db, payload.into_inner()).await?;
    info!(tour_id = tour.id, slug = %tour.slug, "Tour created");
    Ok(WebResponse::ok(tour))
}

async fn update(
    state: Data<AppState>,
    id: Path<i32>,
    payload: Json<UpdateTour>,
) -> WebResult<WebResponse<TourInfo>> {
    Ok(WebResponse::ok(
        TourRepository::update(&state.db, id.into_inner(), payload.into_inner()).await?,
    ))
}

async fn delete(state: Data<AppState>, id: Path<i32>) -> WebResult<WebResponse<DeletedResponse>> {
    let id = id.into_inner();
    TourRepository::delete(&state.db, id).await?;
    Ok(WebResponse::ok(DeletedResponse { id, deleted: true }))
}

async fn reorder(
    state: Data<AppState>,
    payload: Json<ReorderPayload>,
) -> WebResult<WebResponse<Vec<TourInfo>>> {
    TourRepository::reorder(&state.db, &payload.items).await?;
    Ok(WebResponse::ok(TourRepository::list(&state.db, false).await?))
}
