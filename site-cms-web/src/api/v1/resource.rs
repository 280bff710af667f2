//! Ordered resource CRUD shared by every table behind a [`ResourceRepository`].
//!
//! # Routes
//! - GET `""`: active rows, ordered
//! - GET `/all`: every row (admin)
//! - POST `""`: create (admin)
//! - PUT `/reorder`: bulk `order_index` update (admin)
//! - GET `/{id}`: one row
//! - PUT `/{id}`: partial update (admin)
//! - DELETE `/{id}`: delete (admin)

use crate::{middleware::auth::AuthRules, AppState};
use actix_web::{
    http::Method,
    web::{self, Data, Path},
};
use actix_web_validator::Json;
use site_cms_error::WebResult;
use site_cms_models::{
    domain::prelude::{DeletedResponse, ReorderPayload},
    web::WebResponse,
};
use site_cms_repository::ResourceRepository;
use tracing::info;

pub(crate) fn configure_routes<R>(cfg: &mut web::ServiceConfig)
where
    R: ResourceRepository + 'static,
{
    cfg.service(
        web::resource("")
            .route(web::get().to(list::<R>))
            .route(web::post().to(create::<R>)),
    )
    .route("/all", web::get().to(list_all::<R>))
    .route("/reorder", web::put().to(reorder::<R>))
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_by_id::<R>))
            .route(web::put().to(update::<R>))
            .route(web::delete().to(delete::<R>)),
    );
}

/// Protect the admin routes of a resource mounted at `prefix` (router prefix included).
pub(crate) fn init_auth_rules(prefix: &str, rules: &mut AuthRules) {
    rules
        .protect(Method::GET, format!("{prefix}/all"))
        .protect(Method::POST, prefix)
        .protect(Method::PUT, format!("{prefix}/reorder"))
        .protect(Method::PUT, format!("{prefix}/{{id}}"))
        .protect(Method::DELETE, format!("{prefix}/{{id}}"));
}

pub(super) async fn list<R: ResourceRepository>(
    state: Data<AppState>,
) -> WebResult<WebResponse<Vec<R::Model>>> {
    Ok(WebResponse::ok(R::list(&state.db, true).await?))
}

pub(super) async fn list_all<R: ResourceRepository>(
    state: Data<AppState>,
) -> WebResult<WebResponse<Vec<R::Model>>> {
    Ok(WebResponse::ok(R::list(&state.db, false).await?))
}

pub(super) async fn get_by_id<R: ResourceRepository>(
    state: Data<AppState>,
    id: Path<i32>,
) -> WebResult<WebResponse<R::Model>> {
    Ok(WebResponse::ok(R::find(&state.db, id.into_inner()).await?))
}

pub(super) async fn create<R: ResourceRepository>(
    state: Data<AppState>,
    payload: Json<R::New>,
) -> WebResult<WebResponse<R::Model>> {
    Ok(WebResponse::ok(
        R::create(&state.db, payload.into_inner()).await?,
    ))
}

pub(super) async fn update<R: ResourceRepository>(
    state: Data<AppState>,
    id: Path<i32>,
    payload: Json<R::Update>,
) -> WebResult<WebResponse<R::Model>> {
    Ok(WebResponse::ok(
        R::update(&state.db, id.into_inner(), payload.into_inner()).await?,
    ))
}

pub(super) async fn delete<R: ResourceRepository>(
    state: Data<AppState>,
    id: Path<i32>,
) -> WebResult<WebResponse<DeletedResponse>> {
    let id = id.into_inner();
    R::delete(&state.db, id).await?;
    Ok(WebResponse::ok(DeletedResponse { id, deleted: true }))
}

pub(super) async fn reorder<R: ResourceRepository>(
    state: Data<AppState>,
    payload: Json<ReorderPayload>,
) -> WebResult<WebResponse<Vec<R::Model>>> {
    let items = payload.into_inner().items;
    R::reorder(&state.db, &items).await?;
    info!(count = items.len(), "Reordered rows");
    Ok(WebResponse::ok(R::list(&state.db, false).await?))
}
