//! Admin account management. Every route requires a signed-in admin.

use crate::{
    middleware::{auth::AuthRules, CurrentAdmin},
    AppState,
};
use actix_web::{
    http::Method,
    web::{self, Data, Path},
};
use actix_web_validator::Json;
use site_cms_error::{web::WebError, WebResult};
use site_cms_models::{
    domain::prelude::{AdminInfo, DeletedResponse, NewAdmin, UpdateAdmin},
    web::WebResponse,
};
use site_cms_repository::AdminRepository;
use tracing::info;

pub(super) const ROUTER_PREFIX: &str = "/admins";

/// # Routes
/// - GET `""`: all admins
/// - POST `""`: create an admin
/// - GET `/{id}`: one admin
/// - PUT `/{id}`: partial update, a new password is re-hashed
/// - DELETE `/{id}`: delete an admin other than the caller
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_by_id))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    let base = format!("{router_prefix}{ROUTER_PREFIX}");
    let item = format!("{base}/{{id}}");
    rules
        .protect(Method::GET, base.as_str())
        .protect(Method::POST, base.as_str())
        .protect(Method::GET, item.as_str())
        .protect(Method::PUT, item.as_str())
        .protect(Method::DELETE, item);
}

async fn list(state: Data<AppState>) -> WebResult<WebResponse<Vec<AdminInfo>>> {
    let admins = AdminRepository::find_all(&state.db).await?;
    Ok(WebResponse::ok(
        admins.into_iter().map(AdminInfo::from).collect(),
    ))
}

async fn get_by_id(state: Data<AppState>, id: Path<i32>) -> WebResult<WebResponse<AdminInfo>> {
    let admin = AdminRepository::find_by_id(&state.db, id.into_inner()).await?;
    Ok(WebResponse::ok(admin.into()))
}

async fn create(
    state: Data<AppState>,
    payload: Json<NewAdmin>,
) -> WebResult<WebResponse<AdminInfo>> {
    let admin = AdminRepository::create(&state.db, payload.into_inner()).await?;
    info!(admin_id = admin.id, username = %admin.username, "Admin created");
    Ok(WebResponse::ok(admin.into()))
}

async fn update(
    state: Data<AppState>,
    current: CurrentAdmin,
    id: Path<i32>,
    payload: Json<UpdateAdmin>,
) -> WebResult<WebResponse<AdminInfo>> {
    let id = id.into_inner();
    let patch = payload.into_inner();
    if id == current.id && patch.is_active == Some(false) {
        return Err(WebError::BadRequest(
            "cannot deactivate the signed-in admin".into(),
        ));
    }
    let admin = AdminRepository::update(&state.db, id, patch).await?;
    Ok(WebResponse::ok(admin.into()))
}

async fn delete(
    state: Data<AppState>,
    current: CurrentAdmin,
    id: Path<i32>,
) -> WebResult<WebResponse<DeletedResponse>> {
    let id = id.into_inner();
    if id == current.id {
        return Err(WebError::BadRequest(
            "cannot delete the signed-in admin".into(),
        ));
    }
    AdminRepository::delete(&state.db, id).await?;
    info!(admin_id = id, deleted_by = current.id, "Admin deleted");
    Ok(WebResponse::ok(DeletedResponse { id, deleted: true }))
}
