//! Admin session endpoints.

use crate::{
    middleware::{auth::AuthRules, CurrentAdmin},
    AppState,
};
use actix_web::{
    http::Method,
    web::{self, Data},
};
use actix_web_validator::Json;
use site_cms_error::{auth::AuthError, web::WebError, WebResult};
use site_cms_models::{
    constants::BEARER_TOKEN,
    domain::prelude::{AdminInfo, Claims, LoginRequest, LoginResponse},
    web::WebResponse,
};
use site_cms_repository::AdminRepository;
use site_cms_utils::{hash::bcrypt_check, jwt::encode_jwt};
use tracing::{info, instrument, warn};

pub(super) const ROUTER_PREFIX: &str = "/auth";

/// # Routes
/// - POST `/login`: exchange credentials for a JWT
/// - GET `/me`: the signed-in admin (admin)
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/me", web::get().to(me));
}

pub(crate) fn init_auth_rules(router_prefix: &str, rules: &mut AuthRules) {
    rules.protect(Method::GET, format!("{router_prefix}{ROUTER_PREFIX}/me"));
}

/// Unknown usernames, inactive accounts and wrong passwords all fail the same way.
#[instrument(name = "login", skip_all, fields(username = %payload.username))]
async fn login(
    state: Data<AppState>,
    payload: Json<LoginRequest>,
) -> WebResult<WebResponse<LoginResponse>> {
    let LoginRequest { username, password } = payload.into_inner();

    let admin = AdminRepository::find_by_username(&state.db, &username)
        .await?
        .filter(|admin| admin.is_active && bcrypt_check(&password, &admin.password_hash))
        .ok_or_else(|| {
            warn!("Rejected login attempt");
            WebError::Unauthorized(AuthError::BadCredentials)
        })?;

    let jwt = &state.settings.web.jwt;
    let claims = Claims::new(jwt.issuer.clone(), admin.id, admin.username.clone(), jwt.expire);
    let token = encode_jwt(&claims, jwt.secret.as_bytes(), None)
        .map_err(|e| WebError::InternalError(format!("Failed to sign token: {e}")))?;

    AdminRepository::touch_last_login(&state.db, admin.id).await?;
    info!(admin_id = admin.id, "Admin signed in");

    Ok(WebResponse::ok(LoginResponse {
        token,
        token_type: BEARER_TOKEN.to_string(),
        expires_in: jwt.expire,
        admin: admin.into(),
    }))
}

async fn me(admin: CurrentAdmin) -> WebResult<WebResponse<AdminInfo>> {
    Ok(WebResponse::ok(admin.0.into()))
}
