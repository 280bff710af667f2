//! Bearer token authentication for admin routes.
//!
//! Route modules register the `(method, pattern)` pairs they want protected in
//! an [`AuthRules`] table at startup. For a protected request the middleware
//! validates the JWT against the configured secret and issuer, loads the
//! active admin named by the token's subject and attaches it to the request
//! extensions. Pairs registered with [`AuthRules::identify`] stay public but
//! get the admin attached when a valid token is sent. Everything else passes
//! through untouched.

use crate::AppState;
use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::{header::AUTHORIZATION, Method},
    web::Data,
    Error, HttpMessage, ResponseError,
};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use site_cms_error::{auth::AuthError, web::WebError};
use site_cms_models::{
    constants::BEARER_TOKEN, domain::prelude::Claims, entities::prelude::AdminModel,
    settings::Jwt,
};
use site_cms_repository::AdminRepository;
use site_cms_utils::jwt::{decode_jwt, issuer_validation};
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
    task::{Context, Poll},
};
use tracing::debug;

/// Protected `(method, route pattern)` pairs.
///
/// Patterns are the full registered patterns, router prefix included, e.g.
/// `/api/tours/{id}`.
#[derive(Debug, Default)]
pub struct AuthRules {
    protected: HashMap<String, HashSet<Method>>,
    identified: HashMap<String, HashSet<Method>>,
}

impl AuthRules {
    pub fn protect(&mut self, method: Method, pattern: impl Into<String>) -> &mut Self {
        self.protected
            .entry(pattern.into())
            .or_default()
            .insert(method);
        self
    }

    /// Public route that still resolves the admin when a valid token is present.
    pub fn identify(&mut self, method: Method, pattern: impl Into<String>) -> &mut Self {
        self.identified
            .entry(pattern.into())
            .or_default()
            .insert(method);
        self
    }

    #[inline]
    pub fn is_protected(&self, method: &Method, pattern: &str) -> bool {
        self.protected
            .get(pattern)
            .is_some_and(|methods| methods.contains(method))
    }

    #[inline]
    pub fn is_identified(&self, method: &Method, pattern: &str) -> bool {
        self.identified
            .get(pattern)
            .is_some_and(|methods| methods.contains(method))
    }

    pub fn len(&self) -> usize {
        self.protected.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.protected.is_empty()
    }
}

/// Authentication middleware factory.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        async move {
            // Fast path for CORS preflight
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let state = req
                .app_data::<Data<AppState>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("application state not configured"))?;

            let pattern = req.match_pattern().unwrap_or_default();
            if !state.auth_rules.is_protected(req.method(), &pattern) {
                if state.auth_rules.is_identified(req.method(), &pattern) {
                    match authenticate(&req, &state).await {
                        Ok(admin) => {
                            req.extensions_mut().insert(admin);
                        }
                        Err(WebError::Unauthorized(_)) => {}
                        Err(e) => {
                            return Ok(req
                                .into_response(e.error_response())
                                .map_into_right_body());
                        }
                    }
                }
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let admin = match authenticate(&req, &state).await {
                Ok(admin) => admin,
                Err(e) => {
                    if let WebError::Unauthorized(reason) = &e {
                        debug!(path = %req.path(), reason = reason.code(), "Rejected unauthenticated request");
                    }
                    return Ok(req
                        .into_response(e.error_response())
                        .map_into_right_body());
                }
            };

            req.extensions_mut().insert(admin);
            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}

/// Resolves the bearer token of `req` to an active admin.
async fn authenticate(req: &ServiceRequest, state: &AppState) -> Result<AdminModel, WebError> {
    let token = extract_bearer_token(req).ok_or(AuthError::MissingToken)?;
    let claims = verify_token(token, &state.settings.web.jwt)?;
    let admin_id = claims.admin_id().ok_or(AuthError::Malformed)?;
    Ok(AdminRepository::find_active_by_id(&state.db, admin_id)
        .await?
        .ok_or(AuthError::UnknownAdmin)?)
}

/// Decodes and validates a session token.
pub(crate) fn verify_token(token: &str, jwt: &Jwt) -> Result<Claims, AuthError> {
    decode_jwt::<Claims>(
        token,
        jwt.secret.as_bytes(),
        Some(issuer_validation(&jwt.issuer)),
    )
    .map(|data| data.claims)
    .map_err(|e| classify(&e))
}

fn classify(e: &JwtError) -> AuthError {
    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidSignature => AuthError::SignatureMismatch,
        ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
        _ => AuthError::Malformed,
    }
}

/// Extracts the bearer token from the request headers.
#[inline]
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_cms_utils::jwt::encode_jwt;

    fn jwt() -> Jwt {
        Jwt {
            secret: "unit-secret".into(),
            expire: 60,
            issuer: "site-cms".into(),
        }
    }

    #[test]
    fn rules_match_method_and_pattern() {
        let mut rules = AuthRules::default();
        rules
            .protect(Method::PUT, "/api/tours/{id}")
            .protect(Method::DELETE, "/api/tours/{id}");
        assert!(rules.is_protected(&Method::PUT, "/api/tours/{id}"));
        assert!(!rules.is_protected(&Method::GET, "/api/tours/{id}"));
        assert!(!rules.is_protected(&Method::PUT, "/api/tours"));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn identified_routes_are_not_protected() {
        let mut rules = AuthRules::default();
        rules.identify(Method::GET, "/api/cms/section-styles/{key}");
        assert!(rules.is_identified(&Method::GET, "/api/cms/section-styles/{key}"));
        assert!(!rules.is_protected(&Method::GET, "/api/cms/section-styles/{key}"));
        assert!(!rules.is_identified(&Method::PUT, "/api/cms/section-styles/{key}"));
        assert!(rules.is_empty());
    }

    #[test]
    fn verify_token_reports_reasons() {
        let settings = jwt();
        let claims = Claims::new("site-cms".into(), 1, "root".into(), 60);
        let token = encode_jwt(&claims, settings.secret.as_bytes(), None).unwrap();
        assert_eq!(verify_token(&token, &settings).unwrap().admin_id(), Some(1));

        let forged = encode_jwt(&claims, b"other-secret", None).unwrap();
        assert_eq!(
            verify_token(&forged, &settings).unwrap_err(),
            AuthError::SignatureMismatch
        );

        let foreign = Claims::new("elsewhere".into(), 1, "root".into(), 60);
        let token = encode_jwt(&foreign, settings.secret.as_bytes(), None).unwrap();
        assert_eq!(
            verify_token(&token, &settings).unwrap_err(),
            AuthError::InvalidIssuer
        );

        let stale = Claims::new("site-cms".into(), 1, "root".into(), -120);
        let token = encode_jwt(&stale, settings.secret.as_bytes(), None).unwrap();
        assert_eq!(verify_token(&token, &settings).unwrap_err(), AuthError::Expired);

        assert_eq!(
            verify_token("not-a-jwt", &settings).unwrap_err(),
            AuthError::Malformed
        );
    }
}
