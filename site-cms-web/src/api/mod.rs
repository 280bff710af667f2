//! Router module for handling all API routes

pub mod public;
pub mod v1;

use crate::middleware::auth::AuthRules;
use actix_web::web;
use tracing::{info, instrument};

/// Configure all routes mounted under the router prefix
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(v1::configure_v1_routes);
}

/// Configure public root routes (mounted outside the router prefix).
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::configure_public_routes);
}

/// Collect the protected `(method, pattern)` pairs of every route module.
#[inline]
#[instrument(name = "init-auth-rules", skip_all)]
pub fn init_auth_rules(router_prefix: &str) -> AuthRules {
    let mut rules = AuthRules::default();
    v1::init_auth_rules(router_prefix, &mut rules);
    info!("Registered {} protected routes", rules.len());
    rules
}
