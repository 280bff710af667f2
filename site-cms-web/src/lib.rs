//! HTTP surface of the site CMS.
//!
//! Public read endpoints, JWT-protected admin endpoints and the server
//! lifecycle used by the application context.
mod api;
mod middleware;

pub use middleware::{auth::AuthRules, CurrentAdmin};

use actix_web::{
    dev::{Server, ServerHandle},
    error::{JsonPayloadError, QueryPayloadError},
    middleware::{Compress, Logger, NormalizePath},
    web::{self, Data},
    App, HttpRequest, HttpServer,
};
use async_trait::async_trait;
use middleware::{auth::Authentication, cors::middleware};
use sea_orm::DatabaseConnection;
use site_cms_error::{init::InitContextError, web::WebError, CmsError, CmsResult};
use site_cms_models::{settings::Settings, WebServer};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Settings,
    pub auth_rules: Arc<AuthRules>,
}

impl AppState {
    /// Builds the state and the protected route table for the configured router prefix.
    pub fn new(db: DatabaseConnection, settings: Settings) -> Self {
        let auth_rules = api::init_auth_rules(&settings.web.router_prefix);
        AppState {
            db,
            settings,
            auth_rules: Arc::new(auth_rules),
        }
    }
}

/// Mounts state, extractor configuration and every route on an app.
///
/// Used by the server for each worker and by integration tests.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let router_prefix = state.settings.web.router_prefix.clone();
        cfg.app_data(Data::new(state))
            .app_data(
                actix_web_validator::JsonConfig::default()
                    .error_handler(|err, _| WebError::BadRequest(err.to_string()).into()),
            )
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            // Public root routes (not under the router prefix).
            .configure(api::configure_public_routes)
            .service(
                web::scope(&router_prefix)
                    .wrap(Authentication)
                    .configure(api::configure_routes),
            );
    }
}

fn json_error(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    WebError::BadRequest(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _: &HttpRequest) -> actix_web::Error {
    WebError::BadRequest(err.to_string()).into()
}

/// CmsWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct CmsWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl CmsWebServer {
    /// Create and configure the HTTP server
    fn create_server(settings: &Settings, db: DatabaseConnection) -> CmsResult<Server> {
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let worker_count = settings.web.get_worker_count();
        let cors_config = settings.web.cors.clone();

        let state = AppState::new(db, settings.clone());
        info!(
            protected_routes = state.auth_rules.len(),
            "Authentication rules registered"
        );

        let server = HttpServer::new(move || {
            App::new()
                .wrap(middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                .configure(configure_app(state.clone()))
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| CmsError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!(%addr, workers = worker_count, "HTTP server bound");
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for CmsWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    /// Initialize and start the web server
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> CmsResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings, db).map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        Ok(Arc::new(CmsWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    /// Gracefully stop the web server
    async fn stop(&self) -> CmsResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped");
        Ok(())
    }
}
