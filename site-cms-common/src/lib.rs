//! Application context for site-cms.
//!
//! Loads settings, starts logging, brings up the database, bootstraps the
//! first admin account, starts the web server and tears everything down again
//! on a shutdown signal.
mod logger;

pub use logger::Logger;
pub use site_cms_error::{CmsError, CmsResult};

use once_cell::sync::OnceCell;
use site_cms_models::{constants::DATA_DIR, settings::Settings, DbManager, WebServer};
use site_cms_repository::AdminRepository;
use std::{
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::{RwLock, RwLockReadGuard};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{info, instrument, span, warn, Level};

static APP_CONTEXT: OnceCell<RwLock<CmsAppContext>> = OnceCell::new();

/// Default bootstrap password, flagged at startup when still in use.
const INSECURE_DEFAULT_PASSWORD: &str = "admin123";

pub struct CmsAppContext {
    settings: Settings,
    logger: Logger,
    db_manager: Option<Arc<dyn DbManager>>,
    web_server: Option<Arc<dyn WebServer>>,
    /// Flag to prevent duplicate shutdowns
    shutting_down: AtomicBool,
    shutdown_token: CancellationToken,
}

impl CmsAppContext {
    #[inline]
    pub async fn instance() -> CmsResult<RwLockReadGuard<'static, CmsAppContext>> {
        match APP_CONTEXT.get() {
            Some(ctx) => Ok(ctx.read().await),
            None => Err(CmsError::from("CmsAppContext is not initialized")),
        }
    }

    /// Initializes the global application context.
    ///
    /// # Arguments
    /// * `config` - Path of the TOML configuration file. A missing file is not an error.
    pub async fn init<D, W>(config: String) -> CmsResult<()>
    where
        D: DbManager + 'static,
        W: WebServer + 'static,
    {
        // Settings come first so the runtime directory applies to log and data paths.
        let settings = Settings::new(config)?;
        apply_runtime_dir(&settings.general.runtime_dir)?;

        let mut logger = Logger::new(Some(Logger::level_from_config(
            settings.log.level.as_deref(),
        )));
        logger.initialize(&settings.log.dir, &settings.log.file)?;

        let span = span!(Level::INFO, "init-app");
        let _guard = span.enter();

        ensure_runtime_directories(&settings)?;

        let mut ctx = CmsAppContext {
            settings,
            logger,
            db_manager: None,
            web_server: None,
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
        };

        ctx.init_db_manager::<D>().await?;
        ctx.bootstrap_admin().await?;
        ctx.init_web_server::<W>().await?;

        APP_CONTEXT
            .set(RwLock::new(ctx))
            .map_err(|_| CmsError::from("Failed to set CmsAppContext"))?;
        Ok(())
    }

    async fn init_db_manager<D: DbManager + 'static>(&mut self) -> CmsResult<()> {
        self.db_manager = Some(D::init(&self.settings).await?);
        info!("Database initialized successfully.");
        Ok(())
    }

    #[instrument(name = "bootstrap-admin", skip(self))]
    async fn bootstrap_admin(&self) -> CmsResult<()> {
        let db = self.db_manager()?.get_connection()?;
        let admin = &self.settings.admin;
        if AdminRepository::bootstrap(&db, &admin.username, &admin.password, admin.email.clone())
            .await?
            .is_some()
            && admin.password == INSECURE_DEFAULT_PASSWORD
        {
            warn!(
                "Bootstrap admin `{}` uses the default password, change it after signing in",
                admin.username
            );
        }
        Ok(())
    }

    async fn init_web_server<W: WebServer + 'static>(&mut self) -> CmsResult<()> {
        let db = self.db_manager()?.get_connection()?;
        self.web_server = Some(W::init(&self.settings, db).await?);
        info!("Web server initialized successfully.");
        Ok(())
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn db_manager(&self) -> CmsResult<Arc<dyn DbManager>> {
        self.db_manager
            .as_ref()
            .ok_or(CmsError::from("Database manager not initialized"))
            .map(Arc::clone)
    }

    #[inline]
    pub fn web_server(&self) -> CmsResult<Arc<dyn WebServer>> {
        self.web_server
            .as_ref()
            .ok_or(CmsError::from("Web server not initialized"))
            .map(Arc::clone)
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        self.logger.set_level(level);
    }

    /// Ask [`run`](Self::run) to return as if a shutdown signal arrived.
    pub fn request_shutdown(&self) {
        self.shutdown_token.cancel();
    }

    /// Serves until a shutdown signal, then shuts down gracefully.
    pub async fn run(&self) -> CmsResult<()> {
        self.wait_for_shutdown().await?;
        self.graceful_shutdown().await
    }

    async fn wait_for_shutdown(&self) -> CmsResult<()> {
        let shutdown_token = self.shutdown_token.clone();

        #[cfg(unix)]
        {
            let register = |kind: SignalKind, name: &str| {
                signal(kind).map_err(|e| {
                    CmsError::ShutdownError(format!("failed to register {name} handler: {e}"))
                })
            };
            let mut sigterm = register(SignalKind::terminate(), "SIGTERM")?;
            let mut sigint = register(SignalKind::interrupt(), "SIGINT")?;
            let mut sighup = register(SignalKind::hangup(), "SIGHUP")?;

            tokio::select! {
                _ = sigterm.recv() => info!("Received SIGTERM signal"),
                _ = sigint.recv() => info!("Received SIGINT signal"),
                _ = sighup.recv() => info!("Received SIGHUP signal"),
                _ = shutdown_token.cancelled() => {}
            }
        }

        #[cfg(windows)]
        {
            tokio::select! {
                _ = ctrl_c() => info!("Received ctrl-c signal"),
                _ = shutdown_token.cancelled() => {}
            }
        }

        Ok(())
    }

    /// Stops the web server first, then closes the database.
    #[instrument(name = "graceful-shutdown", skip_all)]
    pub async fn graceful_shutdown(&self) -> CmsResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        info!("Starting graceful shutdown...");

        if let Some(web_server) = &self.web_server {
            if let Err(e) = web_server.stop().await {
                warn!(error = %e, "Web server did not stop cleanly");
            }
        }

        let tracker = TaskTracker::new();
        if let Some(db_manager) = &self.db_manager {
            let db_manager = Arc::clone(db_manager);
            tracker.spawn(async move {
                if let Err(e) = db_manager.close().await {
                    warn!(error = %e, "Database did not close cleanly");
                }
            });
        }
        tracker.close();
        tracker.wait().await;

        info!("Graceful shutdown completed");
        Ok(())
    }
}

/// Switch the working directory so relative paths (`./data`, `./logs`) resolve under it.
fn apply_runtime_dir(runtime_dir: &str) -> CmsResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| CmsError::from(format!("Failed to create runtime_dir {dir}: {e}")))?;
    std::env::set_current_dir(dir)
        .map_err(|e| CmsError::from(format!("Failed to set current_dir to {dir}: {e}")))?;
    Ok(())
}

fn ensure_runtime_directories(settings: &Settings) -> CmsResult<()> {
    for dir in [Path::new(DATA_DIR), Path::new(&settings.log.dir)] {
        std::fs::create_dir_all(dir).map_err(|e| {
            CmsError::from(format!("Failed to create directory {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}
