pub mod constants;
pub mod domain;
pub mod entities;
mod idens;
pub mod initializer;
pub mod settings;
pub mod web;

use async_trait::async_trait;
use downcast_rs::{impl_downcast, DowncastSync};
use sea_orm::DatabaseConnection;
use settings::Settings;
use site_cms_error::{init::InitContextError, storage::StorageError, CmsResult};
use std::sync::Arc;

impl_downcast!(sync WebServer);
impl_downcast!(sync DbManager);

/// Database lifecycle: connect, migrate, hand out connections and close.
#[async_trait]
pub trait DbManager: DowncastSync + Send + Sync + 'static {
    /// Connects and runs pending migrations.
    ///
    /// # Arguments
    /// * `settings` - The application settings
    async fn init(settings: &Settings) -> CmsResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// A pooled connection, cheap to clone.
    fn get_connection(&self) -> CmsResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections.
    async fn close(&self) -> CmsResult<()>;
}

/// HTTP server lifecycle.
#[async_trait]
pub trait WebServer: DowncastSync + Send + Sync + 'static {
    /// Binds and starts serving in the background.
    ///
    /// # Arguments
    /// * `settings` - The application settings
    /// * `db` - Connection handed to request handlers
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> CmsResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Gracefully stops the web server.
    async fn stop(&self) -> CmsResult<()>;
}
