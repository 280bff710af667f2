mod migration;
mod sql;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use site_cms_error::{init::InitContextError, storage::StorageError, CmsResult};
use site_cms_models::{
    settings::{Settings, Sqlite},
    DbManager,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub use migration::{Migrator, MigratorTrait};
pub use sql::sqlite;

/// Connect to SQLite and bring the schema up to date.
pub async fn connect_and_migrate(
    config: &Sqlite,
) -> CmsResult<DatabaseConnection, InitContextError> {
    let db = sqlite::init_db(config)
        .await
        .map_err(|e| InitContextError::Primitive(format!("Failed to init SQLite database: {e}")))?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}")))?;

    Ok(db)
}

/// Global database manager
pub struct CmsDbManager {
    db_conn: Option<DatabaseConnection>,
}

#[async_trait]
impl DbManager for CmsDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> CmsResult<Arc<Self>, InitContextError> {
        let db_conn = connect_and_migrate(&settings.db.sqlite).await?;

        let db_manager = Arc::new(CmsDbManager {
            db_conn: Some(db_conn),
        });

        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    fn get_connection(&self) -> CmsResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> CmsResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DbBackend, EntityTrait, PaginatorTrait, Statement};
    use site_cms_models::entities::prelude::{NavbarItem, SectionVisibility, SiteSetting, ThemeColor};

    fn memory() -> Sqlite {
        Sqlite {
            path: ":memory:".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn migration_creates_schema_and_seeds() {
        let db = connect_and_migrate(&memory()).await.unwrap();

        assert_eq!(SiteSetting::find().count(&db).await.unwrap(), 6);
        assert_eq!(ThemeColor::find().count(&db).await.unwrap(), 5);
        assert_eq!(NavbarItem::find().count(&db).await.unwrap(), 5);
        // seeded lazily on first read instead
        assert_eq!(SectionVisibility::find().count(&db).await.unwrap(), 0);

        let triggers = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'trigger'".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(triggers.len(), 17);
    }

    #[tokio::test]
    async fn migration_is_idempotent() {
        let db = connect_and_migrate(&memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        assert_eq!(SiteSetting::find().count(&db).await.unwrap(), 6);
    }

    #[tokio::test]
    async fn manager_hands_out_connections() {
        let settings = Settings::from(site_cms_models::settings::Inner {
            db: site_cms_models::settings::Db { sqlite: memory() },
            ..Default::default()
        });
        let manager = CmsDbManager::init(&settings).await.unwrap();
        assert!(manager.get_connection().is_ok());
        manager.close().await.unwrap();
    }
}
