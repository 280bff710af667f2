use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use site_cms_error::CmsResult;
use site_cms_models::settings::{DbConfig, Sqlite};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter};

/// Open the SQLite pool described by `config`.
///
/// A `:memory:` database lives only as long as its connection, so it gets a
/// single pinned connection without idle or lifetime limits.
#[instrument(name = "init_sqlite_db", skip_all)]
pub async fn init_db(config: &Sqlite) -> CmsResult<DatabaseConnection> {
    let database_url = config.to_url();

    let mut opts = ConnectOptions::new(&database_url);
    opts.connect_timeout(Duration::from_millis(config.timeout));
    if config.is_memory() {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.idle_timeout(Duration::from_millis(config.idle_timeout))
            .max_lifetime(Duration::from_millis(config.max_lifetime))
            .max_connections(config.max_connections);
    }

    #[cfg(debug_assertions)]
    {
        opts.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    }
    #[cfg(not(debug_assertions))]
    {
        opts.sqlx_logging(false)
            .sqlx_logging_level(LevelFilter::Off);
    }

    if !config.is_memory() {
        tokio::fs::create_dir_all(config.db_dir()).await?;
    }

    info!(
        "Connecting to SQLite database at: {} (auto_create: {})",
        config.db_path(),
        config.auto_create
    );

    let db = Database::connect(opts).await?;
    #[cfg(not(debug_assertions))]
    {
        use sea_orm::{ConnectionTrait, DbBackend, Statement};
        for pragma in ["PRAGMA synchronous=NORMAL;", "PRAGMA temp_store=MEMORY;"] {
            let _ = db
                .execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string()))
                .await;
        }
    }
    info!("Successfully connected to SQLite database");

    Ok(db)
}
