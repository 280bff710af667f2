use clap::Parser;
use site_cms_common::CmsAppContext;
use site_cms_error::{CmsError, CmsResult};
use site_cms_models::constants::DEFAULT_CONFIG_FILE_NAME;
use site_cms_storage::CmsDbManager;
use site_cms_web::CmsWebServer;
use std::{env::current_dir, path::PathBuf};

/// site-cms - content management backend for a tourism website
///
/// Serves the public site content and the authenticated admin API
/// from a single SQLite database.
#[derive(Parser)]
#[command(name = "site-cms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "site-cms", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 'cms.toml' in the current working directory is used.
    #[arg(short, long, env = "CMS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> CmsResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| CmsError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    CmsAppContext::init::<CmsDbManager, CmsWebServer>(config_path.to_string_lossy().to_string())
        .await?;

    let ctx = CmsAppContext::instance().await?;
    ctx.run().await
}
