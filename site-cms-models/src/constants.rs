// Global constants shared across site-cms crates

/// Configuration file loaded when `--config` is not given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "cms.toml";

pub const BEARER_TOKEN: &str = "Bearer";

/// Role given to the bootstrap administrator.
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

pub const DATA_DIR: &str = "./data";
