//! Runtime settings: built-in defaults, then an optional `rusty-bbs.toml`,
//! then `BBS_*` environment variables (a `.env` file is loaded first).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub page_size: u32,
    pub static_dir: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "sqlite:rusty_bbs.db")?
            .set_default("max_connections", 5)?
            .set_default("page_size", i64::from(rb_core::pager::DEFAULT_PAGE_SIZE))?
            .set_default("static_dir", "./static")?
            .add_source(File::with_name("rusty-bbs").required(false))
            .add_source(Environment::with_prefix("BBS").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
