use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Layer defaults, an optional `forum-store.toml`, and `FORUM_*`
    /// environment variables. `DATABASE_URL` wins over everything else.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .set_default("database.url", "sqlite:./data.db")?
            .set_default("database.max_connections", 10)?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name("forum-store").required(false))
            .add_source(
                config::Environment::with_prefix("FORUM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
