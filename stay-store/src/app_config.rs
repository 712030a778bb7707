use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub app: AppConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory the file-backed medium writes its per-key files under.
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL share links are built against.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub page_size: usize,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("storage.dir", ".stayfinder")?
            .set_default("app.base_url", "https://stayfinder.app/")?
            .set_default("search.page_size", 12)?
            // Optional layered files, then environment overrides:
            // STAYFINDER__STORAGE__DIR=/tmp/sf overrides storage.dir
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("STAYFINDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
