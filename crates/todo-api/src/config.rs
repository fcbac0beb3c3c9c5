use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_LOG_FILTER: &str = "todo_api=debug,todo_core=debug,tower_http=debug,axum::rejection=trace";

const CONFIG_FILE: &str = "config/todo-api";
const ENV_PREFIX: &str = "TODO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server settings.
///
/// Loaded in order, later sources winning:
/// 1. built-in defaults (`DATABASE_URL` seeds `database_url`)
/// 2. `config/todo-api.{toml,yaml,json}` if present
/// 3. `TODO_*` environment variables, e.g. `TODO_PORT`, `TODO_DATABASE_URL`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Without a database the server keeps todos in memory.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("database_url", url)?;
        }

        builder
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("max_connections", 5)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .set_default("log_format", "pretty")
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
