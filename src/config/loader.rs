//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 部署环境变量 `PORT` / `DB_HOST` / `DB_NAME`
//! 2. 带前缀的环境变量 `CUSTOMERS_*`
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StorageBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 无前缀的部署环境变量及其对应的配置键
const PLAIN_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DB_HOST", "database.host"),
    ("DB_NAME", "database.name"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=9000`
/// - `DB_HOST=/var/lib/customers`
/// - `CUSTOMERS_DATABASE__BACKEND=sqlite`
/// - `CUSTOMERS_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("database.backend", "sled")?
        .set_default("database.host", "data")?
        .set_default("database.name", "customers")?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 例如: CUSTOMERS_SERVER__PORT=9000
    builder = builder.add_source(
        Environment::with_prefix("CUSTOMERS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    for (key, value) in plain_env_overrides(|name| std::env::var(name).ok()) {
        builder = builder.set_override(key, value)?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 收集已设置且非空的部署环境变量
fn plain_env_overrides<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    PLAIN_ENV_OVERRIDES
        .iter()
        .filter_map(|(var, key)| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .map(|value| (*key, value))
        })
        .collect()
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.backend.is_persistent() {
        if config.database.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "Database host cannot be empty".to_string(),
            ));
        }
        if config.database.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "Database name cannot be empty".to_string(),
            ));
        }
    }

    // 连接池只有 SQLite 后端使用
    if config.database.backend == StorageBackend::Sqlite && config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Storage Backend: {}", config.database.backend);
    tracing::info!("Storage Location: {}", config.database.location());
    if config.database.backend == StorageBackend::Sqlite {
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}
