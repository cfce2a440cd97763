//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 部署环境变量（`PORT`、`DB_HOST`、`DB_NAME`）
//! - 带前缀的环境变量（`CUSTOMERS_*`）
//! - 配置文件（TOML 格式）
//! - 默认值

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig, StorageBackend};
