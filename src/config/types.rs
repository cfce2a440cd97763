//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 存储后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Sled 嵌入式文档存储
    #[default]
    Sled,
    /// SQLite
    Sqlite,
    /// 内存（进程退出即丢失）
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Sled => "sled",
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::Memory => "memory",
        }
    }

    pub fn is_persistent(&self) -> bool {
        !matches!(self, StorageBackend::Memory)
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 存储后端
    #[serde(default)]
    pub backend: StorageBackend,

    /// 数据库所在位置（数据目录）
    #[serde(default = "default_db_host")]
    pub host: String,

    /// 数据库名称
    #[serde(default = "default_db_name")]
    pub name: String,

    /// 最大连接数（仅 SQLite）
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_host() -> String {
    "data".to_string()
}

fn default_db_name() -> String {
    "customers".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            host: default_db_host(),
            name: default_db_name(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Sled 数据库路径
    pub fn sled_path(&self) -> PathBuf {
        PathBuf::from(&self.host).join(format!("{}.sled", self.name))
    }

    /// SQLite 数据库文件路径
    pub fn sqlite_path(&self) -> PathBuf {
        PathBuf::from(&self.host).join(format!("{}.db", self.name))
    }

    /// SQLite 数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.sqlite_path().display())
    }

    /// 当前后端使用的数据位置
    pub fn location(&self) -> String {
        match self.backend {
            StorageBackend::Sled => self.sled_path().display().to_string(),
            StorageBackend::Sqlite => self.database_url(),
            StorageBackend::Memory => "(in-memory)".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
