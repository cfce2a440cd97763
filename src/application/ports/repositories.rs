//! Repository Ports - 出站端口
//!
//! 定义客户数据持久化的抽象接口
//! 具体实现在 infrastructure 层（Sled / SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::Customer;

/// 客户文档所在的集合名称
pub const CUSTOMERS_COLLECTION: &str = "customers";

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::SerializationError(err.to_string())
    }
}

/// Customer Repository Port
///
/// 每个操作内部获取独立的轻量会话，操作结束（无论成功与否）时释放
#[async_trait]
pub trait CustomerRepositoryPort: Send + Sync {
    /// 根据 ID 查找客户，不存在时返回 `Ok(None)`
    async fn get(&self, id: &str) -> Result<Option<Customer>, RepositoryError>;

    /// 获取所有客户（顺序由存储决定）
    async fn get_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// 新建客户，ID 重复时返回 `Duplicate`
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// 用 `customer` 的可变字段替换 `id` 对应的记录
    ///
    /// 记录不存在时不做任何修改，返回 `Ok(())`
    async fn update(&self, id: &str, customer: &Customer) -> Result<(), RepositoryError>;
}
