//! Customers - 客户资源 REST API
//!
//! 架构设计: Hexagonal Architecture + 轻量 CQRS
//!
//! 领域层 (domain/):
//! - Customer Context: 客户与电话记录、校验规则
//!
//! 应用层 (application/):
//! - Ports: CustomerRepositoryPort
//! - Commands: 新建 / 更新客户
//! - Queries: 查询单个客户 / 客户列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: Sled 文档存储 + SQLite
//! - Memory: 内存仓储（测试替身）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
