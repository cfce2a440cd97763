//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 客户仓储端口定义
//! - commands: 新建 / 更新命令及处理器
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{CreateCustomerHandler, UpdateCustomerHandler},
    CreateCustomer, UpdateCustomer,
};

pub use error::ApplicationError;

pub use ports::{CustomerRepositoryPort, RepositoryError, CUSTOMERS_COLLECTION};

pub use queries::{
    handlers::{GetCustomerHandler, ListCustomersHandler},
    GetCustomer, ListCustomers,
};
