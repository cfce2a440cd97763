//! 应用层 - 查询（读操作）

mod customer_queries;

pub mod handlers;

pub use customer_queries::*;
