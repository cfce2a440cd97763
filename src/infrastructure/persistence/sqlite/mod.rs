//! SQLite Persistence - SQLite 数据库持久化实现

mod customer_repo;
mod database;

pub use customer_repo::*;
pub use database::*;
