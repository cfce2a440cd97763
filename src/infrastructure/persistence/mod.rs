//! Persistence Layer - 数据持久化
//!
//! Sled 文档存储和 SQLite 存储实现

pub mod sled;
pub mod sqlite;

pub use self::sled::SledCustomerRepository;
pub use self::sqlite::SqliteCustomerRepository;
