//! Sled Persistence - 嵌入式文档存储实现

mod customer_repo;

pub use customer_repo::{SledCustomerRepository, SledStoreConfig};
