//! Memory Layer - In-Memory Storage
//!
//! 客户仓储的内存实现，作为测试替身及临时存储后端

mod customer_repo;

pub use customer_repo::InMemoryCustomerRepository;
