//! Domain Layer - 领域层
//!
//! - Customer Context: 客户及电话记录

pub mod customer;
