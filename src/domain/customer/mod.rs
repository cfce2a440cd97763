//! Customer Context - 客户限界上下文
//!
//! 职责:
//! - 客户及电话记录的数据结构
//! - 创建 / 更新时的校验规则

mod entities;
mod errors;

pub use entities::{Customer, Phone};
pub use errors::CustomerError;
