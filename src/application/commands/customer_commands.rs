//! Customer Commands

use crate::domain::customer::Customer;

/// 创建客户命令
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub customer: Customer,
}

/// 更新客户命令
///
/// `id` 来自请求路径，`customer` 来自请求体
#[derive(Debug, Clone)]
pub struct UpdateCustomer {
    pub id: String,
    pub customer: Customer,
}
