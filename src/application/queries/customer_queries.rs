//! Customer Queries

/// 获取客户详情查询
#[derive(Debug, Clone)]
pub struct GetCustomer {
    pub id: String,
}

/// 列出所有客户查询
#[derive(Debug, Clone)]
pub struct ListCustomers;
