//! Application State
//!
//! 基于 `main` 注入的客户仓储构建的 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    CreateCustomerHandler, CustomerRepositoryPort, GetCustomerHandler, ListCustomersHandler,
    UpdateCustomerHandler,
};

/// 应用状态
pub struct AppState {
    /// 存储后端名称（sled / sqlite / memory）
    pub storage_backend: &'static str,

    // ========== Command Handlers ==========
    pub create_customer_handler: CreateCustomerHandler,
    pub update_customer_handler: UpdateCustomerHandler,

    // ========== Query Handlers ==========
    pub get_customer_handler: GetCustomerHandler,
    pub list_customers_handler: ListCustomersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>, storage_backend: &'static str) -> Self {
        Self {
            storage_backend,

            create_customer_handler: CreateCustomerHandler::new(customer_repo.clone()),
            update_customer_handler: UpdateCustomerHandler::new(customer_repo.clone()),

            get_customer_handler: GetCustomerHandler::new(customer_repo.clone()),
            list_customers_handler: ListCustomersHandler::new(customer_repo),
        }
    }
}
