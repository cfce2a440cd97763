//! HTTP Routes
//!
//! API Endpoints:
//! - /customers       GET   列出所有客户
//! - /customers       POST  新建客户
//! - /customers/:id   GET   获取客户详情
//! - /customers/:id   PUT   更新客户
//! - /ping            GET   健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(customer_routes())
}

/// Customer 路由
fn customer_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/customers/:id",
            get(handlers::get_customer).put(handlers::update_customer),
        )
}
