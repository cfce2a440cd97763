//! Customer HTTP Handlers
//!
//! - GET  /customers      列出所有客户
//! - GET  /customers/:id  获取客户详情
//! - POST /customers      新建客户
//! - PUT  /customers/:id  更新客户

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    ApplicationError, CreateCustomer, GetCustomer, ListCustomers, UpdateCustomer,
};
use crate::domain::customer::Customer;
use crate::infrastructure::http::dto::SuccessResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const LIST_FAILED: &str = "Could not get Customers list";
const NOT_FOUND: &str = "Customer not found";
const EMPTY_NAME: &str = "Customer name could not be empty";
const INVALID_ID: &str = "Could not update customer (Invalid ID)";
const UPDATE_FAILED: &str = "Could not update customer";

/// 获取客户列表
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state
        .list_customers_handler
        .handle(ListCustomers)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list customers");
            ApiError::Internal(LIST_FAILED.to_string())
        })?;

    Ok(Json(customers))
}

/// 获取客户详情（任何错误均返回 404）
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .get_customer_handler
        .handle(GetCustomer { id })
        .await
        .map_err(|e| {
            if let ApplicationError::RepositoryError(_) = e {
                tracing::error!(error = %e, "Failed to load customer");
            }
            ApiError::NotFound(NOT_FOUND.to_string())
        })?;

    Ok(Json(customer))
}

/// 新建客户
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<Customer>>), ApiError> {
    let Json(customer) = payload?;
    let name = customer.name.clone();

    let created = state
        .create_customer_handler
        .handle(CreateCustomer { customer })
        .await
        .map_err(|e| match e {
            ApplicationError::Validation(_) => ApiError::Unprocessable(EMPTY_NAME.to_string()),
            e => {
                tracing::error!(error = %e, "Failed to create customer");
                ApiError::Internal(format!("Could not create customer ({})", name))
            }
        })?;

    Ok((StatusCode::CREATED, Json(SuccessResponse::new(created))))
}

/// 更新客户
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<Json<SuccessResponse<Customer>>, ApiError> {
    // 先确认记录存在，再处理请求体
    let customer = match payload {
        Ok(Json(customer)) => customer,
        Err(rejection) => {
            state
                .get_customer_handler
                .handle(GetCustomer { id })
                .await
                .map_err(|_| ApiError::NotFound(NOT_FOUND.to_string()))?;
            return Err(rejection.into());
        }
    };

    let updated = state
        .update_customer_handler
        .handle(UpdateCustomer { id, customer })
        .await
        .map_err(|e| match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(NOT_FOUND.to_string()),
            ApplicationError::Validation(_) => ApiError::Unprocessable(INVALID_ID.to_string()),
            e => {
                tracing::error!(error = %e, "Failed to update customer");
                ApiError::Unprocessable(UPDATE_FAILED.to_string())
            }
        })?;

    Ok(Json(SuccessResponse::new(updated)))
}
