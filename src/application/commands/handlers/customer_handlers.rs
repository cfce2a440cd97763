//! Customer Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCustomer, UpdateCustomer};
use crate::application::error::ApplicationError;
use crate::application::ports::CustomerRepositoryPort;
use crate::domain::customer::Customer;

// ============================================================================
// CreateCustomer
// ============================================================================

/// CreateCustomer Handler
pub struct CreateCustomerHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl CreateCustomerHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }

    /// 校验名称后写入存储，校验失败时不会访问存储
    pub async fn handle(&self, command: CreateCustomer) -> Result<Customer, ApplicationError> {
        let customer = command.customer;
        customer.validate_for_create()?;

        self.customer_repo.create(&customer).await?;

        tracing::info!(
            customer_id = %customer.id,
            name = %customer.name,
            "Customer created"
        );

        Ok(customer)
    }
}

// ============================================================================
// UpdateCustomer
// ============================================================================

/// UpdateCustomer Handler
pub struct UpdateCustomerHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl UpdateCustomerHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }

    /// 更新客户
    ///
    /// 1. 确认记录存在（查询失败同样视为不存在）
    /// 2. 路径 ID 与请求体 ID 不一致时直接返回，不执行更新
    /// 3. 替换记录的可变字段
    pub async fn handle(&self, command: UpdateCustomer) -> Result<Customer, ApplicationError> {
        let existing = match self.customer_repo.get(&command.id).await {
            Ok(Some(customer)) => customer,
            Ok(None) => return Err(ApplicationError::not_found("Customer", command.id)),
            Err(e) => {
                tracing::warn!(
                    customer_id = %command.id,
                    error = %e,
                    "Customer lookup failed before update"
                );
                return Err(ApplicationError::not_found("Customer", command.id));
            }
        };

        command.customer.ensure_id(&command.id)?;

        self.customer_repo
            .update(&existing.id, &command.customer)
            .await?;

        tracing::info!(
            customer_id = %existing.id,
            name = %command.customer.name,
            "Customer updated"
        );

        Ok(command.customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerError;
    use crate::infrastructure::memory::InMemoryCustomerRepository;

    fn repo() -> Arc<InMemoryCustomerRepository> {
        Arc::new(InMemoryCustomerRepository::new())
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_without_storing() {
        let repo = repo();
        let handler = CreateCustomerHandler::new(repo.clone());

        let result = handler
            .handle(CreateCustomer {
                customer: Customer::new("123", ""),
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Validation(CustomerError::EmptyName))
        ));
        assert!(repo.get("123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_is_repository_error() {
        let repo = repo();
        let handler = CreateCustomerHandler::new(repo.clone());
        let customer = Customer::new("123", "John");

        handler
            .handle(CreateCustomer {
                customer: customer.clone(),
            })
            .await
            .unwrap();
        let second = handler.handle(CreateCustomer { customer }).await;

        assert!(matches!(second, Err(ApplicationError::RepositoryError(_))));
    }

    #[tokio::test]
    async fn test_update_missing_customer_is_not_found() {
        let handler = UpdateCustomerHandler::new(repo());

        let result = handler
            .handle(UpdateCustomer {
                id: "123".to_string(),
                customer: Customer::new("123", "John Test"),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_id_mismatch_leaves_record_unchanged() {
        let repo = repo();
        repo.create(&Customer::new("123", "John")).await.unwrap();
        let handler = UpdateCustomerHandler::new(repo.clone());

        let result = handler
            .handle(UpdateCustomer {
                id: "123".to_string(),
                customer: Customer::new("1234", "John Test"),
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Validation(CustomerError::IdMismatch { .. }))
        ));
        let stored = repo.get("123").await.unwrap().unwrap();
        assert_eq!(stored.name, "John");
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = repo();
        repo.create(&Customer::new("123", "John")).await.unwrap();
        let handler = UpdateCustomerHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateCustomer {
                id: "123".to_string(),
                customer: Customer::new("123", "John Test"),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "John Test");
        let stored = repo.get("123").await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }
}
