//! In-Memory Customer Repository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{CustomerRepositoryPort, RepositoryError};
use crate::domain::customer::Customer;

/// 内存客户仓储
///
/// 用于测试及 `database.backend = "memory"`，进程退出后数据丢失
pub struct InMemoryCustomerRepository {
    customers: DashMap<String, Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepositoryPort for InMemoryCustomerRepository {
    async fn get(&self, id: &str) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.customers.get(id).map(|c| c.clone()))
    }

    async fn get_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let mut customers: Vec<Customer> =
            self.customers.iter().map(|c| c.value().clone()).collect();
        customers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(customers)
    }

    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        match self.customers.entry(customer.id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(customer.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(customer.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, id: &str, customer: &Customer) -> Result<(), RepositoryError> {
        if let Some(mut stored) = self.customers.get_mut(id) {
            stored.replace_fields(customer);
        } else {
            tracing::debug!(customer_id = %id, "Update skipped, customer not found");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("123", "John");

        repo.create(&customer).await.unwrap();

        assert_eq!(repo.get("123").await.unwrap(), Some(customer));
        assert_eq!(repo.get("456").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_create() {
        let repo = InMemoryCustomerRepository::new();
        repo.create(&Customer::new("123", "John")).await.unwrap();

        let result = repo.create(&Customer::new("123", "Jane")).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
        assert_eq!(repo.get("123").await.unwrap().unwrap().name, "John");
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let repo = InMemoryCustomerRepository::new();
        repo.update("123", &Customer::new("123", "John")).await.unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
