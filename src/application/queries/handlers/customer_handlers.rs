//! Customer Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CustomerRepositoryPort;
use crate::application::queries::{GetCustomer, ListCustomers};
use crate::domain::customer::Customer;

/// GetCustomer Handler
pub struct GetCustomerHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl GetCustomerHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }

    pub async fn handle(&self, query: GetCustomer) -> Result<Customer, ApplicationError> {
        self.customer_repo
            .get(&query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer", query.id))
    }
}

/// ListCustomers Handler
pub struct ListCustomersHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl ListCustomersHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }

    pub async fn handle(&self, _query: ListCustomers) -> Result<Vec<Customer>, ApplicationError> {
        Ok(self.customer_repo.get_all().await?)
    }
}
