//! SQLite Customer Repository

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{FromRow, Sqlite};

use super::DbPool;
use crate::application::ports::{CustomerRepositoryPort, RepositoryError};
use crate::domain::customer::Customer;

/// SQLite Customer Repository
///
/// `phones` 以 JSON 数组形式存储在单列中
pub struct SqliteCustomerRepository {
    pool: DbPool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 从连接池获取单次操作使用的连接，drop 时归还
    async fn connection(&self) -> Result<PoolConnection<Sqlite>, RepositoryError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }
}

#[derive(FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    phones: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(Customer {
            id: row.id,
            name: row.name,
            phones: serde_json::from_str(&row.phones)?,
        })
    }
}

#[async_trait]
impl CustomerRepositoryPort for SqliteCustomerRepository {
    async fn get(&self, id: &str) -> Result<Option<Customer>, RepositoryError> {
        let mut conn = self.connection().await?;

        let row: Option<CustomerRow> =
            sqlx::query_as("SELECT id, name, phones FROM customers WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Customer::try_from).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.connection().await?;

        let rows: Vec<CustomerRow> =
            sqlx::query_as("SELECT id, name, phones FROM customers ORDER BY rowid")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let phones = serde_json::to_string(&customer.phones)?;
        let mut conn = self.connection().await?;

        sqlx::query("INSERT INTO customers (id, name, phones) VALUES (?, ?, ?)")
            .bind(&customer.id)
            .bind(&customer.name)
            .bind(phones)
            .execute(&mut *conn)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    RepositoryError::Duplicate(customer.id.clone())
                }
                e => RepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(())
    }

    async fn update(&self, id: &str, customer: &Customer) -> Result<(), RepositoryError> {
        let phones = serde_json::to_string(&customer.phones)?;
        let mut conn = self.connection().await?;

        let result = sqlx::query("UPDATE customers SET name = ?, phones = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(phones)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            tracing::debug!(customer_id = %id, "Update skipped, customer not found");
        }

        Ok(())
    }
}
