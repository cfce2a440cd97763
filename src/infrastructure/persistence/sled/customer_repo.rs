//! Sled-based Customer Document Store

use async_trait::async_trait;
use sled::{Db, Tree};
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{CustomerRepositoryPort, RepositoryError, CUSTOMERS_COLLECTION};
use crate::domain::customer::Customer;

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

/// Sled 客户仓储
///
/// 每个客户以 JSON 文档形式存放在 `customers` tree 中，key 为客户 ID。
/// key 唯一，新建时通过 compare-and-swap 拒绝已存在的 ID。
pub struct SledCustomerRepository {
    db: Db,
}

impl SledCustomerRepository {
    /// 打开数据库并确保 `customers` tree 存在
    pub fn new(config: &SledStoreConfig) -> Result<Self, RepositoryError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        db.open_tree(CUSTOMERS_COLLECTION)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            collection = CUSTOMERS_COLLECTION,
            "SledCustomerRepository initialized"
        );

        Ok(Self { db })
    }

    /// 打开现有数据库
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 获取集合句柄（单次操作使用，随作用域结束释放）
    fn collection(&self) -> Result<Tree, RepositoryError> {
        self.db
            .open_tree(CUSTOMERS_COLLECTION)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), RepositoryError> {
        self.db
            .flush()
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CustomerRepositoryPort for SledCustomerRepository {
    async fn get(&self, id: &str) -> Result<Option<Customer>, RepositoryError> {
        let collection = self.collection()?;

        match collection.get(id.as_bytes()) {
            Ok(Some(data)) => Ok(Some(serde_json::from_slice(&data)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(RepositoryError::DatabaseError(e.to_string())),
        }
    }

    async fn get_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let collection = self.collection()?;

        let mut customers = Vec::new();
        for item in collection.iter().values() {
            let data = item.map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
            customers.push(serde_json::from_slice(&data)?);
        }

        Ok(customers)
    }

    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let collection = self.collection()?;
        let document = serde_json::to_vec(customer)?;

        collection
            .compare_and_swap(customer.id.as_bytes(), None::<&[u8]>, Some(document))
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?
            .map_err(|_| RepositoryError::Duplicate(customer.id.clone()))?;

        tracing::debug!(customer_id = %customer.id, "Customer document inserted");

        Ok(())
    }

    async fn update(&self, id: &str, customer: &Customer) -> Result<(), RepositoryError> {
        let collection = self.collection()?;

        // 闭包内无法直接返回错误，先记录下来，并保留旧值
        let mut failure: Option<RepositoryError> = None;
        let previous = collection
            .fetch_and_update(id.as_bytes(), |old| {
                // CAS 冲突时闭包会重试，只保留最后一次的结果
                failure = None;
                let old = old?;
                let replaced = serde_json::from_slice::<Customer>(old).and_then(|mut stored| {
                    stored.replace_fields(customer);
                    serde_json::to_vec(&stored)
                });
                match replaced {
                    Ok(document) => Some(document),
                    Err(e) => {
                        failure = Some(e.into());
                        Some(old.to_vec())
                    }
                }
            })
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if let Some(e) = failure {
            return Err(e);
        }

        if previous.is_none() {
            tracing::debug!(customer_id = %id, "Update skipped, customer not found");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Phone;
    use tempfile::tempdir;

    fn open_repo(dir: &tempfile::TempDir) -> SledCustomerRepository {
        let config = SledStoreConfig {
            db_path: dir.path().join("test.sled").to_string_lossy().to_string(),
        };
        SledCustomerRepository::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_create_get() {
        let dir = tempdir().unwrap();
        let repo = open_repo(&dir);

        let customer =
            Customer::new("123", "John").with_phones(vec![Phone::new("mobile", "555-0100")]);
        repo.create(&customer).await.unwrap();

        let result = repo.get("123").await.unwrap();
        assert_eq!(result, Some(customer));
        assert_eq!(repo.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let dir = tempdir().unwrap();
        let repo = open_repo(&dir);

        repo.create(&Customer::new("123", "John")).await.unwrap();
        let result = repo.create(&Customer::new("123", "Jane")).await;

        assert!(matches!(result, Err(RepositoryError::Duplicate(id)) if id == "123"));
        assert_eq!(repo.get("123").await.unwrap().unwrap().name, "John");
    }

    #[tokio::test]
    async fn test_get_all() {
        let dir = tempdir().unwrap();
        let repo = open_repo(&dir);
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.create(&Customer::new("1", "A")).await.unwrap();
        repo.create(&Customer::new("2", "B")).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() {
        let dir = tempdir().unwrap();
        let repo = open_repo(&dir);
        repo.create(&Customer::new("123", "John")).await.unwrap();

        let incoming = Customer::new("123", "John Test")
            .with_phones(vec![Phone::new("home", "555-0199")]);
        repo.update("123", &incoming).await.unwrap();

        assert_eq!(repo.get("123").await.unwrap(), Some(incoming));
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let dir = tempdir().unwrap();
        let repo = open_repo(&dir);

        repo.update("123", &Customer::new("123", "John")).await.unwrap();

        assert_eq!(repo.get("123").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reopen_keeps_documents_and_unique_ids() {
        let dir = tempdir().unwrap();
        let customer =
            Customer::new("123", "John").with_phones(vec![Phone::new("mobile", "555-0100")]);

        {
            let repo = open_repo(&dir);
            repo.create(&customer).await.unwrap();
            repo.flush().unwrap();
        }

        let repo = open_repo(&dir);
        assert_eq!(repo.get("123").await.unwrap(), Some(customer));

        let result = repo.create(&Customer::new("123", "Jane")).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(id)) if id == "123"));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }
}
