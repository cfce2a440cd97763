//! Customers - 客户资源 REST API 服务入口

use std::sync::Arc;

use customers::application::CustomerRepositoryPort;
use customers::config::{load_config, print_config, AppConfig, StorageBackend};
use customers::infrastructure::http::{AppState, HttpServer, ServerConfig};
use customers::infrastructure::memory::InMemoryCustomerRepository;
use customers::infrastructure::persistence::sled::SledCustomerRepository;
use customers::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, DbPool, SqliteCustomerRepository,
};

/// 已打开的存储，进程退出前需要关闭
struct Storage {
    repo: Arc<dyn CustomerRepositoryPort>,
    sled: Option<Arc<SledCustomerRepository>>,
    pool: Option<DbPool>,
}

impl Storage {
    /// 打开配置的存储后端，失败时进程无法继续
    async fn open(config: &AppConfig) -> anyhow::Result<Self> {
        let database = &config.database;

        if database.backend.is_persistent() {
            tokio::fs::create_dir_all(&database.host).await?;
        }

        let storage = match database.backend {
            StorageBackend::Sled => {
                let repo = Arc::new(SledCustomerRepository::open(database.sled_path())?);
                Self {
                    repo: repo.clone(),
                    sled: Some(repo),
                    pool: None,
                }
            }
            StorageBackend::Sqlite => {
                let db_config = DatabaseConfig {
                    database_url: database.database_url(),
                    max_connections: database.max_connections,
                };
                let pool = create_pool(&db_config).await?;
                run_migrations(&pool).await?;
                Self {
                    repo: Arc::new(SqliteCustomerRepository::new(pool.clone())),
                    sled: None,
                    pool: Some(pool),
                }
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data will be lost on shutdown");
                Self {
                    repo: InMemoryCustomerRepository::new().arc(),
                    sled: None,
                    pool: None,
                }
            }
        };

        Ok(storage)
    }

    async fn close(self) -> anyhow::Result<()> {
        if let Some(sled) = self.sled {
            sled.flush()?;
            tracing::info!("Sled store flushed");
        }
        if let Some(pool) = self.pool {
            pool.close().await;
            tracing::info!("SQLite pool closed");
        }
        Ok(())
    }
}

fn init_logging(config: &AppConfig) {
    let log_filter = format!(
        "{},customers={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config);

    tracing::info!("Customers REST API");
    print_config(&config);

    let storage = Storage::open(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open {} storage: {}", config.database.backend, e))?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let state = AppState::new(storage.repo.clone(), config.database.backend.as_str());

    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    storage.close().await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
