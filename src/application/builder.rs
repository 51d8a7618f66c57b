use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{BlobStore, ItemRepository},
    use_cases::{
        CreateItemUseCase, DeleteItemUseCase, DeleteItemWithBlobUseCase, FindItemsByTagUseCase,
        GetItemUseCase, ListItemsUseCase, ListTagsUseCase, UpdateItemUseCase, UploadItemUseCase,
    },
};
use crate::config::{BlobBackend, Config};
use crate::infrastructure::{
    persistence::PostgresItemRepository,
    storage::{AzureBlobStore, LocalFilesystemStore},
};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    blob_store: Option<Arc<dyn BlobStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            item_repo: None,
            blob_store: None,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
            self.config.db_idle_timeout_secs,
            self.config.db_max_lifetime_secs
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Initialize infrastructure layer (repository and blob store)
    pub async fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        let item_repo: Arc<dyn ItemRepository> =
            Arc::new(PostgresItemRepository::new(pool.clone()));

        let blob_store: Arc<dyn BlobStore> = match self.config.blob_backend()? {
            BlobBackend::Local => {
                let store = LocalFilesystemStore::new(
                    self.config.blob_local_root.clone(),
                    self.config.blob_public_base_url.clone(),
                );
                store.init().await?;
                Arc::new(store)
            }
            BlobBackend::Azure => Arc::new(AzureBlobStore::new(&self.config.azure)?),
        };

        self.item_repo = Some(item_repo);
        self.blob_store = Some(blob_store);

        info!(backend = %self.config.blob_backend_name, "Infrastructure layer initialized");
        Ok(self)
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let item_repo = self.item_repo.ok_or("Item repository not initialized")?;
        let blob_store = self.blob_store.ok_or("Blob store not initialized")?;

        let state = build_state(Arc::new(pool), item_repo, blob_store, &self.config);

        info!("Application layer initialized");
        Ok(state)
    }
}

/// Wire use cases over already constructed adapters
pub fn build_state(
    pool: Arc<sqlx::PgPool>,
    item_repo: Arc<dyn ItemRepository>,
    blob_store: Arc<dyn BlobStore>,
    config: &Config,
) -> AppState {
    let io_timeout = config.io_timeout();

    AppState {
        pool,
        list_use_case: Arc::new(ListItemsUseCase::new(Arc::clone(&item_repo))),
        get_use_case: Arc::new(GetItemUseCase::new(Arc::clone(&item_repo))),
        create_use_case: Arc::new(CreateItemUseCase::new(Arc::clone(&item_repo))),
        update_use_case: Arc::new(UpdateItemUseCase::new(Arc::clone(&item_repo))),
        delete_use_case: Arc::new(DeleteItemUseCase::new(Arc::clone(&item_repo))),
        upload_use_case: Arc::new(
            UploadItemUseCase::new(Arc::clone(&item_repo), Arc::clone(&blob_store))
                .with_timeout(io_timeout),
        ),
        delete_with_blob_use_case: Arc::new(
            DeleteItemWithBlobUseCase::new(Arc::clone(&item_repo), Arc::clone(&blob_store))
                .with_timeout(io_timeout),
        ),
        list_tags_use_case: Arc::new(ListTagsUseCase::new(Arc::clone(&item_repo))),
        find_by_tag_use_case: Arc::new(FindItemsByTagUseCase::new(item_repo)),
        max_upload_bytes: config.max_upload_bytes,
        allowed_origins: config.allowed_origins.clone(),
    }
}
