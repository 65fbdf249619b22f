//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! ChatService is generic over its repository and inference traits; AppState
//! pins them to the SQLite and Ollama implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chatline_core::chat::service::ChatService;
use chatline_infra::config::{database_path, load_config, resolve_data_dir};
use chatline_infra::llm::ollama::OllamaClient;
use chatline_infra::sqlite::conversation::SqliteConversationRepository;
use chatline_infra::sqlite::pool::{database_url, DatabasePool};
use chatline_types::config::AppConfig;

/// Concrete type alias for the chat service pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteConversationRepository, OllamaClient>;

/// Shared application state.
///
/// Cheap to clone; handlers receive it through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Resolve the data directory, load config, connect to the DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        Self::from_config(&data_dir, config).await
    }

    /// Wire services from an already loaded configuration.
    pub async fn from_config(data_dir: &Path, config: AppConfig) -> anyhow::Result<Self> {
        let db_url = database_url(&database_path(data_dir, &config));
        let db_pool = DatabasePool::new(&db_url).await?;
        tracing::debug!(url = %db_url, "Database ready");

        let repo = SqliteConversationRepository::new(db_pool.clone());
        let inference = OllamaClient::new(&config.inference.base_url, &config.inference.model);
        let chat_service = ChatService::new(repo, inference, config.inference.persona.clone());

        Ok(Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
            data_dir: data_dir.to_path_buf(),
            db_pool,
        })
    }

    /// Release the database connections.
    pub async fn shutdown(&self) {
        self.db_pool.close().await;
        tracing::debug!("Database pools closed");
    }
}
