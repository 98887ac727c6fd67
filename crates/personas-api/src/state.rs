//! Application state wiring all services together.
//!
//! Services are generic over repository traits, but AppState pins them to the
//! SQLite implementations from personas-infra.

use std::path::PathBuf;
use std::sync::Arc;

use personas_core::service::company::CompanyService;
use personas_core::service::message::MessageService;
use personas_core::service::persona::PersonaService;
use personas_infra::config::{
    apply_env_overrides, load_service_config, resolve_data_dir, resolve_database_url,
};
use personas_infra::sqlite::company::SqliteCompanyRepository;
use personas_infra::sqlite::message::SqliteMessageRepository;
use personas_infra::sqlite::persona::SqlitePersonaRepository;
use personas_infra::sqlite::pool::DatabasePool;
use personas_types::config::ServiceConfig;

pub type ConcreteCompanyService = CompanyService<SqliteCompanyRepository>;
pub type ConcretePersonaService = PersonaService<SqlitePersonaRepository>;
pub type ConcreteMessageService = MessageService<SqliteMessageRepository>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<ConcreteCompanyService>,
    pub persona_service: Arc<ConcretePersonaService>,
    pub message_service: Arc<ConcreteMessageService>,
    pub config: ServiceConfig,
    pub data_dir: PathBuf,
    pub database_url: String,
}

impl AppState {
    /// Initialize the application state: load config, open the database
    /// (ensuring the schema), wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_service_config(&data_dir).await;
        let config = apply_env_overrides(config, |key| std::env::var(key).ok());

        let database_url = resolve_database_url(&config, &data_dir);
        let db_pool = DatabasePool::new(&database_url).await?;
        tracing::info!(data_dir = %data_dir.display(), "database ready");

        Ok(Self::from_parts(db_pool, config, data_dir, database_url))
    }

    /// Wire services around an already opened pool.
    pub fn from_parts(
        db_pool: DatabasePool,
        config: ServiceConfig,
        data_dir: PathBuf,
        database_url: String,
    ) -> Self {
        Self {
            company_service: Arc::new(CompanyService::new(SqliteCompanyRepository::new(
                db_pool.clone(),
            ))),
            persona_service: Arc::new(PersonaService::new(SqlitePersonaRepository::new(
                db_pool.clone(),
            ))),
            message_service: Arc::new(MessageService::new(SqliteMessageRepository::new(db_pool))),
            config,
            data_dir,
            database_url,
        }
    }
}
