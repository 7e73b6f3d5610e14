//! Application state - shared across all handlers.

use std::sync::Arc;

use polls_core::PollService;
use polls_infra::InMemoryPollStore;
use polls_infra::database::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "postgres")]
use polls_infra::database::{PostgresChoiceRepository, PostgresQuestionRepository};

use crate::templates::Templates;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub polls: PollService,
    pub templates: Arc<Templates>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state, falling back to the in-memory store
    /// when no database is configured or reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let polls = PollService::new(
                            Arc::new(PostgresQuestionRepository::new(conn.main.clone())),
                            Arc::new(PostgresChoiceRepository::new(conn.main.clone())),
                        );
                        tracing::info!("Application state initialized (postgres)");
                        return Ok(Self {
                            polls,
                            templates: Arc::new(Templates::new()?),
                            db: Some(conn),
                        });
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
        }

        Self::in_memory(Arc::new(InMemoryPollStore::new()))
    }

    /// State backed by an in-memory store.
    pub fn in_memory(store: Arc<InMemoryPollStore>) -> anyhow::Result<Self> {
        Ok(Self {
            polls: PollService::new(store.clone(), store),
            templates: Arc::new(Templates::new()?),
            db: None,
        })
    }
}
