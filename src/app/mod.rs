//! HTTP surface: shared state, routes and the server lifecycle.

pub mod extract;
pub mod handlers;
pub mod server;

use crate::config::{AppConfig, StoreBackend};
use crate::core::PersonDirectory;
use crate::domain::ports::PersonStore;
use crate::utils::error::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use server::Server;

/// Per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub directory: PersonDirectory,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn PersonStore>) -> Self {
        Self {
            directory: PersonDirectory::new(store),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/create_person", post(handlers::create_person))
        .route("/show_all", get(handlers::show_all))
        .route("/file", get(handlers::write_file))
        .route("/read", get(handlers::read_dir))
        .route("/host", get(handlers::host))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Opens the configured store once; the handle is shared by all requests.
pub async fn connect_store(config: &AppConfig) -> Result<Arc<dyn PersonStore>> {
    match config.database.backend {
        StoreBackend::Memory => {
            tracing::warn!("⚠️ Using in-memory store, data is lost on restart");
            Ok(Arc::new(crate::adapters::MemoryPersonStore::new()))
        }
        #[cfg(feature = "mongo")]
        StoreBackend::Mongo => {
            tracing::info!("🔌 Connecting to document store");
            let store = crate::adapters::MongoPersonStore::connect(
                &config.database.url,
                &config.database.collection,
            )
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongo"))]
        StoreBackend::Mongo => Err(crate::utils::error::ServiceError::ConfigError {
            message: "database.backend = \"mongo\" requires the `mongo` feature".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryPersonStore;

    #[tokio::test]
    async fn test_connect_memory_store() {
        let mut config = AppConfig::default();
        config.database.backend = StoreBackend::Memory;

        let store = connect_store(&config).await.unwrap();
        assert_eq!(store.backend(), "memory");
    }

    #[test]
    fn test_state_shares_store() {
        let store = MemoryPersonStore::new();
        let state = AppState::new(AppConfig::default(), Arc::new(store));
        let cloned = state.clone();

        assert_eq!(cloned.directory.backend(), "memory");
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }
}
