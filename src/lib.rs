pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

#[cfg(feature = "mongo")]
pub use adapters::MongoPersonStore;

pub use adapters::MemoryPersonStore;
pub use app::{router, AppState, Server};
pub use config::AppConfig;
pub use crate::core::{directory::PersonDirectory, PersonStore};
pub use utils::error::{Result, ServiceError, StoreError};
