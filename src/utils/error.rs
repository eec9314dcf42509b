use serde_json::{json, Value};
use thiserror::Error;

/// Failures raised by a [`PersonStore`](crate::domain::ports::PersonStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cast to {kind} failed for value \"{value}\" at path \"{path}\"")]
    Cast {
        path: String,
        value: String,
        kind: String,
    },

    #[error("Document store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Document store error: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn name(&self) -> &'static str {
        match self {
            StoreError::Cast { .. } => "CastError",
            StoreError::Unavailable { .. } => "StoreUnavailableError",
            StoreError::Backend { .. } => "StoreError",
        }
    }

    /// 原始錯誤內容，放進回應的 `details` 欄位
    pub fn details(&self) -> Value {
        match self {
            StoreError::Cast { path, value, kind } => json!({
                "name": self.name(),
                "message": self.to_string(),
                "path": path,
                "value": value,
                "kind": kind,
            }),
            _ => json!({
                "name": self.name(),
                "message": self.to_string(),
            }),
        }
    }

    /// Whether the store refused the document itself rather than failing to answer.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Cast { .. })
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Network interface '{name}' not found or has no address")]
    InterfaceNotFound { name: String },

    #[error("Hostname could not be determined")]
    HostnameUnavailable,
}

impl ServiceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::Store(_) => "Check that the document store is reachable at the configured URL",
            ServiceError::IoError(_) => "Check that the path exists and the process has permission to use it",
            ServiceError::ConfigError { .. }
            | ServiceError::ConfigValidationError { .. }
            | ServiceError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
            ServiceError::InterfaceNotFound { .. } => {
                "Set probes.interface to an interface listed by `ip link`"
            }
            ServiceError::HostnameUnavailable => "Check the host's hostname configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
