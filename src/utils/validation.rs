use crate::utils::error::{Result, ServiceError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts `mongodb://` and `mongodb+srv://` connection strings.
pub fn validate_database_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "mongodb" | "mongodb+srv" => Ok(()),
            scheme => Err(ServiceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_database_url() {
        assert!(validate_database_url("database.url", "mongodb://mongo/people").is_ok());
        assert!(validate_database_url("database.url", "mongodb+srv://cluster.example.com/people").is_ok());
        assert!(validate_database_url("database.url", "").is_err());
        assert!(validate_database_url("database.url", "not a url").is_err());
        assert!(validate_database_url("database.url", "postgres://db/people").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("probes.read_dir", "/data").is_ok());
        assert!(validate_path("probes.read_dir", "").is_err());
        assert!(validate_path("probes.read_dir", "/da\0ta").is_err());
    }

    #[test]
    fn test_validate_port_and_strings() {
        assert!(validate_port("server.port", 3000).is_ok());
        assert!(validate_port("server.port", 0).is_err());
        assert!(validate_non_empty_string("probes.interface", "eth0").is_ok());
        assert!(validate_non_empty_string("probes.interface", "   ").is_err());
    }
}
