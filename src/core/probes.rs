//! Stateless filesystem and host probes.
//!
//! Each probe delegates straight to the OS; failures are returned untranslated.

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;
use sysinfo::{Networks, System};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    pub hostname: String,
    pub network: IpAddr,
}

/// Overwrites `path` with `contents`.
pub async fn write_probe_file(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    tokio::fs::write(path.as_ref(), contents).await?;
    tracing::debug!("Wrote probe file {}", path.as_ref().display());
    Ok(())
}

/// Entry names of `path`, sorted by name.
pub async fn list_directory(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(path.as_ref()).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}

/// Hostname plus the first address bound to `interface`.
pub fn host_info(interface: &str) -> Result<HostInfo> {
    let hostname = System::host_name().ok_or(ServiceError::HostnameUnavailable)?;
    let network = interface_address(interface)?;
    Ok(HostInfo { hostname, network })
}

fn interface_address(interface: &str) -> Result<IpAddr> {
    let networks = Networks::new_with_refreshed_list();
    networks
        .list()
        .get(interface)
        .and_then(|data| data.ip_networks().first())
        .map(|ip| ip.addr)
        .ok_or_else(|| ServiceError::InterfaceNotFound {
            name: interface.to_string(),
        })
}

/// Reads the index asset verbatim.
pub async fn read_index(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path.as_ref()).await?)
}
