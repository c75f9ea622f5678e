//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built `pkg/` bundle; `None` keeps the Leptos
    /// configured site root.
    pub site_root: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, site_root: None }
    }
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: static bundle directory, default from the Leptos config
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build host config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let host = parse_host(lookup("HOST").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_root = lookup("SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    /// Static bundle directory: the `SITE_ROOT` override, else `configured`.
    pub fn site_root_or(&self, configured: &str) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| Path::new(configured).to_path_buf())
    }
}

/// Tracing filter from a `RUST_LOG` value; unset or invalid means `info`.
pub fn log_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(other) => other
            .parse()
            .map_err(|_| HostError::ConfigParse(format!("invalid HOST: {other}"))),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(other) => other
            .parse()
            .map_err(|_| HostError::ConfigParse(format!("invalid PORT: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
