//! Dashboard runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that need
//! it. Nothing in this crate reads environment variables; the binary collects the raw values and
//! hands them to [`DashboardConfig::from_env_values`].

use crate::constants::DEFAULT_LISTEN_ADDR;
use crate::{CoreError, CoreResult};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    listen_addr: SocketAddr,
    fixture_file: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn new(listen_addr: SocketAddr, fixture_file: Option<PathBuf>) -> Self {
        Self {
            listen_addr,
            fixture_file,
        }
    }

    /// Build a configuration from optional raw environment values.
    ///
    /// `None` or blank values fall back to the defaults, which reproduce the zero-configuration
    /// dashboard: the built-in fixtures served on [`DEFAULT_LISTEN_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAddress` if the address cannot be parsed as a socket address.
    pub fn from_env_values(addr: Option<String>, fixture_file: Option<String>) -> CoreResult<Self> {
        let addr = non_blank(addr).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = addr
            .parse::<SocketAddr>()
            .map_err(|_| CoreError::InvalidAddress(addr.clone()))?;

        Ok(Self::new(listen_addr, non_blank(fixture_file).map(PathBuf::from)))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn fixture_file(&self) -> Option<&Path> {
        self.fixture_file.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
