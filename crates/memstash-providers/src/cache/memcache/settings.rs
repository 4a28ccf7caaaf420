//! Client settings resolved from a `cache.<name>` block

use std::time::Duration;

use memstash_domain::error::{Error, Result};
use memstash_domain::value_objects::ProviderSettings;

use crate::constants::{DEFAULT_MEMCACHE_ADDRESS, DEFAULT_MEMCACHE_TIMEOUT, MEMCACHE_URL_SCHEME};
use crate::utils::parse_duration_or;

/// Connection settings for one memcache server set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Server addresses as `host:port`
    pub addresses: Vec<String>,
    /// Pooled connections per server, `None` keeps the client default
    pub pool_size: Option<u32>,
    /// Socket read/write timeout
    pub timeout: Duration,
}

impl ClientSettings {
    /// Resolve the settings of block `name`, applying defaults
    pub fn resolve(name: &str, settings: &ProviderSettings) -> Result<Self> {
        let addresses = match &settings.addresses {
            None => vec![DEFAULT_MEMCACHE_ADDRESS.to_string()],
            Some(list) => list
                .iter()
                .map(|address| normalize_address(name, address))
                .collect::<Result<Vec<_>>>()?,
        };
        if addresses.is_empty() {
            return Err(Error::configuration(format!(
                "cache/{name}: no servers configured"
            )));
        }

        let pool_size = match settings.max_idle_conns {
            Some(0) => {
                return Err(Error::configuration(format!(
                    "cache/{name}: max_idle_conns must be greater than zero"
                )));
            }
            other => other,
        };

        Ok(Self {
            addresses,
            pool_size,
            timeout: parse_duration_or(settings.timeout.as_deref(), default_timeout()),
        })
    }

    /// Client connection URLs, one per address
    pub fn urls(&self) -> Vec<String> {
        let timeout = self.timeout.as_secs_f64();
        self.addresses
            .iter()
            .map(|address| format!("{MEMCACHE_URL_SCHEME}{address}?timeout={timeout}"))
            .collect()
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            addresses: vec![DEFAULT_MEMCACHE_ADDRESS.to_string()],
            pool_size: None,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> Duration {
    humantime::parse_duration(DEFAULT_MEMCACHE_TIMEOUT).unwrap_or(Duration::from_secs(5))
}

/// Strip an optional URL scheme and check the `host:port` shape
fn normalize_address(name: &str, address: &str) -> Result<String> {
    let trimmed = address.trim();
    let bare = trimmed.strip_prefix(MEMCACHE_URL_SCHEME).unwrap_or(trimmed);

    let valid = bare
        .rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
    if !valid {
        return Err(Error::configuration(format!(
            "cache/{name}: invalid server address '{address}', expected host:port"
        )));
    }
    Ok(bare.to_string())
}
