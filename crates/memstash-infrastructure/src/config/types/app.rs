//! Application configuration root

use memstash_domain::value_objects::CacheSection;
use serde::{Deserialize, Serialize};

use super::LoggingConfig;

/// Root of the application configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [cache.memcache1]
/// provider = "memcache"
/// addresses = ["localhost:11211"]
/// max_idle_conns = 4
/// timeout = "5s"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Named `cache.<name>` provider blocks
    pub cache: CacheSection,
}
