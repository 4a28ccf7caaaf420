//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "memstash.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "memstash";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "MEMSTASH";

/// Separator between prefix and nested keys in environment variables
///
/// `MEMSTASH__CACHE__SESSIONS__TIMEOUT=2s` sets `cache.sessions.timeout`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a log filter that overrides the configured level
pub const LOG_FILTER_ENV: &str = "MEMSTASH_LOG";

/// File name prefix for rolled log files when the configured path has none
pub const DEFAULT_LOG_FILE_PREFIX: &str = "memstash";
