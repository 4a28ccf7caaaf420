//! Provider-specific constants

// ============================================================================
// MEMCACHE PROVIDER
// ============================================================================

/// Provider kind expected in `cache.<name>.provider`
pub const MEMCACHE_PROVIDER_KIND: &str = "memcache";

/// Human-readable registry description
pub const MEMCACHE_PROVIDER_DESCRIPTION: &str = "Memcache server backed cache provider";

/// Server address used when a block lists none
pub const DEFAULT_MEMCACHE_ADDRESS: &str = "127.0.0.1:11211";

/// Read/write timeout used when a block sets none or an unparsable one
pub const DEFAULT_MEMCACHE_TIMEOUT: &str = "5s";

/// URL scheme understood by the memcache client
pub const MEMCACHE_URL_SCHEME: &str = "memcache://";

/// Separator between cache name and item key
pub const CACHE_KEY_SEPARATOR: &str = "-";

/// Suffix of the key read once during initialization to probe the servers
pub const PROBE_KEY_SUFFIX: &str = "-testkey";

/// Longest key the memcache protocol accepts
pub const MEMCACHE_MAX_KEY_LENGTH: usize = 250;

// ============================================================================
// BUFFER POOL
// ============================================================================

/// Idle buffers kept for reuse
pub const BUFFER_POOL_MAX_IDLE: usize = 64;

/// Buffers that grew beyond this capacity are dropped instead of pooled
pub const BUFFER_POOL_MAX_CAPACITY: usize = 64 * 1024;
