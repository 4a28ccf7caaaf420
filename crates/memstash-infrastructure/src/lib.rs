//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for memstash:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: tracing subscriber setup
//! - [`error_ext`]: context helpers that convert foreign errors into the
//!   domain error type

/// Configuration management
pub mod config;
/// Infrastructure layer constants
pub mod constants;
/// Error extension utilities
pub mod error_ext;
/// Structured logging with tracing
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
