//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error source carried by context-bearing variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for memstash
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The client connection set could not be built or reached
    #[error("Connection error: {message}")]
    Connection {
        /// Description of the connection error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A memcache protocol call failed
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the protocol error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A value or entry envelope could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The value type was never registered with the cache's value codec
    #[error("type not registered with value codec: {type_name}")]
    TypeNotRegistered {
        /// Rust type name of the rejected value
        type_name: String,
    },

    /// No provider is registered under the requested name
    #[error("Cache provider not found: {name}")]
    ProviderNotFound {
        /// Requested provider name
        name: String,
    },

    /// A cache with the same name already exists
    #[error("Cache already exists: {name}")]
    CacheExists {
        /// Name of the existing cache
        name: String,
    },

    /// The provider was used before `initialize` succeeded
    #[error("Cache provider '{provider}' is not initialized")]
    NotInitialized {
        /// Name or kind of the provider
        provider: String,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Connection and protocol error creation methods
impl Error {
    /// Create a connection error
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection error with source
    pub fn connection_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a protocol error
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
            source: None,
        }
    }

    /// Create a protocol error with source
    pub fn protocol_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Protocol {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Serialization error creation methods
impl Error {
    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error with source
    pub fn serialization_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a type-not-registered error
    pub fn type_not_registered<S: Into<String>>(type_name: S) -> Self {
        Self::TypeNotRegistered {
            type_name: type_name.into(),
        }
    }
}

// Registry and lifecycle error creation methods
impl Error {
    /// Create a provider-not-found error
    pub fn provider_not_found<S: Into<String>>(name: S) -> Self {
        Self::ProviderNotFound { name: name.into() }
    }

    /// Create a cache-exists error
    pub fn cache_exists<S: Into<String>>(name: S) -> Self {
        Self::CacheExists { name: name.into() }
    }

    /// Create a not-initialized error
    pub fn not_initialized<S: Into<String>>(provider: S) -> Self {
        Self::NotInitialized {
            provider: provider.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Prefix the message with `prefix` and a space, keeping the variant and source.
    ///
    /// Variants without a free-form message are returned unchanged.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            Self::Configuration { message, source } => Self::Configuration {
                message: format!("{prefix} {message}"),
                source,
            },
            Self::Connection { message, source } => Self::Connection {
                message: format!("{prefix} {message}"),
                source,
            },
            Self::Protocol { message, source } => Self::Protocol {
                message: format!("{prefix} {message}"),
                source,
            },
            Self::Serialization { message, source } => Self::Serialization {
                message: format!("{prefix} {message}"),
                source,
            },
            Self::Internal { message } => Self::Internal {
                message: format!("{prefix} {message}"),
            },
            other => other,
        }
    }

    /// Whether this error belongs to the configuration category
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error came from the network or the memcache protocol
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Protocol { .. })
    }
}
