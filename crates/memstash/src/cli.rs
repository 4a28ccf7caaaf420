//! Operator command line
//!
//! Each invocation loads the configuration, initializes logging and every
//! configured provider, then runs one command against a cache namespace.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use memstash_application::CacheManager;
use memstash_domain::error::{Error, Result};
use memstash_domain::ports::{Cache, CacheExt};
use memstash_domain::value_objects::{CacheConfig, CacheValue, EvictionMode, Lookup};
use memstash_infrastructure::config::ConfigLoader;
use memstash_infrastructure::logging::init_logging;

use crate::bootstrap::bootstrap;

/// Cache namespace used when `--cache` is not given
pub const DEFAULT_CLI_CACHE: &str = "memstash";

/// Command line interface for memstash
#[derive(Parser, Debug)]
#[command(name = "memstash")]
#[command(about = "memstash - Inspect and maintain memcache-backed caches")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Configured provider block to use (defaults to the only one)
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Cache namespace keys are prefixed with
    #[arg(long, global = true, default_value = DEFAULT_CLI_CACHE)]
    pub cache: String,

    /// Read with sliding eviction
    #[arg(long, global = true)]
    pub slide: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Cache commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Connect to and probe every configured provider
    Check,
    /// Print the value stored under a key
    Get {
        /// Key inside the namespace
        key: String,
    },
    /// Store a string value
    Put {
        /// Key inside the namespace
        key: String,
        /// Value to store
        value: String,
        /// Time to live, e.g. `30s` or `5m`; `0s` never expires
        #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
        ttl: Duration,
    },
    /// Remove a key
    Delete {
        /// Key inside the namespace
        key: String,
    },
    /// Report whether a key holds a readable value
    Exists {
        /// Key inside the namespace
        key: String,
    },
    /// Remove every item on the provider's servers
    Flush,
}

impl Cli {
    /// Run the command against an initialized manager and return the report line
    pub async fn execute(&self, manager: &mut CacheManager) -> Result<String> {
        match &self.command {
            Command::Check => Ok(format!(
                "{} cache provider(s) ready: {}",
                manager.provider_names().len(),
                manager.provider_names().join(", ")
            )),
            Command::Get { key } => {
                let cache = self.open_cache(manager)?;
                Ok(match cache.get(key).await {
                    Lookup::Hit(value) => format!("{key}: {}", render(&value)),
                    Lookup::Miss => format!("{key}: miss"),
                    Lookup::Corrupt => format!("{key}: unreadable entry"),
                })
            }
            Command::Put { key, value, ttl } => {
                let cache = self.open_cache(manager)?;
                cache.put_as(key, value.clone(), *ttl).await?;
                Ok(format!("{key}: stored for {}", humantime::format_duration(*ttl)))
            }
            Command::Delete { key } => {
                let cache = self.open_cache(manager)?;
                cache.delete(key).await?;
                Ok(format!("{key}: deleted"))
            }
            Command::Exists { key } => {
                let cache = self.open_cache(manager)?;
                Ok(format!("{key}: {}", cache.exists(key).await))
            }
            Command::Flush => {
                let cache = self.open_cache(manager)?;
                cache.flush().await?;
                Ok(format!("flushed servers of {}", self.provider_name(manager)?))
            }
        }
    }

    fn provider_name(&self, manager: &CacheManager) -> Result<String> {
        if let Some(name) = &self.provider {
            return Ok(name.clone());
        }
        match manager.provider_names().as_slice() {
            [only] => Ok((*only).to_string()),
            [] => Err(Error::configuration("no cache providers configured")),
            names => Err(Error::configuration(format!(
                "several cache providers configured ({}), choose one with --provider",
                names.join(", ")
            ))),
        }
    }

    /// Cache named by `--cache`, created on first use
    fn open_cache(&self, manager: &mut CacheManager) -> Result<Arc<dyn Cache>> {
        if let Some(cache) = manager.cache(&self.cache) {
            return Ok(cache);
        }
        let mode = if self.slide {
            EvictionMode::Slide
        } else {
            EvictionMode::Ttl
        };
        let provider = self.provider_name(manager)?;
        manager.create_cache(CacheConfig::new(&self.cache, provider).with_eviction_mode(mode))?;
        manager
            .cache(&self.cache)
            .ok_or_else(|| Error::internal(format!("cache/{}: missing after creation", self.cache)))
    }
}

fn render(value: &CacheValue) -> String {
    if let Some(text) = value.downcast_ref::<String>() {
        return text.clone();
    }
    if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
        return format!("<{} bytes>", bytes.len());
    }
    if let Some(number) = value.downcast_ref::<i64>() {
        return number.to_string();
    }
    if let Some(number) = value.downcast_ref::<i32>() {
        return number.to_string();
    }
    if let Some(number) = value.downcast_ref::<u64>() {
        return number.to_string();
    }
    if let Some(number) = value.downcast_ref::<u32>() {
        return number.to_string();
    }
    if let Some(number) = value.downcast_ref::<f64>() {
        return number.to_string();
    }
    if let Some(flag) = value.downcast_ref::<bool>() {
        return flag.to_string();
    }
    format!("<{}>", value.type_name())
}

/// Load configuration, start logging and providers, then execute `cli`.
pub async fn run(cli: Cli) -> Result<()> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let mut manager = bootstrap(&config).await?;
    let report = cli.execute(&mut manager).await?;
    println!("{report}");
    Ok(())
}
