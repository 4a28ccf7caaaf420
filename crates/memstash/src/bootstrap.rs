//! Startup wiring from configuration to an initialized cache manager

use memstash_application::CacheManager;
use memstash_domain::error::Result;
use memstash_infrastructure::config::AppConfig;
use tracing::info;

/// Build a manager holding one initialized provider per `cache.<name>` block.
pub async fn bootstrap(config: &AppConfig) -> Result<CacheManager> {
    bootstrap_with(CacheManager::new(), config).await
}

/// Like [`bootstrap`], keeping providers already added to `manager`.
///
/// Blocks whose name is already taken by an added provider are initialized
/// with that provider instead of a registry one.
pub async fn bootstrap_with(mut manager: CacheManager, config: &AppConfig) -> Result<CacheManager> {
    manager.register_configured_providers(&config.cache)?;
    manager.init_providers(&config.cache).await?;
    info!(providers = ?manager.provider_names(), "memstash ready");
    Ok(manager)
}
