use dotenvy::dotenv;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;

/// Session entry point for the host app:
///
/// 1. Load environment variables
/// 2. Load configuration
/// 3. Wire dependencies
///
/// Call `logger::init_tracing()` first if the host has no subscriber of its
/// own. The returned container is the init-once handle for the whole session.
pub fn bootstrap() -> anyhow::Result<DependencyContainer> {
    dotenv().ok();

    let config = AppConfig::from_env()?;

    Ok(DependencyContainer::new(config))
}
