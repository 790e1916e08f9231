//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::SweepConfig;
use crate::domain::{ConfigError, PrefixRules};

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<SweepConfig> {
    store.load()
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &SweepConfig) -> Result<()> {
    store.save(config)
}

/// Validate and persist a single `key = value` setting.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the file cannot be
/// read or written.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<SweepConfig> {
    let mut config = load_config(store)?;
    config.set(key, value)?;
    save_config(store, &config)?;
    Ok(config)
}

/// Effective prefix rules from the stored configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or holds an invalid prefix.
pub fn prefix_rules(store: &impl ConfigStore) -> Result<PrefixRules> {
    load_config(store)?.prefix_rules()
}

/// Pick the region to use: explicit (`--region` / `AWS_REGION`) first, then
/// the configuration file, then the SDK's profile-derived region.
///
/// # Errors
///
/// Returns `ConfigError::MissingRegion` when no source provides one.
pub fn resolve_region(
    explicit: Option<&str>,
    config: &SweepConfig,
    profile_region: Option<&str>,
) -> Result<String, ConfigError> {
    explicit
        .filter(|r| !r.trim().is_empty())
        .or(config.region.as_deref())
        .or(profile_region)
        .map(str::to_string)
        .ok_or(ConfigError::MissingRegion)
}
