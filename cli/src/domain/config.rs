//! Domain types and validators for sweeper configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::resource::{PrefixRules, ResourceCategory};

// ── Constants ────────────────────────────────────────────────────────────────

/// Key for the default region.
pub const REGION_KEY: &str = "region";

/// Key namespace for prefix overrides, e.g. `prefix.knowledge-base`.
pub const PREFIX_KEY_NAMESPACE: &str = "prefix.";

/// Shortest prefix accepted from configuration. Keeps an override like `b`
/// from matching most of an account.
pub const MIN_PREFIX_LEN: usize = 6;

static PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // pattern is a compile-time constant
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid prefix pattern")
});

static REGION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // pattern is a compile-time constant
    Regex::new(r"^[a-z]{2}(-[a-z]+)+-\d+$").expect("valid region pattern")
});

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.bedrock-sweep/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SweepConfig {
    /// Region used when neither `--region` nor `AWS_REGION` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Prefix overrides keyed by category slug.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub prefixes: BTreeMap<ResourceCategory, String>,
}

impl SweepConfig {
    /// Effective prefix rules: defaults with the overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored override fails validation (e.g. the file
    /// was edited by hand).
    pub fn prefix_rules(&self) -> Result<PrefixRules> {
        let mut rules = PrefixRules::default();
        for (category, prefix) in &self.prefixes {
            validate_prefix(&prefix_key(*category), prefix)?;
            rules.set(*category, prefix.clone());
        }
        Ok(rules)
    }

    /// Apply a validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        if key == REGION_KEY {
            self.region = Some(value.to_string());
        } else if let Some(category) = prefix_category(key) {
            self.prefixes.insert(category, value.to_string());
        }
        Ok(())
    }
}

// ── Keys ─────────────────────────────────────────────────────────────────────

/// Config key for a category's prefix override.
#[must_use]
pub fn prefix_key(category: ResourceCategory) -> String {
    format!("{PREFIX_KEY_NAMESPACE}{}", category.slug())
}

/// Every settable key.
#[must_use]
pub fn valid_config_keys() -> Vec<String> {
    std::iter::once(REGION_KEY.to_string())
        .chain(ResourceCategory::ALL.into_iter().map(prefix_key))
        .collect()
}

fn prefix_category(key: &str) -> Option<ResourceCategory> {
    key.strip_prefix(PREFIX_KEY_NAMESPACE)?.parse().ok()
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if key == REGION_KEY || prefix_category(key).is_some() {
        return Ok(());
    }
    Err(ConfigError::UnknownKey {
        key: key.to_string(),
        valid: valid_config_keys().join(", "),
    }
    .into())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    if key == REGION_KEY {
        return validate_region(value);
    }
    validate_prefix(key, value)
}

/// Validates an AWS region name such as `us-east-1`.
///
/// # Errors
///
/// Returns an error if the value does not look like a region.
pub fn validate_region(value: &str) -> Result<()> {
    if REGION_PATTERN.is_match(value) {
        return Ok(());
    }
    Err(ConfigError::InvalidValue {
        key: REGION_KEY.to_string(),
        value: value.to_string(),
        reason: "Expected an AWS region such as us-east-1.".to_string(),
    }
    .into())
}

fn validate_prefix(key: &str, value: &str) -> Result<()> {
    let reason = if value.len() < MIN_PREFIX_LEN {
        format!("Prefixes must be at least {MIN_PREFIX_LEN} characters long.")
    } else if !PREFIX_PATTERN.is_match(value) {
        "Prefixes may contain letters, digits, '.', '_' and '-' and must start with a letter or digit."
            .to_string()
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    }
    .into())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
