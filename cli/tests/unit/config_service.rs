//! Unit tests for the configuration use-cases against an in-memory store.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use bedrock_sweep::application::services::config_service;
use bedrock_sweep::domain::{ConfigError, ResourceCategory, SweepConfig};

use crate::mocks::MemoryConfigStore;

#[test]
fn test_set_region_persists() {
    let store = MemoryConfigStore::default();

    let config = config_service::set_value(&store, "region", "eu-central-1").expect("set");

    assert_eq!(config.region.as_deref(), Some("eu-central-1"));
    assert_eq!(*store.saves.lock().unwrap(), 1);
    assert_eq!(
        config_service::load_config(&store).unwrap().region.as_deref(),
        Some("eu-central-1")
    );
}

#[test]
fn test_set_prefix_changes_effective_rules() {
    let store = MemoryConfigStore::default();

    config_service::set_value(&store, "prefix.knowledge-base", "workshop-kb-").expect("set");
    let rules = config_service::prefix_rules(&store).expect("rules");

    assert_eq!(rules.prefix(ResourceCategory::KnowledgeBase), "workshop-kb-");
    assert_eq!(rules.prefix(ResourceCategory::IamRole), "kb-service-role");
}

#[test]
fn test_set_unknown_key_is_rejected_without_saving() {
    let store = MemoryConfigStore::default();

    let err = config_service::set_value(&store, "prefix.lambda", "bedrock-lambda").unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::UnknownKey { .. })
    ));
    assert_eq!(*store.saves.lock().unwrap(), 0);
}

#[test]
fn test_set_short_prefix_is_rejected() {
    let store = MemoryConfigStore::default();

    let err = config_service::set_value(&store, "prefix.iam-role", "kb").unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(config_service::load_config(&store).unwrap(), SweepConfig::default());
}

#[test]
fn test_set_malformed_region_is_rejected() {
    let store = MemoryConfigStore::default();
    assert!(config_service::set_value(&store, "region", "Virginia").is_err());
}

#[test]
fn test_resolve_region_falls_back_to_profile() {
    let region =
        config_service::resolve_region(None, &SweepConfig::default(), Some("ap-southeast-2"))
            .expect("region");
    assert_eq!(region, "ap-southeast-2");
}

#[test]
fn test_resolve_region_without_any_source_is_missing_region() {
    let err = config_service::resolve_region(None, &SweepConfig::default(), None).unwrap_err();
    assert!(matches!(err, ConfigError::MissingRegion));
}
