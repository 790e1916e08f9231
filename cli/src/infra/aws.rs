//! AWS session setup: region resolution, credential check, and client
//! construction.
//!
//! Everything here runs before any listing call. Failures surface as
//! `ConfigError`, which the command layer treats as fatal.

use anyhow::Result;
use aws_config::meta::region::ProvideRegion as _;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials as _;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::debug;

use crate::domain::ConfigError;

/// A loaded SDK configuration with verified credentials.
pub struct AwsSession {
    /// Shared SDK configuration used to build every service client.
    pub config: SdkConfig,
    /// Region the session is bound to.
    pub region: String,
}

/// Region from the SDK's default chain (environment, then the shared
/// `~/.aws/config` profile), if any.
pub async fn profile_region() -> Option<String> {
    aws_config::default_provider::region::default_provider()
        .region()
        .await
        .map(|r| r.to_string())
}

/// Load the SDK configuration for `region` and make sure credentials resolve.
///
/// Credentials come from the SDK default chain: `AWS_ACCESS_KEY_ID` /
/// `AWS_SECRET_ACCESS_KEY`, the shared credentials file, SSO, or an instance
/// role.
///
/// # Errors
///
/// Returns `ConfigError::MissingCredentials` if no credentials can be
/// resolved.
pub async fn connect(region: &str) -> Result<AwsSession> {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;

    ensure_credentials(&config).await?;
    debug!(region, "AWS session ready");

    Ok(AwsSession {
        config,
        region: region.to_string(),
    })
}

async fn ensure_credentials(config: &SdkConfig) -> Result<(), ConfigError> {
    let provider = config.credentials_provider().ok_or_else(|| {
        ConfigError::MissingCredentials("no credentials provider is configured".to_string())
    })?;

    provider
        .provide_credentials()
        .await
        .map(|_| ())
        .map_err(|e| ConfigError::MissingCredentials(DisplayErrorContext(&e).to_string()))
}
