use dioxus::prelude::*;
use shared_types::FeatureFlags;

/// Flags the client needs to decide what to show.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
