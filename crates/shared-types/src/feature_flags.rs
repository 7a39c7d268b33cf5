use serde::{Deserialize, Serialize};

/// Switches for optional behaviour, read from `config.toml` on the server
/// and handed to the client through `get_feature_flags`.
///
/// Every flag defaults to `false`, so a missing file or section turns
/// everything optional off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Allow students to create their own accounts from the portal.
    #[serde(default)]
    pub open_registration: bool,
}

/// Shape of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_turns_everything_off() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert!(!config.features.telemetry);
        assert!(!config.features.open_registration);
    }

    #[test]
    fn missing_keys_default_to_off() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            open_registration = true
            "#,
        )
        .unwrap();
        assert!(config.features.open_registration);
        assert!(!config.features.telemetry);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true
            stripe = true
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
    }

    #[test]
    fn client_payload_without_fields_is_default() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
