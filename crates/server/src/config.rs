use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

const CONFIG_PATH: &str = "config.toml";

fn parse_config(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "unparseable config, all features off");
            FeatureFlags::default()
        }
    }
}

/// Load `config.toml` from the working directory once per process.
/// A missing or broken file leaves every flag off.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| {
        let flags = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::info!(path = CONFIG_PATH, error = %e, "no config file, all features off");
                FeatureFlags::default()
            }
        };
        tracing::info!(?flags, "feature flags loaded");
        flags
    });
}

/// Flags loaded at startup, or all-off if [`load_feature_flags`] never ran.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        open_registration: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_toml_turns_everything_off() {
        assert_eq!(parse_config("[features\nopen_registration = "), FeatureFlags::default());
    }

    #[test]
    fn reads_flags() {
        let flags = parse_config("[features]\nopen_registration = true\n");
        assert!(flags.open_registration);
        assert!(!flags.telemetry);
    }
}
