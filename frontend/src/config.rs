//! Preview configuration bundled into the app at compile time

use shared::PreviewConfig;

const PREVIEW_CONFIG_TOML: &str = include_str!("../config/preview.toml");

/// Parse the bundled config, falling back to built-in defaults on error.
pub fn load_preview_config() -> PreviewConfig {
    match PreviewConfig::from_toml(PREVIEW_CONFIG_TOML) {
        Ok(config) => {
            zoon::println!("⚙️ CONFIG: Loaded preview config v{}", config.app.version);
            config
        }
        Err(error) => {
            zoon::eprintln!("⚙️ CONFIG: {error}, using built-in defaults");
            PreviewConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_builtin_defaults() {
        let config = PreviewConfig::from_toml(PREVIEW_CONFIG_TOML).unwrap();
        assert_eq!(config, PreviewConfig::default());
    }
}
