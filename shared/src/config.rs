use crate::shadow::{DEFAULT_SHADOW_MATRIX, ShadowMatrix, is_valid_matrix};
use crate::view_state::ViewState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse preview config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported preview config version `{0}`")]
    UnsupportedVersion(String),
    #[error("shadow matrix coefficients must be finite and non-negative")]
    InvalidMatrix,
}

/// Initial preview values and the shadow layer coefficients.
///
/// ```toml
/// [app]
/// version = "1.0.0"
///
/// [defaults]
/// background_color = "#dddddd"
/// card_color = "#ffffff"
/// shadow_color = "#000000"
/// shadow_spread = 50
/// shadow_weight = 10
///
/// [shadow]
/// matrix = [[0.0, 0.1, 0.2], [0.0, 0.2, 0.8], [0.0, 1.0, 3.0]]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    pub app: AppSection,
    pub defaults: ViewState,
    pub shadow: ShadowSection,
}

impl PreviewConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if !config.app.is_supported_version() {
            return Err(ConfigError::UnsupportedVersion(config.app.version));
        }
        if !is_valid_matrix(&config.shadow.matrix) {
            return Err(ConfigError::InvalidMatrix);
        }
        Ok(Self {
            defaults: config.defaults.clamped(),
            ..config
        })
    }
}

// AppSection carries the config format version so older files can be rejected
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "1.0.0")
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShadowSection {
    pub matrix: ShadowMatrix,
}

impl Default for ShadowSection {
    fn default() -> Self {
        Self {
            matrix: DEFAULT_SHADOW_MATRIX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PreviewConfig::from_toml("").unwrap();
        assert_eq!(config, PreviewConfig::default());
        assert_eq!(config.shadow.matrix, DEFAULT_SHADOW_MATRIX);
    }

    #[test]
    fn test_partial_defaults_section() {
        let config = PreviewConfig::from_toml(
            r##"
            [defaults]
            card_color = "#FAFAFA"
            shadow_spread = 20
            "##,
        )
        .unwrap();

        assert_eq!(config.defaults.card_color, HexColor::new(0xfa, 0xfa, 0xfa));
        assert_eq!(config.defaults.shadow_spread, 20);
        assert_eq!(config.defaults.shadow_weight, 10);
    }

    #[test]
    fn test_out_of_range_defaults_are_clamped() {
        let config = PreviewConfig::from_toml(
            r#"
            [defaults]
            shadow_spread = 255
            shadow_weight = 90
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.shadow_spread, 100);
        assert_eq!(config.defaults.shadow_weight, 40);
    }

    #[test]
    fn test_invalid_color_is_a_parse_error() {
        let error = PreviewConfig::from_toml(
            r#"
            [defaults]
            background_color = "grey"
            "#,
        )
        .unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unsupported_version() {
        let error = PreviewConfig::from_toml(
            r#"
            [app]
            version = "0.9.0"
            "#,
        )
        .unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedVersion(version) if version == "0.9.0"));
    }

    #[test]
    fn test_negative_matrix_rejected() {
        let error = PreviewConfig::from_toml(
            r#"
            [shadow]
            matrix = [[0.0, -0.1, 0.2], [0.0, 0.2, 0.8], [0.0, 1.0, 3.0]]
            "#,
        )
        .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidMatrix));
    }

    #[test]
    fn test_config_serializes_back_to_toml() {
        let source = toml::to_string(&PreviewConfig::default()).unwrap();
        assert!(source.contains("background_color = \"#dddddd\""));
        assert_eq!(PreviewConfig::from_toml(&source).unwrap(), PreviewConfig::default());
    }
}
