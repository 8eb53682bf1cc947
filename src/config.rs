//! Engine configuration
//!
//! A [`ViewHierarchy`](crate::ViewHierarchy) takes its root safe area and the
//! animation defaults from an [`EngineConfig`]. Configurations can be built
//! in code or loaded from TOML:
//!
//! ```toml
//! [safe_area]
//! top = 47.0
//! bottom = 34.0
//!
//! [default_animation]
//! duration = 0.25
//! curve = "ease-out"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::animation::AnimationSettings;
use crate::layout::types::Insets;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine-wide defaults for a view hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Safe-area insets applied to root views. All-positive, one inset per
    /// side; zero by default.
    pub safe_area: Insets,

    /// Animation settings used when a mutation passes none explicitly
    pub default_animation: AnimationSettings,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the root safe-area insets
    pub fn with_safe_area(mut self, insets: Insets) -> Self {
        self.safe_area = insets;
        self
    }

    /// Set the default animation settings
    pub fn with_default_animation(mut self, settings: AnimationSettings) -> Self {
        self.default_animation = settings;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::AnimationCurve;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.safe_area, Insets::zero());
        assert_eq!(config.default_animation, AnimationSettings::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_safe_area(Insets::new(47.0, 0.0, 34.0, 0.0))
            .with_default_animation(AnimationSettings::with_duration(0.2));

        assert_eq!(config.safe_area.top, 47.0);
        assert_eq!(config.default_animation.duration, 0.2);
    }

    #[test]
    fn test_parse_full_config() {
        let config = EngineConfig::from_toml_str(
            r#"
            [safe_area]
            top = 47.0
            bottom = 34.0

            [default_animation]
            duration = 0.25
            damping = 1.0
            curve = "ease-out"
            "#,
        )
        .unwrap();

        assert_eq!(config.safe_area.top, 47.0);
        assert_eq!(config.safe_area.bottom, 34.0);
        assert_eq!(config.safe_area.left, 0.0);
        assert_eq!(config.default_animation.duration, 0.25);
        assert_eq!(config.default_animation.damping, 1.0);
        assert_eq!(config.default_animation.curve, AnimationCurve::EaseOut);
        // Unspecified animation fields keep their defaults.
        assert_eq!(config.default_animation.velocity, 1.0);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_error_reports_toml_failure() {
        let result = EngineConfig::from_toml_str("safe_area = \"everywhere\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
