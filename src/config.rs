//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PHYSIKA_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use physika_math::{Matrix3x3, Vector3};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Collidable point set
    #[serde(default)]
    pub points: PointsConfig,
    /// Rigid frame the points are mapped through
    #[serde(default)]
    pub frame: FrameConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PHYSIKA_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PHYSIKA_POINTS__COUNT=8 -> points.count = 8
        figment = figment.merge(Env::prefixed("PHYSIKA_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Collidable point set configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Number of points, laid out along the X axis
    pub count: usize,
    /// Distance between neighbouring points
    pub spacing: f64,
    /// Uniform point radius
    pub radius: f64,
    /// Initial velocity of every point
    pub velocity: Vector3<f64>,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            count: 4,
            spacing: 0.1,
            radius: 0.005,
            velocity: Vector3::zeros(),
        }
    }
}

/// Rigid frame configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Rotation matrix, row by row
    pub rotation: Matrix3x3<f64>,
    /// Translation applied after the rotation
    pub translation: Vector3<f64>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            rotation: Matrix3x3::identity(),
            translation: Vector3::zeros(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.points.count, 4);
        assert_eq!(config.frame.rotation, Matrix3x3::identity());
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("spacing"));
        assert!(toml.contains("rotation"));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_frame_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [frame]
            rotation = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]
            translation = [1.0, 2.0, 3.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.frame.rotation.determinant(), 1.0);
        assert_eq!(config.frame.translation, Vector3::new([1.0, 2.0, 3.0]));
        // untouched sections keep their defaults
        assert_eq!(config.points.count, 4);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[points]\ncount = 9\n").unwrap();
        assert_eq!(config.points.count, 9);
        assert_eq!(config.points.spacing, 0.1);
    }

    #[test]
    fn test_bad_rotation_is_rejected() {
        let result: Result<AppConfig, _> =
            toml::from_str("[frame]\nrotation = [[1.0, 0.0], [0.0, 1.0]]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.points.count, 4);
    }
}
