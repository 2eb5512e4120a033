//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use physika::config::AppConfig;
use physika::math::{Matrix3x3, Vector3};
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("PHYSIKA_POINTS__COUNT", "11");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("PHYSIKA_POINTS__COUNT");
    assert_eq!(config.points.count, 11);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("PHYSIKA_POINTS__COUNT");

    let cwd = std::env::current_dir().unwrap();
    assert!(
        cwd.join("config/default.toml").exists(),
        "config/default.toml should ship with the crate"
    );

    let config = AppConfig::load().unwrap();
    if !cwd.join("config/user.toml").exists() {
        assert_eq!(
            config.frame.rotation,
            Matrix3x3::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])
        );
        assert_eq!(config.frame.translation, Vector3::new([0.0, 0.0, 1.0]));
    }
    assert_eq!(config.frame.rotation.determinant(), 1.0);
}

#[test]
#[serial]
fn test_bad_env_value_is_an_error() {
    std::env::set_var("PHYSIKA_POINTS__COUNT", "many");
    let result = AppConfig::load();
    std::env::remove_var("PHYSIKA_POINTS__COUNT");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
