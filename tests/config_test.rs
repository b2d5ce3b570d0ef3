//! Integration tests for Settings config loading
//!
//! These tests pass an explicit config file instead of the XDG global path.
//! They assume no CREATE_ROLEAUTH_* variables are set in the test environment.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use create_roleauth::application::ApplicationError;
use create_roleauth::config::Settings;

#[test]
fn given_no_config_file_when_load_then_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(&temp.path().join("missing.toml"))).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_when_load_then_overrides_specified_fields_only() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("create-roleauth.toml");
    fs::write(
        &path,
        r#"
package_manager = "pnpm"
install_args = ["install", "--prefer-offline"]
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).unwrap();

    // Assert
    assert_eq!(settings.package_manager, "pnpm");
    assert_eq!(
        settings.install_args,
        vec!["install".to_string(), "--prefer-offline".to_string()]
    );
    assert_eq!(settings.template_dir, None);
}

#[test]
fn given_template_dir_with_home_var_when_load_then_expanded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("create-roleauth.toml");
    fs::write(&path, "template_dir = \"$HOME/templates/roleauth\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    let home = std::env::var("HOME").expect("HOME should be set");
    assert_eq!(
        settings.template_dir,
        Some(PathBuf::from(format!("{home}/templates/roleauth")))
    );
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("create-roleauth.toml");
    fs::write(&path, "package_manager = [unterminated").unwrap();

    let result = Settings::load_from(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
