//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/create-roleauth/create-roleauth.toml`
//! 3. Environment variables: `CREATE_ROLEAUTH_*` prefix
//! 4. Command line flags (applied by the CLI layer via [`Settings::with_overrides`])
//!
//! Settings only describe where the template lives and how dependencies are
//! installed; the `.env` answers are always collected interactively.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::TemplateSource;
use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

const APP_NAME: &str = "create-roleauth";
const ENV_PREFIX: &str = "CREATE_ROLEAUTH";

/// Unified configuration for create-roleauth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Template directory on disk; `None` uses the template built into the binary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Package manager executable (default: npm)
    pub package_manager: String,
    /// Arguments passed to the package manager (default: ["install"])
    pub install_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_dir: None,
            package_manager: default_package_manager().into(),
            install_args: vec!["install".into()],
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub template_dir: Option<PathBuf>,
    pub package_manager: Option<String>,
    pub install_args: Option<Vec<String>>,
}

fn default_package_manager() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Get the XDG config directory for create-roleauth.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(dir) = &self.template_dir {
            let expanded = expand_env_vars(dir.to_string_lossy().as_ref());
            self.template_dir = Some(PathBuf::from(expanded));
        }
    }

    /// Apply a raw layer: specified values replace the base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            template_dir: overlay
                .template_dir
                .clone()
                .or_else(|| self.template_dir.clone()),
            package_manager: overlay
                .package_manager
                .clone()
                .unwrap_or_else(|| self.package_manager.clone()),
            install_args: overlay
                .install_args
                .clone()
                .unwrap_or_else(|| self.install_args.clone()),
        }
    }

    /// Load settings from defaults, the global config file and `CREATE_ROLEAUTH_*`.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` in place of the global config file.
    ///
    /// A missing file is skipped; an unreadable or malformed one is an error.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply CREATE_ROLEAUTH_* environment variables as explicit overrides.
    ///
    /// `CREATE_ROLEAUTH_INSTALL_ARGS` is split on spaces.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(" ")
                .with_list_parse_key("install_args"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("template_dir") {
            settings.template_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("package_manager") {
            settings.package_manager = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("install_args") {
            settings.install_args = val;
        }

        Ok(settings)
    }

    /// Apply command line overrides on top of loaded settings.
    pub fn with_overrides(
        mut self,
        template_dir: Option<&Path>,
        package_manager: Option<&str>,
    ) -> Self {
        if let Some(dir) = template_dir {
            self.template_dir = Some(PathBuf::from(expand_env_vars(
                dir.to_string_lossy().as_ref(),
            )));
        }
        if let Some(pm) = package_manager {
            self.package_manager = pm.to_string();
        }
        self
    }

    /// Where the template tree is read from.
    pub fn template_source(&self) -> TemplateSource {
        match &self.template_dir {
            Some(dir) => TemplateSource::Directory(dir.clone()),
            None => TemplateSource::Bundled,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_template_is_bundled() {
        let settings = Settings::default();
        assert_eq!(settings.template_dir, None);
        assert_eq!(settings.template_source(), TemplateSource::Bundled);
        assert!(settings.package_manager.starts_with("npm"));
        assert_eq!(settings.install_args, vec!["install".to_string()]);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            template_dir: None,
            package_manager: Some("pnpm".into()),
            install_args: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.package_manager, "pnpm");
        assert_eq!(merged.template_dir, base.template_dir);
        assert_eq!(merged.install_args, base.install_args);
    }

    #[test]
    fn given_tilde_in_template_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            template_dir: Some(PathBuf::from("~/templates/roleauth")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let dir = settings.template_dir.expect("template_dir kept");
        assert!(
            dir.to_string_lossy().starts_with(&home),
            "template_dir should start with home dir: {}",
            dir.display()
        );
    }

    #[test]
    fn given_cli_overrides_then_replace_loaded_values() {
        let settings =
            Settings::default().with_overrides(Some(Path::new("/tmp/tpl")), Some("yarn"));
        assert_eq!(
            settings.template_source(),
            TemplateSource::Directory(PathBuf::from("/tmp/tpl"))
        );
        assert_eq!(settings.package_manager, "yarn");
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_keys() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(!toml.contains("template_dir"));
        assert!(toml.contains("package_manager"));
        assert!(toml.contains("install_args"));
    }
}
