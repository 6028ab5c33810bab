use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;
use crate::error::Result;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then layers environment
/// variables (prefix `COURSEDASH__`) on top and falls back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();
        Self::load_from(config_path.as_deref(), false)
    }

    /// Load settings from `path` (when given) and the environment.
    ///
    /// With `required = true` a missing file is an error.
    pub fn load_from(path: Option<&Path>, required: bool) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(required));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("COURSEDASH")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("library.extensions")
                .with_list_parse_key("report.emojis")
                .with_list_parse_key("report.tags"),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let report = &self.report;
        for (key, name) in [
            ("report.checklist_file", &report.checklist_file),
            ("report.index_file", &report.index_file),
        ] {
            if name.trim().is_empty() {
                return Err(format!("{key} must not be empty"));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(format!("{key} must be a plain file name, got {name:?}"));
            }
        }
        if report.checklist_file == report.index_file {
            return Err("report.checklist_file and report.index_file must differ".to_string());
        }
        if self
            .library
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err("library.extensions must list at least one extension".to_string());
        }
        Ok(())
    }

    /// Render these settings as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Resolve the config path from `COURSEDASH_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("COURSEDASH_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/coursedash/config.toml`
/// or `~/.config/coursedash/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("coursedash").join("config.toml"))
}
