use std::path::Path;

use crate::config;
use crate::error::{DashError, Result};

/// Load settings for this run.
///
/// An explicit `--config` file must load and validate. The default config is
/// optional: failures there fall back to defaults with a warning.
pub fn load_settings(explicit: Option<&Path>) -> Result<config::Settings> {
    if let Some(path) = explicit {
        let s = config::Settings::load_from(Some(path), true)?;
        s.validate().map_err(DashError::InvalidConfig)?;
        return Ok(s);
    }

    Ok(match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                log::warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            log::warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    })
}
