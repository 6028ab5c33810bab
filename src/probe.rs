//! Lesson duration measurement.
//!
//! A [`DurationProbe`] measures how long a media file plays. Probing is
//! best-effort: callers treat any [`ProbeError`] as a zero-length lesson.

mod error;
mod ffprobe;
mod metadata;

use std::path::Path;
use std::time::Duration;

use crate::config::{ProbeBackend, ProbeSettings};

pub use error::ProbeError;
pub use ffprobe::FfprobeProbe;
pub use metadata::MetadataProbe;

pub trait DurationProbe {
    fn duration(&self, path: &Path) -> Result<Duration, ProbeError>;
}

/// Tries each backend in order and returns the first success.
pub struct ChainProbe {
    probes: Vec<Box<dyn DurationProbe>>,
}

impl ChainProbe {
    pub fn new(probes: Vec<Box<dyn DurationProbe>>) -> Self {
        Self { probes }
    }
}

impl DurationProbe for ChainProbe {
    fn duration(&self, path: &Path) -> Result<Duration, ProbeError> {
        let mut last = ProbeError::Disabled;
        for probe in &self.probes {
            match probe.duration(path) {
                Ok(d) => return Ok(d),
                Err(e) => {
                    log::debug!("{}: {e}", path.display());
                    last = e;
                }
            }
        }
        Err(last)
    }
}

/// Never measures anything.
pub struct DisabledProbe;

impl DurationProbe for DisabledProbe {
    fn duration(&self, _path: &Path) -> Result<Duration, ProbeError> {
        Err(ProbeError::Disabled)
    }
}

/// Build the probe selected by `settings`.
pub fn from_settings(settings: &ProbeSettings) -> Box<dyn DurationProbe> {
    match settings.backend {
        ProbeBackend::Auto => Box::new(ChainProbe::new(vec![
            Box::new(FfprobeProbe::new(settings.ffprobe_path.clone())),
            Box::new(MetadataProbe),
        ])),
        ProbeBackend::Ffprobe => Box::new(FfprobeProbe::new(settings.ffprobe_path.clone())),
        ProbeBackend::Metadata => Box::new(MetadataProbe),
        ProbeBackend::None => Box::new(DisabledProbe),
    }
}

/// Convert a seconds value reported by a backend into a `Duration`.
pub(crate) fn duration_from_secs(secs: f64) -> Result<Duration, ProbeError> {
    Duration::try_from_secs_f64(secs).map_err(|_| ProbeError::InvalidDuration(secs))
}

#[cfg(test)]
mod tests;
