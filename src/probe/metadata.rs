use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;

use super::{DurationProbe, ProbeError};

/// Reads the play length from container metadata in-process.
///
/// Covers MP4/MOV style containers without any external tool; formats lofty
/// does not understand (mkv, avi, ...) fail and are left to other backends.
pub struct MetadataProbe;

impl DurationProbe for MetadataProbe {
    fn duration(&self, path: &Path) -> Result<Duration, ProbeError> {
        let tagged = lofty::read_from_path(path)?;
        Ok(tagged.properties().duration())
    }
}
