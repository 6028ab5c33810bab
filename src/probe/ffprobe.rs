use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use super::{DurationProbe, ProbeError, duration_from_secs};

/// Measures durations by running `ffprobe` on each file.
pub struct FfprobeProbe {
    program: String,
}

impl FfprobeProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Parse ffprobe's bare `format=duration` output (e.g. `"1234.567000\n"`).
pub(crate) fn parse_duration_output(stdout: &str) -> Result<Duration, ProbeError> {
    let text = stdout.trim();
    let secs: f64 = text
        .parse()
        .map_err(|_| ProbeError::Parse(text.to_string()))?;
    duration_from_secs(secs)
}

impl DurationProbe for FfprobeProbe {
    fn duration(&self, path: &Path) -> Result<Duration, ProbeError> {
        let output = Command::new(&self.program)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProbeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_duration_output(&String::from_utf8_lossy(&output.stdout))
    }
}
