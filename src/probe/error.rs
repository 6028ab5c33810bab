use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("unparseable duration output {0:?}")]
    Parse(String),

    #[error("invalid duration {0}")]
    InvalidDuration(f64),

    #[error("metadata read failed: {0}")]
    Metadata(#[from] lofty::error::LoftyError),

    #[error("duration probing is disabled")]
    Disabled,
}
