use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, DashError>;
