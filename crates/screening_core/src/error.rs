use std::path::PathBuf;

/// Errors raised by the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
    #[error("invalid configuration in {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
