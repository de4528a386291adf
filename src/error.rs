//! Error types for disha-cue.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// disha-cue error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse failure
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Tone dispatcher channel closed
    #[error("Tone sink disconnected")]
    SinkClosed,

    /// Host collaborator failure (heading source, activity source, sink)
    #[error("Host error: {0}")]
    Host(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
