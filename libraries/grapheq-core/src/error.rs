/// Core error types for the equalizer
use thiserror::Error;

/// Result type alias using `EqError`
pub type Result<T> = std::result::Result<T, EqError>;

/// Core error type for the equalizer
#[derive(Error, Debug)]
pub enum EqError {
    /// Unsupported sample rate, band count, bit depth or channel layout
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Control surface addressed with a channel the bank does not have
    #[error("Channel {channel} out of range (channels: {channels})")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// Control surface addressed with a band the bank does not have
    #[error("Band {band} out of range (bands: {bands})")]
    BandOutOfRange { band: usize, bands: usize },

    /// Internal invariant violated (buffer sizing or codec bug)
    #[error("Unexpected state: {0}")]
    UnexpectedState(String),

    /// Operation the stream declares it does not support
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors from the upstream byte source
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl EqError {
    /// Create an unsupported format error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create an unexpected state error
    pub fn unexpected_state(msg: impl Into<String>) -> Self {
        Self::UnexpectedState(msg.into())
    }

    /// Create a not supported error
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<EqError> for std::io::Error {
    fn from(err: EqError) -> Self {
        use std::io::ErrorKind;

        match err {
            EqError::Io(e) => e,
            EqError::NotSupported(_) => std::io::Error::new(ErrorKind::Unsupported, err),
            EqError::UnsupportedFormat(_)
            | EqError::ChannelOutOfRange { .. }
            | EqError::BandOutOfRange { .. }
            | EqError::InvalidInput(_) => std::io::Error::new(ErrorKind::InvalidInput, err),
            EqError::Serialization(_) => std::io::Error::new(ErrorKind::InvalidData, err),
            EqError::UnexpectedState(_) => std::io::Error::other(err),
        }
    }
}
