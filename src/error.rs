/// Error types for the viewer
///
/// `FetchError` covers everything that can go wrong while getting an image
/// onto the screen. It is `Clone` because it travels inside iced messages.
/// `Error` covers startup, configuration and saving.
use thiserror::Error;

/// Result type alias using the application `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a generation flow or of an image load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API could not be reached (DNS, connect, reset, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success HTTP status
    #[error("image API returned HTTP {status}")]
    Transport { status: u16 },

    /// The API answered 2xx but without a usable `url` field
    #[error("image API response did not contain an image URL")]
    MalformedResponse,

    /// The image URL resolved but the image could not be downloaded or decoded
    #[error("failed to load image: {0}")]
    ImageLoad(String),
}

impl FetchError {
    pub fn network(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network(format!("request timed out: {}", err))
        } else {
            Self::Network(err.to_string())
        }
    }

    pub fn image_load(reason: impl Into<String>) -> Self {
        Self::ImageLoad(reason.into())
    }
}

/// Application errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
