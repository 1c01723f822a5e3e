use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlacesError>;

/// Places lookup failures
///
/// These never reach API consumers; the resolver turns every one of them
/// into the error sentinel.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// No API key is configured
    #[error("no API key configured for places provider {0}")]
    MissingApiKey(String),

    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider answered with a non-success HTTP status
    #[error("provider returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Provider answered 200 but reported a failed search
    #[error("search failed with status {status}: {message}")]
    Search { status: String, message: String },

    /// Body could not be decoded
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// Provider could not be constructed
    #[error("configuration error: {0}")]
    Config(String),
}
