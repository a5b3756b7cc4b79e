use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse page content: {0}")]
    ParseError(String),

    #[error("Lyrics are not transcribed yet")]
    LyricsUnavailable,

    #[error("Discography page unavailable for artist: {0}")]
    DiscographyUnavailable(String),

    #[error("Cohere error: {0}")]
    CohereError(#[from] reqwest::Error),

    #[error("Cohere API unexpected response: {0}")]
    CohereUnexpectedResponse(String),

    #[error("Embedding count mismatch: sent {requested} texts, received {received} vectors")]
    EmbeddingCountMismatch { requested: usize, received: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
