//! Errors from the query endpoint.

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("query request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("query endpoint error {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("malformed query response: {0}")]
    MalformedResponse(String),
}

pub type ChatResult<T> = Result<T, ChatError>;
