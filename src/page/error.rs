use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("remote service returned HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl FetchError {
    /// HTTP status associated with the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
