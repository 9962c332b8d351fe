//! Error types for the CFBD statistics server

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CfbdError>;

#[derive(Error, Debug)]
pub enum CfbdError {
    #[error("CFBD API error: {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("CFBD API request timed out")]
    UpstreamTimeout,

    #[error("Failed to parse CFBD response: {0}")]
    UpstreamParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("CFBD API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}

impl From<reqwest::Error> for CfbdError {
    /// Timeouts get their own variant so fetchers can report them distinctly.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CfbdError::UpstreamTimeout
        } else {
            CfbdError::Http(err)
        }
    }
}
