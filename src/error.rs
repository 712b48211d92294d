use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pre-dispatch check failed; no request was sent. The message is the
    /// sentence shown to the user.
    #[error("{0}")]
    Validation(String),

    /// The gateway answered with a non-200 status.
    #[error("API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// The call never produced a usable response: connection, timeout or
    /// body-decoding failure.
    #[error("API call failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }
}
