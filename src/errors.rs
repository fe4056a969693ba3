use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

/// Failure of a single request against the remote data service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("could not reach the data service: {0}")]
    Transport(String),
    #[error("the data service answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected payload: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Error(#[from] std::io::Error),
    #[error("{0}")]
    Msg(String),
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            GatewayError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            GatewayError::Transport(e.to_string())
        }
    }
}
