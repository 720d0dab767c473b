use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport failure: connection refused, timeout, bad TLS, or an
    /// unreadable body.
    #[error("network error: {0}")]
    Network(String),

    /// The gateway answered with a non-success HTTP status. `message` carries
    /// the error body's `message` field when one was present.
    #[error("gateway returned status {status}")]
    Status { status: u16, message: Option<String> },

    /// The gateway answered 2xx but the payload was not usable (for the
    /// search endpoint this includes an in-band `status != "Success"`).
    #[error("unexpected gateway payload: {0}")]
    Payload(String),

    #[error("invalid gateway url: {0}")]
    Url(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Network(err.to_string())
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::Url(err.to_string())
    }
}
