//! Operation layer between routes and the gateway.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::gateway::errors::GatewayError;

pub mod auth;
pub mod pharmacy;
pub mod search;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Operation requires a credential but none is held.
    #[error("authentication required")]
    Unauthenticated,

    /// User input failed validation before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl ServiceError {
    /// Text shown to the user in a notification.
    ///
    /// Gateway error bodies may carry a `message` field; when present it is
    /// surfaced verbatim, otherwise a generic failure line is used.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Unauthenticated => "You need to log in first.".to_string(),
            ServiceError::Validation(msg) => msg.clone(),
            ServiceError::Gateway(GatewayError::Status {
                message: Some(message),
                ..
            }) => message.clone(),
            ServiceError::Gateway(_) => "Request to the gateway failed.".to_string(),
        }
    }
}
