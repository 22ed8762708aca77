//! Client-facing categorisation of domain failures. The transport shell
//! serialises these into its own status/payload shape; nothing here depends
//! on a specific web framework.

use thiserror::Error;

use domains::error::DomainError;

use crate::translator::translate;

/// How a domain failure surfaces to an API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request payload was malformed; fixing the input may succeed.
    #[error("{0}")]
    BadRequest(String),

    /// A referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller is authenticated but not allowed to perform the mutation.
    #[error("{0}")]
    Forbidden(String),

    /// Infrastructure failure; details stay server-side.
    #[error("terjadi kegagalan pada server kami")]
    Internal,
}

impl ClientError {
    pub fn status_code(&self) -> u16 {
        match self {
            ClientError::BadRequest(_) => 400,
            ClientError::Forbidden(_) => 403,
            ClientError::NotFound(_) => 404,
            ClientError::Internal => 500,
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(error: DomainError) -> Self {
        let message = translate(&error);
        match error {
            DomainError::Validation(_) => ClientError::BadRequest(message),
            DomainError::NotFound(_) => ClientError::NotFound(message),
            DomainError::Authorization(_) => ClientError::Forbidden(message),
            DomainError::Internal(_) => ClientError::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::error::{AuthorizationError, NotFoundError};

    #[test]
    fn maps_each_kind_to_its_category() {
        let err: ClientError = DomainError::missing_property("CREATE_THREAD").into();
        assert_eq!(err, ClientError::BadRequest("title dan body harus diisi".into()));
        assert_eq!(err.status_code(), 400);

        let err: ClientError = DomainError::NotFound(NotFoundError::Thread {
            thread_id: "thread-123".into(),
        })
        .into();
        assert_eq!(err.status_code(), 404);

        let err: ClientError =
            DomainError::Authorization(AuthorizationError::DeleteComment).into();
        assert_eq!(err.status_code(), 403);

        let err: ClientError = DomainError::Internal("db down".into()).into();
        assert_eq!(err.status_code(), 500);
        // Internal details never leak to the client.
        assert!(!err.to_string().contains("db down"));
    }
}
