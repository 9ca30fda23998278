//! Domain errors for the identity resolver.

use identity_resolver_sdk::{AuthenticatorError, IdentityResolverError};

/// A required identity record entry is absent or resolved to empty text.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("identity record has no usable '{field}' entry")]
pub struct MissingField {
    pub field: &'static str,
}

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    MissingField(#[from] MissingField),

    #[error("authenticator unavailable: {0}")]
    AuthenticatorUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthenticatorError> for DomainError {
    fn from(e: AuthenticatorError) -> Self {
        match e {
            AuthenticatorError::Unavailable(msg) => Self::AuthenticatorUnavailable(msg),
            AuthenticatorError::Internal(msg) => Self::Internal(msg),
        }
    }
}

// The field name stays in the logs; callers only learn that something was missing.
impl From<MissingField> for IdentityResolverError {
    fn from(_: MissingField) -> Self {
        Self::MissingField
    }
}
