//! Error types for the identity resolver module.

use thiserror::Error;

/// Errors surfaced by credential resolution.
///
/// The caller is never told which field was absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityResolverError {
    /// A required identity record entry was absent or empty.
    #[error("missing field in identity record")]
    MissingField,
}

/// Errors an authenticator backend may report.
///
/// A rejected password is not an error; backends report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum AuthenticatorError {
    /// The backend (user store, realm store) cannot be reached.
    #[error("authenticator unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
