//! Plugin API trait for credential verification backends.
//!
//! The resolver hands every fully resolved triple to exactly one
//! implementation of this trait. Password checks, account lockout and realm
//! store lookups all live behind it.

use async_trait::async_trait;

use crate::error::AuthenticatorError;
use crate::models::{AuthenticatedUser, ResolvedCredentials};

/// Credential verification backend.
#[async_trait]
pub trait AuthenticatorPluginClient: Send + Sync {
    /// Verify a (username, realm, password) triple.
    ///
    /// Returns `Ok(Some(_))` for valid credentials and `Ok(None)` when the
    /// credentials are rejected.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be reached
    /// - `Internal` for unexpected errors
    async fn verify_credentials(
        &self,
        credentials: &ResolvedCredentials,
    ) -> Result<Option<AuthenticatedUser>, AuthenticatorError>;
}
