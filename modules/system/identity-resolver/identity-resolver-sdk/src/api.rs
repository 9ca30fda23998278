//! Public API trait for the identity resolver.
//!
//! This trait defines the interface the authentication middleware uses to
//! turn a raw identity record into an authenticated user.

use async_trait::async_trait;

use crate::error::IdentityResolverError;
use crate::models::{AuthenticatedUser, IdentityRecord, ResolvedCredentials};

/// Public API trait for the identity resolver.
///
/// ```ignore
/// let user = resolver.authenticate(&mut identity).await;
/// let identity = resolver.add_metadata(identity);
/// ```
#[async_trait]
pub trait IdentityResolverClient: Send + Sync {
    /// Resolve the record and verify the resulting credentials.
    ///
    /// Fails closed: a missing field, an empty username or realm, a rejected
    /// password and a backend error all yield `None`.
    ///
    /// In self-test mode the record may gain synthesized `login` and
    /// `password` entries.
    async fn authenticate(&self, identity: &mut IdentityRecord) -> Option<AuthenticatedUser>;

    /// Resolve the record into credentials without verifying them.
    ///
    /// # Errors
    ///
    /// - `MissingField` if `login`, `password` or (with the realm box
    ///   enabled) `realm` is absent
    fn resolve(
        &self,
        identity: &mut IdentityRecord,
    ) -> Result<ResolvedCredentials, IdentityResolverError>;

    /// Attach metadata for downstream consumers.
    ///
    /// Currently returns the record unchanged.
    fn add_metadata(&self, identity: IdentityRecord) -> IdentityRecord;
}
