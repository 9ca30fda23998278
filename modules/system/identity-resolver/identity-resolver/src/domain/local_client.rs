//! Local (in-process) client for the identity resolver.

use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use identity_resolver_sdk::{
    AuthenticatedUser, IdentityRecord, IdentityResolverClient, IdentityResolverError,
    ResolvedCredentials,
};

use super::metadata::add_metadata;
use super::Service;

/// Local client wrapping the service.
///
/// Handed to the middleware host by the module during `init()`.
pub struct IdentityResolverLocalClient {
    svc: Arc<Service>,
}

impl IdentityResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_failure(op: &str, e: &impl Display) {
    tracing::error!(operation = op, error = %e, "identity_resolver call failed");
}

#[async_trait]
impl IdentityResolverClient for IdentityResolverLocalClient {
    async fn authenticate(&self, identity: &mut IdentityRecord) -> Option<AuthenticatedUser> {
        self.svc
            .authenticate(identity)
            .await
            .inspect_err(|e| log_failure("authenticate", e))
            .ok()
            .flatten()
    }

    fn resolve(
        &self,
        identity: &mut IdentityRecord,
    ) -> Result<ResolvedCredentials, IdentityResolverError> {
        self.svc
            .resolve(identity)
            .inspect_err(|e| log_failure("resolve", e))
            .map_err(IdentityResolverError::from)
    }

    fn add_metadata(&self, identity: IdentityRecord) -> IdentityRecord {
        add_metadata(identity)
    }
}
