//! Domain service for the identity resolver.

use std::sync::Arc;

use identity_resolver_sdk::{
    AuthenticatedUser, AuthenticatorPluginClient, ConfigurationProvider, IdentityRecord,
    ResolvedCredentials, ResolverSettings, SelfTestOracle,
};
use tracing::{info, warn};

use super::error::{DomainError, MissingField};
use super::resolve::resolve_credentials;

/// Identity resolver service.
///
/// Holds no per-call state; settings are snapshotted at the start of each
/// call.
pub struct Service {
    config: Arc<dyn ConfigurationProvider>,
    oracle: Arc<dyn SelfTestOracle>,
    authenticator: Arc<dyn AuthenticatorPluginClient>,
}

impl Service {
    #[must_use]
    pub fn new(
        config: Arc<dyn ConfigurationProvider>,
        oracle: Arc<dyn SelfTestOracle>,
        authenticator: Arc<dyn AuthenticatorPluginClient>,
    ) -> Self {
        Self {
            config,
            oracle,
            authenticator,
        }
    }

    /// Current flag values.
    #[must_use]
    pub fn settings(&self) -> ResolverSettings {
        ResolverSettings::snapshot(self.config.as_ref(), self.oracle.as_ref())
    }

    /// Resolve the record into credentials without verifying them.
    ///
    /// # Errors
    ///
    /// - [`MissingField`] if a required entry is absent or empty
    #[tracing::instrument(skip_all)]
    pub fn resolve(
        &self,
        identity: &mut IdentityRecord,
    ) -> Result<ResolvedCredentials, MissingField> {
        resolve_credentials(&self.settings(), identity)
    }

    /// Resolve the record and verify the credentials.
    ///
    /// In self-test mode no backend is consulted and the user is
    /// `"<username>@<realm>"`.
    ///
    /// # Errors
    ///
    /// - `MissingField` if the record cannot be resolved
    /// - `AuthenticatorUnavailable` / `Internal` if the backend fails
    #[tracing::instrument(skip_all, fields(self_test))]
    pub async fn authenticate(
        &self,
        identity: &mut IdentityRecord,
    ) -> Result<Option<AuthenticatedUser>, DomainError> {
        info!("entering authenticate");
        let settings = self.settings();
        tracing::Span::current().record("self_test", settings.self_test);

        let credentials = resolve_credentials(&settings, identity)?;

        if settings.self_test {
            warn!("self-test mode: skipping credential verification");
            return Ok(Some(AuthenticatedUser::new(format!(
                "{}@{}",
                credentials.username(),
                credentials.realm()
            ))));
        }

        let user = self.authenticator.verify_credentials(&credentials).await?;
        if user.is_none() {
            info!(
                username = %credentials.username(),
                realm = %credentials.realm(),
                "credentials rejected"
            );
        }
        Ok(user)
    }
}
