//! Identity resolver module.

use std::sync::{Arc, OnceLock};

use identity_resolver_sdk::{
    AuthenticatorPluginClient, ConfigurationProvider, IdentityResolverClient, ResolverSettings,
    SelfTestOracle,
};
use tracing::{info, warn};

use crate::config::IdentityResolverConfig;
use crate::domain::{IdentityResolverLocalClient, Service};

/// Identity resolver module.
///
/// Wires the configuration collaborators and the authenticator backend into
/// a [`Service`] and hands out the [`IdentityResolverClient`] for the
/// middleware host. Can be initialized once.
pub struct IdentityResolverModule {
    service: OnceLock<Arc<Service>>,
}

impl Default for IdentityResolverModule {
    fn default() -> Self {
        Self {
            service: OnceLock::new(),
        }
    }
}

impl IdentityResolverModule {
    /// Initialize from static configuration.
    ///
    /// # Errors
    ///
    /// Fails if the module was already initialized.
    pub fn init(
        &self,
        cfg: IdentityResolverConfig,
        authenticator: Arc<dyn AuthenticatorPluginClient>,
    ) -> anyhow::Result<Arc<dyn IdentityResolverClient>> {
        let cfg = Arc::new(cfg);
        self.init_with_providers(cfg.clone(), cfg, authenticator)
    }

    /// Initialize with externally owned configuration sources.
    ///
    /// The providers are read again on every call, so flag changes take
    /// effect without re-initialization.
    ///
    /// # Errors
    ///
    /// Fails if the module was already initialized.
    #[tracing::instrument(skip_all, fields(default_realm))]
    pub fn init_with_providers(
        &self,
        config: Arc<dyn ConfigurationProvider>,
        oracle: Arc<dyn SelfTestOracle>,
        authenticator: Arc<dyn AuthenticatorPluginClient>,
    ) -> anyhow::Result<Arc<dyn IdentityResolverClient>> {
        let settings = ResolverSettings::snapshot(config.as_ref(), oracle.as_ref());
        tracing::Span::current().record("default_realm", settings.default_realm.as_str());

        if settings.self_test {
            warn!(
                "Identity resolver is running in self-test mode: \
                 credentials are NOT verified. Do NOT use this mode in production."
            );
        }
        info!(
            realm_box = settings.realm_box,
            split_at_sign = settings.split_at_sign,
            "Initializing identity_resolver"
        );

        let svc = Arc::new(Service::new(config, oracle, authenticator));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(Arc::new(IdentityResolverLocalClient::new(svc)))
    }
}
