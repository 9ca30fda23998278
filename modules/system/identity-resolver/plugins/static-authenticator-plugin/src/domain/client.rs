//! Client implementation for the static authenticator plugin.
//!
//! Implements `AuthenticatorPluginClient` using the domain service.

use async_trait::async_trait;
use identity_resolver_sdk::{
    AuthenticatedUser, AuthenticatorError, AuthenticatorPluginClient, ResolvedCredentials,
};

use super::service::Service;

#[async_trait]
impl AuthenticatorPluginClient for Service {
    async fn verify_credentials(
        &self,
        credentials: &ResolvedCredentials,
    ) -> Result<Option<AuthenticatedUser>, AuthenticatorError> {
        Ok(self.verify(credentials))
    }
}
