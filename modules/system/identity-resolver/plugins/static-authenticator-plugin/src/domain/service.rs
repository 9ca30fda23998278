//! Service implementation for the static authenticator plugin.

use std::collections::HashMap;

use identity_resolver_sdk::{AuthenticatedUser, ResolvedCredentials};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::config::StaticAuthenticatorPluginConfig;

/// Static authenticator service.
///
/// Accounts are keyed by (realm, username); the same username may exist in
/// several realms with different passwords.
pub struct Service {
    users: HashMap<(String, String), SecretString>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// A later entry for the same (realm, username) replaces an earlier one.
    #[must_use]
    pub fn from_config(cfg: &StaticAuthenticatorPluginConfig) -> Self {
        let users = cfg
            .users
            .iter()
            .map(|u| ((u.realm.clone(), u.username.clone()), u.password.clone()))
            .collect();

        Self { users }
    }

    /// Check the credentials and return the user as `"<username>@<realm>"`.
    ///
    /// Returns `None` for unknown accounts, wrong passwords and empty
    /// passwords.
    #[must_use]
    pub fn verify(&self, credentials: &ResolvedCredentials) -> Option<AuthenticatedUser> {
        let password = credentials.password().expose_secret();
        if password.is_empty() {
            debug!("empty password rejected");
            return None;
        }

        let key = (
            credentials.realm().to_owned(),
            credentials.username().to_owned(),
        );
        let expected = self.users.get(&key)?;
        if expected.expose_secret() != password {
            debug!(
                username = %credentials.username(),
                realm = %credentials.realm(),
                "password mismatch"
            );
            return None;
        }

        Some(AuthenticatedUser::new(format!(
            "{}@{}",
            credentials.username(),
            credentials.realm()
        )))
    }
}
