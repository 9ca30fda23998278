//! Configuration for the static authenticator plugin.

use secrecy::SecretString;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthenticatorPluginConfig {
    /// Accounts accepted by the plugin.
    pub users: Vec<UserEntry>,
}

/// One account in one realm.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub username: String,
    pub realm: String,
    pub password: SecretString,
}
