//! Configuration for the identity resolver.

use identity_resolver_sdk::{ConfigurationProvider, SelfTestOracle};
use serde::Deserialize;

/// Configuration.
///
/// Serves as the static [`ConfigurationProvider`] and [`SelfTestOracle`]
/// when the host has no dynamic source for these flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityResolverConfig {
    /// The login form presents an explicit realm selector.
    pub realm_box: bool,

    /// Split `user@realm` logins on the last `@`.
    pub split_at_sign: bool,

    /// Realm used when none can be determined from the record.
    pub default_realm: String,

    /// Skip real credential checks. Test harnesses only.
    pub self_test: bool,
}

impl Default for IdentityResolverConfig {
    fn default() -> Self {
        Self {
            realm_box: false,
            split_at_sign: true,
            default_realm: String::new(),
            self_test: false,
        }
    }
}

impl ConfigurationProvider for IdentityResolverConfig {
    fn realm_box_enabled(&self) -> bool {
        self.realm_box
    }

    fn split_at_sign_enabled(&self) -> bool {
        self.split_at_sign
    }

    fn default_realm(&self) -> String {
        self.default_realm.clone()
    }
}

impl SelfTestOracle for IdentityResolverConfig {
    fn is_self_test(&self) -> bool {
        self.self_test
    }
}
