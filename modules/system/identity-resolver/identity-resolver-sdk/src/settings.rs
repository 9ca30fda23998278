//! Read-only configuration consumed by the resolver.
//!
//! Where the values come from (database, config file, admin UI) is the
//! provider's business. The resolver takes one [`ResolverSettings`]
//! snapshot per call and never reads the providers again during that call.

/// Source of the realm naming conventions.
pub trait ConfigurationProvider: Send + Sync {
    /// Whether the login form offers an explicit realm selector.
    fn realm_box_enabled(&self) -> bool;

    /// Whether a login containing `@` is split into username and realm.
    fn split_at_sign_enabled(&self) -> bool;

    /// Realm used when none can be determined from the record.
    fn default_realm(&self) -> String;
}

/// Tells whether the server runs inside a test harness.
pub trait SelfTestOracle: Send + Sync {
    fn is_self_test(&self) -> bool;
}

/// Immutable snapshot of the flags that drive one resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverSettings {
    pub realm_box: bool,
    pub split_at_sign: bool,
    pub default_realm: String,
    pub self_test: bool,
}

impl ResolverSettings {
    /// Read every flag once from the given collaborators.
    #[must_use]
    pub fn snapshot(config: &dyn ConfigurationProvider, oracle: &dyn SelfTestOracle) -> Self {
        Self {
            realm_box: config.realm_box_enabled(),
            split_at_sign: config.split_at_sign_enabled(),
            default_realm: config.default_realm(),
            self_test: oracle.is_self_test(),
        }
    }
}
