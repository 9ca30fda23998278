//! Domain models for the identity resolver module.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::SecretString;

/// Record key holding the raw login name.
pub const LOGIN_KEY: &str = "login";

/// Record key holding the raw password.
pub const PASSWORD_KEY: &str = "password";

/// Record key holding an explicitly selected realm.
pub const REALM_KEY: &str = "realm";

/// Record key under which the ticket layer stores the user id it recovered
/// from an authentication ticket. Only honored in self-test mode.
pub const TICKET_USER_ID_KEY: &str = "repoze.who.plugins.auth_tkt.userid";

/// Raw key/value input describing one authentication attempt.
///
/// Values are kept as bytes: the upstream layer may hand them over in an
/// encoding other than UTF-8. Use [`crate::normalize_text`] to turn a value
/// into text.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct IdentityRecord {
    entries: BTreeMap<String, Vec<u8>>,
}

impl IdentityRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for IdentityRecord
where
    K: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.entries() {
            if key == PASSWORD_KEY {
                map.entry(&key, &"[REDACTED]");
            } else {
                map.entry(&key, &String::from_utf8_lossy(value));
            }
        }
        map.finish()
    }
}

/// Normalized (username, realm, password) triple.
///
/// Only ever built complete: username and realm are non-empty.
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    username: String,
    realm: String,
    password: SecretString,
}

impl ResolvedCredentials {
    #[must_use]
    pub fn new(username: String, realm: String, password: SecretString) -> Self {
        Self {
            username,
            realm,
            password,
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn realm(&self) -> &str {
        &self.realm
    }

    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// Opaque token identifying an authenticated user.
///
/// Its content is decided by the authenticator backend; in self-test mode
/// it is `"<username>@<realm>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthenticatedUser(String);

impl AuthenticatedUser {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
