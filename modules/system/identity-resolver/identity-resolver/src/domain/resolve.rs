//! Realm disambiguation: raw identity record to (username, realm, password).
//!
//! Everything here is a pure function of the record and a
//! [`ResolverSettings`] snapshot.

use identity_resolver_sdk::{
    IdentityRecord, LOGIN_KEY, PASSWORD_KEY, REALM_KEY, ResolvedCredentials, ResolverSettings,
    TICKET_USER_ID_KEY, normalize_text,
};
use secrecy::SecretString;
use tracing::{debug, error, info};

use super::error::MissingField;

/// Resolve `identity` into credentials under `settings`.
///
/// In self-test mode a record without `login` but with a ticket user id
/// first gets `login` and `password` set to that id.
///
/// # Errors
///
/// Returns [`MissingField`] when `login` or `password` is absent, when the
/// realm box is enabled and `realm` is absent, or when the username or realm
/// comes out empty.
pub fn resolve_credentials(
    settings: &ResolverSettings,
    identity: &mut IdentityRecord,
) -> Result<ResolvedCredentials, MissingField> {
    if settings.self_test {
        bootstrap_self_test(identity);
    }
    let identity: &IdentityRecord = identity;

    let (raw_username, raw_realm) = select_realm(settings, identity)?;
    let raw_password = required(identity, PASSWORD_KEY)?;

    let username = normalize_text(raw_username);
    let realm = normalize_text(raw_realm);
    info!(username = %username, realm = %realm, "resolved login");

    if username.is_empty() {
        error!("login resolved to an empty username");
        return Err(MissingField { field: LOGIN_KEY });
    }
    if realm.is_empty() {
        error!("login resolved to an empty realm");
        return Err(MissingField { field: REALM_KEY });
    }

    let password = SecretString::from(normalize_text(raw_password));
    Ok(ResolvedCredentials::new(username, realm, password))
}

fn bootstrap_self_test(identity: &mut IdentityRecord) {
    if identity.contains_key(LOGIN_KEY) {
        return;
    }
    if let Some(uid) = identity.get(TICKET_USER_ID_KEY).map(<[u8]>::to_vec) {
        debug!("using ticket user id as login and password");
        identity.insert(LOGIN_KEY, uid.clone());
        identity.insert(PASSWORD_KEY, uid);
    }
}

/// Split the raw login into raw (username, realm) according to the flags.
fn select_realm<'a>(
    settings: &'a ResolverSettings,
    identity: &'a IdentityRecord,
) -> Result<(&'a [u8], &'a [u8]), MissingField> {
    let login = required(identity, LOGIN_KEY)?;

    if settings.realm_box {
        return Ok((login, required(identity, REALM_KEY)?));
    }

    debug!("no realm box");
    let default_realm = settings.default_realm.as_bytes();

    // b'@' never occurs inside a multi-byte UTF-8 sequence, so splitting the
    // raw bytes matches splitting the decoded text.
    match login.iter().rposition(|&b| b == b'@') {
        Some(at) if settings.split_at_sign => {
            debug!("splitting login name on the last '@'");
            Ok((&login[..at], &login[at + 1..]))
        }
        Some(_) => {
            debug!("keeping '@' in login name");
            Ok((login, identity.get(REALM_KEY).unwrap_or(default_realm)))
        }
        None => Ok((login, default_realm)),
    }
}

fn required<'a>(
    identity: &'a IdentityRecord,
    field: &'static str,
) -> Result<&'a [u8], MissingField> {
    identity.get(field).ok_or_else(|| {
        error!(missing = field, "identity record lacks a required entry");
        MissingField { field }
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn settings(realm_box: bool, split_at_sign: bool) -> ResolverSettings {
        ResolverSettings {
            realm_box,
            split_at_sign,
            default_realm: "default".to_owned(),
            self_test: false,
        }
    }

    fn record(entries: &[(&str, &str)]) -> IdentityRecord {
        entries.iter().copied().collect()
    }

    fn resolved(
        settings: &ResolverSettings,
        entries: &[(&str, &str)],
    ) -> Result<(String, String, String), MissingField> {
        let mut identity = record(entries);
        resolve_credentials(settings, &mut identity).map(|c| {
            (
                c.username().to_owned(),
                c.realm().to_owned(),
                c.password().expose_secret().to_owned(),
            )
        })
    }

    fn triple(username: &str, realm: &str, password: &str) -> (String, String, String) {
        (username.to_owned(), realm.to_owned(), password.to_owned())
    }

    #[test]
    fn realm_box_uses_record_values_verbatim() {
        for split in [false, true] {
            let result = resolved(
                &settings(true, split),
                &[("login", "alice@other"), ("realm", "sales"), ("password", "pw")],
            );
            assert_eq!(result, Ok(triple("alice@other", "sales", "pw")));
        }
    }

    #[test]
    fn realm_box_requires_realm() {
        let result = resolved(&settings(true, true), &[("login", "alice"), ("password", "pw")]);
        assert_eq!(result, Err(MissingField { field: REALM_KEY }));
    }

    #[test]
    fn split_uses_last_at_sign() {
        let result = resolved(
            &settings(false, true),
            &[("login", "alice@realmA"), ("password", "pw")],
        );
        assert_eq!(result, Ok(triple("alice", "realmA", "pw")));

        let result = resolved(
            &settings(false, true),
            &[("login", "alice@example.com@realmA"), ("password", "pw")],
        );
        assert_eq!(result, Ok(triple("alice@example.com", "realmA", "pw")));
    }

    #[test]
    fn split_ignores_realm_entry() {
        let result = resolved(
            &settings(false, true),
            &[("login", "alice@realmA"), ("realm", "realmB"), ("password", "pw")],
        );
        assert_eq!(result, Ok(triple("alice", "realmA", "pw")));
    }

    #[test]
    fn no_split_keeps_full_login_and_falls_back_to_default_realm() {
        let result = resolved(
            &settings(false, false),
            &[("login", "alice@realmA"), ("password", "pw")],
        );
        assert_eq!(result, Ok(triple("alice@realmA", "default", "pw")));
    }

    #[test]
    fn no_split_prefers_realm_entry() {
        let result = resolved(
            &settings(false, false),
            &[("login", "alice@realmA"), ("realm", "realmB"), ("password", "pw")],
        );
        assert_eq!(result, Ok(triple("alice@realmA", "realmB", "pw")));
    }

    #[test]
    fn bare_login_uses_default_realm() {
        for split in [false, true] {
            let result = resolved(
                &settings(false, split),
                &[("login", "bob"), ("realm", "ignored"), ("password", "pw")],
            );
            assert_eq!(result, Ok(triple("bob", "default", "pw")));
        }
    }

    #[test]
    fn missing_password_always_fails() {
        for realm_box in [false, true] {
            for split in [false, true] {
                let result = resolved(
                    &settings(realm_box, split),
                    &[("login", "alice@realmA"), ("realm", "realmA")],
                );
                assert_eq!(result, Err(MissingField { field: PASSWORD_KEY }));
            }
        }
    }

    #[test]
    fn missing_login_fails() {
        let result = resolved(&settings(false, true), &[("password", "pw")]);
        assert_eq!(result, Err(MissingField { field: LOGIN_KEY }));
    }

    #[test]
    fn empty_parts_after_split_fail() {
        let result = resolved(&settings(false, true), &[("login", "@realmA"), ("password", "pw")]);
        assert_eq!(result, Err(MissingField { field: LOGIN_KEY }));

        let result = resolved(&settings(false, true), &[("login", "alice@"), ("password", "pw")]);
        assert_eq!(result, Err(MissingField { field: REALM_KEY }));
    }

    #[test]
    fn empty_default_realm_fails() {
        let cfg = ResolverSettings {
            default_realm: String::new(),
            ..settings(false, true)
        };
        let result = resolved(&cfg, &[("login", "bob"), ("password", "pw")]);
        assert_eq!(result, Err(MissingField { field: REALM_KEY }));
    }

    #[test]
    fn latin1_login_and_password_are_normalized() {
        let mut identity = IdentityRecord::new();
        identity.insert("login", vec![0x6a, 0xfc, 0x72, b'@', b'd', b'e']);
        identity.insert("password", vec![0xe4, b'x']);

        let creds = resolve_credentials(&settings(false, true), &mut identity).unwrap();
        assert_eq!(creds.username(), "j\u{fc}r");
        assert_eq!(creds.realm(), "de");
        assert_eq!(creds.password().expose_secret(), "\u{e4}x");
    }

    #[test]
    fn self_test_bootstraps_from_ticket_user_id() {
        let cfg = ResolverSettings {
            self_test: true,
            ..settings(false, true)
        };
        let mut identity = record(&[(TICKET_USER_ID_KEY, "u1")]);

        let creds = resolve_credentials(&cfg, &mut identity).unwrap();
        assert_eq!(creds.username(), "u1");
        assert_eq!(creds.realm(), "default");
        assert_eq!(creds.password().expose_secret(), "u1");
        assert_eq!(identity.get(LOGIN_KEY), Some(&b"u1"[..]));
        assert_eq!(identity.get(PASSWORD_KEY), Some(&b"u1"[..]));
    }

    #[test]
    fn self_test_keeps_existing_login() {
        let cfg = ResolverSettings {
            self_test: true,
            ..settings(false, true)
        };
        let mut identity = record(&[
            ("login", "alice"),
            ("password", "pw"),
            (TICKET_USER_ID_KEY, "u1"),
        ]);

        let creds = resolve_credentials(&cfg, &mut identity).unwrap();
        assert_eq!(creds.username(), "alice");
        assert_eq!(creds.password().expose_secret(), "pw");
    }

    #[test]
    fn ticket_user_id_is_ignored_outside_self_test() {
        let mut identity = record(&[(TICKET_USER_ID_KEY, "u1")]);

        let result = resolve_credentials(&settings(false, true), &mut identity);
        assert_eq!(result.err(), Some(MissingField { field: LOGIN_KEY }));
        assert!(!identity.contains_key(LOGIN_KEY));
    }

    #[test]
    fn self_test_with_realm_box_still_requires_realm() {
        let cfg = ResolverSettings {
            self_test: true,
            ..settings(true, true)
        };
        let mut identity = record(&[(TICKET_USER_ID_KEY, "u1")]);

        let result = resolve_credentials(&cfg, &mut identity);
        assert_eq!(result.err(), Some(MissingField { field: REALM_KEY }));
        assert_eq!(identity.get(LOGIN_KEY), Some(&b"u1"[..]));
    }

    #[test]
    fn utf8_login_splits_on_last_at_sign() {
        let result = resolved(
            &settings(false, true),
            &[("login", "j\u{fc}rgen@r\u{e9}alm"), ("password", "pw")],
        );
        assert_eq!(result, Ok(triple("j\u{fc}rgen", "r\u{e9}alm", "pw")));
    }

    #[test]
    fn empty_realm_entry_without_split_fails() {
        let result = resolved(
            &settings(false, false),
            &[("login", "alice@realmA"), ("realm", ""), ("password", "pw")],
        );
        assert_eq!(result, Err(MissingField { field: REALM_KEY }));
    }
}
