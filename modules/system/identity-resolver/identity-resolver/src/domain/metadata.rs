//! Metadata enrichment for authenticated identities.

use identity_resolver_sdk::{IdentityRecord, PASSWORD_KEY};
use tracing::debug;

/// Return the record unchanged, logging its entries for diagnostics.
#[must_use]
pub fn add_metadata(identity: IdentityRecord) -> IdentityRecord {
    debug!(entries = identity.len(), "add metadata");
    for (key, value) in identity.entries() {
        if key == PASSWORD_KEY {
            debug!(key, "identity entry: [REDACTED]");
        } else {
            debug!(key, value = %String::from_utf8_lossy(value), "identity entry");
        }
    }
    identity
}
