//! Identity Resolver SDK
//!
//! This crate provides the public API for the `identity_resolver` module:
//!
//! - [`IdentityResolverClient`] - Public API trait for the middleware host
//! - [`AuthenticatorPluginClient`] - Credential verification backend trait
//! - [`ConfigurationProvider`] / [`SelfTestOracle`] - Read-only settings sources
//! - [`IdentityRecord`], [`ResolvedCredentials`], [`AuthenticatedUser`] - Models
//! - [`IdentityResolverError`], [`AuthenticatorError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use identity_resolver_sdk::{IdentityRecord, IdentityResolverClient};
//!
//! let mut identity = IdentityRecord::new();
//! identity.insert("login", "alice@sales");
//! identity.insert("password", "s3cret");
//!
//! match resolver.authenticate(&mut identity).await {
//!     Some(user) => tracing::info!(user = %user, "logged in"),
//!     None => tracing::info!("login rejected"),
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;
pub mod settings;
pub mod text;

// Re-export main types at crate root
pub use api::IdentityResolverClient;
pub use error::{AuthenticatorError, IdentityResolverError};
pub use models::{
    AuthenticatedUser, IdentityRecord, LOGIN_KEY, PASSWORD_KEY, REALM_KEY, ResolvedCredentials,
    TICKET_USER_ID_KEY,
};
pub use plugin_api::AuthenticatorPluginClient;
pub use settings::{ConfigurationProvider, ResolverSettings, SelfTestOracle};
pub use text::normalize_text;
