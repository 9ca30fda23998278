#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Authenticator Plugin
//!
//! Verifies credentials against a user table taken from configuration.
//! Meant for development setups and end-to-end tests that need a few real
//! accounts in distinct realms without a user store.
//!
//! ## Configuration
//!
//! The host deserializes [`StaticAuthenticatorPluginConfig`] from whatever
//! source it uses and builds the plugin from it:
//!
//! ```ignore
//! use static_authenticator_plugin::{Service, StaticAuthenticatorPluginConfig};
//!
//! let cfg: StaticAuthenticatorPluginConfig = serde_json::from_value(serde_json::json!({
//!     "users": [
//!         { "username": "alice", "realm": "sales", "password": "alice-pw" },
//!         { "username": "bob", "realm": "support", "password": "bob-pw" }
//!     ]
//! }))?;
//!
//! let authenticator: Arc<dyn AuthenticatorPluginClient> = Arc::new(Service::from_config(&cfg));
//! ```

pub mod config;
pub mod domain;

pub use config::StaticAuthenticatorPluginConfig;
pub use domain::Service;
