//! Identity Resolver Module
//!
//! Turns the loosely structured identity record handed over by the HTTP
//! authentication layer into a (username, realm, password) triple, applying
//! the server's realm naming conventions, and delegates verification to an
//! [`identity_resolver_sdk::AuthenticatorPluginClient`].
//!
//! Provides the `IdentityResolverClient` trait for consumption by the
//! middleware host.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use module::IdentityResolverModule;
