//! Domain layer for the identity resolver.

pub mod error;
pub mod local_client;
pub mod metadata;
pub mod resolve;
pub mod service;

pub use error::{DomainError, MissingField};
pub use local_client::IdentityResolverLocalClient;
pub use service::Service;
