//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvStore: get/exists/set access to environment variables
//!
//! Infrastructure adapters implement these traits so the binder stays
//! independent of the real process environment.

pub mod env_store;

pub use env_store::{validate_assignment, EnvStore};
