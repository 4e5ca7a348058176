//! Domain layer for vcap-env
//!
//! This module contains the service binding model, the naming rules and the
//! environment store port.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{DecodeError, EnvError, EnvResult};
