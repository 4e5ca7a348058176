//! Infrastructure layer module
//!
//! This module contains the infrastructure adapters:
//! - Environment stores (process environment and in-memory)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod env;
pub mod logging;
