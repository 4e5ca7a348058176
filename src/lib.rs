//! vcap-env - Cloud Foundry service credentials as environment variables
//!
//! Cloud Foundry passes the credentials of bound services as a single JSON
//! document in `VCAP_SERVICES`. This crate projects every credential into
//! the process environment under a derived name, so an application can read
//! `POSTGRES_PASSWORD` instead of parsing the document itself.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): binding model, naming rules, environment port
//! - **Service Layer** (`services`): the binder
//! - **Infrastructure Layer** (`infrastructure`): environment stores, config, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! fn main() -> Result<(), vcap_env::DecodeError> {
//!     vcap_env::bind()?;
//!     let _password = std::env::var("POSTGRES_PASSWORD");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{DecodeError, EnvError};
pub use domain::models::{
    to_env_name, Config, CredentialValue, Credentials, LoggingConfig, ServiceBindingSet,
    ServiceInstance,
};
pub use domain::ports::EnvStore;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::env::{InMemoryEnv, SystemEnv};
pub use services::{
    bind, AssignmentStatus, BindPlan, BindReport, Binder, VCAP_SERVICES_ENV,
};
