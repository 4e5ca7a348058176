pub mod config;
pub mod credential;
pub mod env_name;
pub mod service;

pub use config::{Config, LoggingConfig};
pub use credential::{CredentialValue, Credentials};
pub use env_name::{credential_env_name, service_env_prefix, to_env_name};
pub use service::{ServiceBindingSet, ServiceInstance, VCAP_SERVICES_ENV};
