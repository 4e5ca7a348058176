//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON formatting on stderr
//! - `RUST_LOG` filter overrides

pub mod logger;

pub use logger::{LogFormat, LoggerImpl};
