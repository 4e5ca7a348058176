use thiserror::Error;

/// The source variable held something other than a service binding set.
///
/// This is the only error the binding core reports. Every other irregularity
/// (unsupported credential shapes, pre-existing variables, names the OS
/// cannot hold) is skipped and recorded in the bind report instead.
#[derive(Error, Debug)]
#[error("Failed to decode {var}: {source}")]
pub struct DecodeError {
    /// Name of the variable that was decoded
    pub var: String,

    /// Underlying JSON error
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(var: impl Into<String>, source: serde_json::Error) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}

/// Errors raised by an environment store when a write cannot be represented
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// Name is empty or contains `=` or NUL
    #[error("Invalid environment variable name: {0:?}")]
    InvalidName(String),

    /// Value contains NUL
    #[error("Invalid value for environment variable {0}: contains NUL")]
    InvalidValue(String),
}

/// Result of an environment write
pub type EnvResult<T> = Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_the_variable() {
        let source = serde_json::from_str::<serde_json::Value>("blah").unwrap_err();
        let err = DecodeError::new("VCAP_SERVICES", source);

        let message = err.to_string();
        assert!(message.starts_with("Failed to decode VCAP_SERVICES: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_env_error_display() {
        assert_eq!(
            EnvError::InvalidName("A=B".to_string()).to_string(),
            "Invalid environment variable name: \"A=B\""
        );
        assert_eq!(
            EnvError::InvalidValue("S_A".to_string()).to_string(),
            "Invalid value for environment variable S_A: contains NUL"
        );
    }
}
