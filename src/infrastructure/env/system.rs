use std::env;
use std::ffi::OsString;

use crate::domain::error::EnvResult;
use crate::domain::ports::{validate_assignment, EnvStore};

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvStore for SystemEnv {
    #[inline]
    fn get_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    #[inline]
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    #[inline]
    fn exists(&self, key: &str) -> bool {
        env::var_os(key).is_some()
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        // set_var panics on names it cannot store
        validate_assignment(key, value)?;
        env::set_var(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::EnvError;

    #[test]
    fn test_system_env_delegation() {
        temp_env::with_var("SYSTEM_ENV_TEST_GET", Some("value"), || {
            let env = SystemEnv;
            assert_eq!(env.get("SYSTEM_ENV_TEST_GET"), Some("value".to_string()));
            assert!(env.exists("SYSTEM_ENV_TEST_GET"));
        });
    }

    #[test]
    fn test_empty_value_exists() {
        temp_env::with_var("SYSTEM_ENV_TEST_EMPTY", Some(""), || {
            assert!(SystemEnv.exists("SYSTEM_ENV_TEST_EMPTY"));
        });
    }

    #[test]
    fn test_set_writes_process_environment() {
        temp_env::with_var_unset("SYSTEM_ENV_TEST_SET", || {
            let env = SystemEnv;
            assert!(!env.exists("SYSTEM_ENV_TEST_SET"));

            env.set("SYSTEM_ENV_TEST_SET", "written").unwrap();
            assert_eq!(
                std::env::var("SYSTEM_ENV_TEST_SET").as_deref(),
                Ok("written")
            );
        });
    }

    #[test]
    fn test_set_rejects_invalid_names_without_panicking() {
        let env = SystemEnv;
        assert_eq!(
            env.set("A=B", "x"),
            Err(EnvError::InvalidName("A=B".to_string()))
        );
        assert_eq!(env.set("", "x"), Err(EnvError::InvalidName(String::new())));
    }
}
