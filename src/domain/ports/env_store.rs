use std::ffi::OsString;

use crate::domain::error::{EnvError, EnvResult};

/// Port for reading and writing environment variables
///
/// The binder talks to the environment only through this trait, so the
/// "existing wins" rule can be exercised against an in-memory store without
/// touching the real process environment.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Checking and then setting a variable
/// are two separate calls; callers that share a store across threads must
/// provide their own mutual exclusion.
///
/// # Examples
///
/// ```no_run
/// use vcap_env::domain::ports::EnvStore;
///
/// fn set_default<E: EnvStore>(env: &E, key: &str, value: &str) {
///     if !env.exists(key) {
///         let _ = env.set(key, value);
///     }
/// }
/// ```
pub trait EnvStore {
    /// Raw value of `key`, or `None` only if unset
    fn get_os(&self, key: &str) -> Option<OsString>;

    /// Value of `key`, or `None` if unset or not valid UTF-8
    fn get(&self, key: &str) -> Option<String> {
        self.get_os(key).and_then(|value| value.into_string().ok())
    }

    /// Whether `key` is set at all, including to the empty string
    fn exists(&self, key: &str) -> bool;

    /// Set `key` to `value`
    ///
    /// # Errors
    ///
    /// Returns [`EnvError`] if the name or value cannot be stored.
    fn set(&self, key: &str, value: &str) -> EnvResult<()>;
}

impl<E: EnvStore + ?Sized> EnvStore for &E {
    fn get_os(&self, key: &str) -> Option<OsString> {
        (**self).get_os(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        (**self).set(key, value)
    }
}

/// Check that an assignment can be represented in a process environment.
///
/// Names must be non-empty and free of `=` and NUL; values must be free of NUL.
pub fn validate_assignment(key: &str, value: &str) -> EnvResult<()> {
    if key.is_empty() || key.contains('=') || key.contains('\0') {
        return Err(EnvError::InvalidName(key.to_string()));
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue(key.to_string()));
    }
    Ok(())
}
