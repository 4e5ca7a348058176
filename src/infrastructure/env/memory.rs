use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;

use crate::domain::error::EnvResult;
use crate::domain::ports::{validate_assignment, EnvStore};

/// In-memory environment for tests and dry runs.
///
/// Applies the same name/value rules as [`super::SystemEnv`] so that a bind
/// against this store behaves like one against the real environment.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    /// Empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment seeded with `pairs`
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RefCell::new(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Copy of every variable currently set
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.vars.borrow().clone()
    }

    /// Number of variables set
    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    /// Whether no variable is set
    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }
}

impl EnvStore for InMemoryEnv {
    fn get_os(&self, key: &str) -> Option<OsString> {
        self.vars.borrow().get(key).map(OsString::from)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }

    fn exists(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        validate_assignment(key, value)?;
        self.vars
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
