//! Where loaded variables go and where credentials are read from.

use std::collections::HashMap;
use std::env;

/// A mutable set of environment variables.
///
/// `ProcessEnv` is the real thing; `MemoryEnv` lets the loader run without
/// touching process-wide state.
pub trait EnvStore {
    /// Value of `key`, or `None` if unset or not valid unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `key` is present at all, including with an empty value.
    fn contains(&self, key: &str) -> bool;

    /// Sets `key` unconditionally; callers decide precedence.
    fn set(&mut self, key: &str, value: &str);
}

/// The process environment.
///
/// Writes are visible to the whole process. Load before spawning threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn contains(&self, key: &str) -> bool {
        env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
    }
}

/// An isolated, in-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
