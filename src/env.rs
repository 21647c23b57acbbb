//! Injectable environment reader.
//!
//! The binary constructs [`Env::real()`], which reads the process
//! environment. Config tests construct [`Env::mock()`] from literal
//! pairs instead of mutating process state with `std::env::set_var`.

use std::collections::HashMap;

/// Environment variable reader handed to the config loader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// An `Env` backed by the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// An `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// The first non-empty value among `names`, in order.
    ///
    /// Used for credentials where a tool-specific variable takes
    /// precedence over a vendor-wide one.
    pub fn first_var(&self, names: &[&str]) -> Option<String> {
        names
            .iter()
            .filter_map(|name| self.var(name).ok())
            .find(|value| !value.is_empty())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
