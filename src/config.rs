use std::collections::BTreeMap;

/// Environment variable holding the cosmovisor home directory.
pub const ENV_HOME: &str = "DAEMON_HOME";
/// Environment variable holding the name of the managed binary.
pub const ENV_NAME: &str = "DAEMON_NAME";

/// The two environment values cosmovisor needs before it can do anything.
///
/// Captured once per invocation and handed around by reference, so nothing
/// downstream has to read the process environment itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    home: Option<String>,
    name: Option<String>,
}

impl EnvSnapshot {
    pub fn new(home: Option<String>, name: Option<String>) -> Self {
        Self { home, name }
    }

    /// Capture both values from the process environment.
    ///
    /// A value that is not valid Unicode counts as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a snapshot from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            home: lookup(ENV_HOME),
            name: lookup(ENV_NAME),
        }
    }

    pub fn home(&self) -> Option<&str> {
        non_empty(&self.home)
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Both values are present and non-empty.
    pub fn is_complete(&self) -> bool {
        self.home().is_some() && self.name().is_some()
    }

    /// Keys that are unset or empty, home first.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.home().is_none() {
            missing.push(ENV_HOME);
        }
        if self.name().is_none() {
            missing.push(ENV_NAME);
        }
        missing
    }

    /// Key name to value; absent values map to the empty string.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (ENV_HOME, self.home.clone().unwrap_or_default()),
            (ENV_NAME, self.name.clone().unwrap_or_default()),
        ])
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
