//! Typed environment accessors.
//!
//! Readers go through [`EnvSource`] so a loader can be driven by the real
//! process environment at startup and by a plain map in tests.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::str::FromStr;

/// Read-only view of a set of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when the variable is absent.
    fn get(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the current process environment.
///
/// Values that are not valid Unicode are read lossily; the variable still
/// counts as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl<V, S> EnvSource for HashMap<String, V, S>
where
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.as_ref().to_owned())
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// String value of `key` if it is present, `default` otherwise.
///
/// Presence wins over emptiness: `KEY=` yields `""`, not the default.
pub fn env_or_default<E: EnvSource + ?Sized>(env: &E, key: &str, default: &str) -> String {
    env.get(key).unwrap_or_else(|| default.to_owned())
}

/// Base-10 value of `key` parsed as `T`.
///
/// Absent, empty, unparseable and out-of-range values all yield `default`
/// without reporting anything.
pub fn env_parse<T, E>(env: &E, key: &str, default: T) -> T
where
    T: FromStr,
    E: EnvSource + ?Sized,
{
    match env.get(key) {
        Some(raw) if !raw.is_empty() => raw.parse().unwrap_or(default),
        _ => default,
    }
}

/// Boolean value of `key`.
///
/// Accepts `true|1|yes|on` and `false|0|no|off` in any case; anything else
/// yields `default`.
pub fn env_bool<E: EnvSource + ?Sized>(env: &E, key: &str, default: bool) -> bool {
    let Some(raw) = env.get(key) else {
        return default;
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}
