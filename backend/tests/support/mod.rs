#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

// One test at a time may touch the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Call `f` while the listed variables hold the given values.
///
/// Each pair is `(name, value)`; `None` unsets the variable. The previous
/// values come back when `f` returns or panics.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

/// Unsets every variable `TransitConfig::apply_env_overrides` reads.
pub const CLEAR_TRANSIT_ENV: [(&str, Option<&str>); 3] = [
    ("HOST", None),
    ("PORT", None),
    ("SETTLEMENTS_FILE", None),
];

struct EnvRestore {
    previous: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let names: HashSet<&str> = changes.iter().map(|(name, _)| *name).collect();
        let previous = names
            .into_iter()
            .map(|name| (name.to_string(), std::env::var(name).ok()))
            .collect();

        for (name, value) in changes {
            set_or_remove(name, *value);
        }
        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..) {
            set_or_remove(&name, value.as_deref());
        }
    }
}

fn set_or_remove(name: &str, value: Option<&str>) {
    match value {
        Some(value) => std::env::set_var(name, value),
        None => std::env::remove_var(name),
    }
}
