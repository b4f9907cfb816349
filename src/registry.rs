//! Process-wide locale registry.
//!
//! Locales are registered by name during initialization and looked up by
//! date-formatting calls thereafter. The registry is seeded with the builtin
//! Persian table on first access; a later registration under an existing
//! name replaces the earlier entry.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::LocaleError;
use crate::locale::Locale;

/// Global locale registry, keyed by locale code.
static REGISTRY: Mutex<Option<HashMap<&'static str, Locale>>> = Mutex::new(None);

fn with_registry<T>(f: impl FnOnce(&mut HashMap<&'static str, Locale>) -> T) -> T {
    let mut guard = REGISTRY.lock().unwrap();

    let registry = guard.get_or_insert_with(|| {
        let fa = Locale::fa();
        HashMap::from([(fa.name, fa)])
    });

    f(registry)
}

/// Register a locale under its own name.
pub fn register(locale: Locale) {
    with_registry(|registry| {
        registry.insert(locale.name, locale);
    });
}

/// Look up a registered locale by name.
pub fn get(name: &str) -> Result<Locale, LocaleError> {
    with_registry(|registry| {
        registry
            .get(name)
            .cloned()
            .ok_or_else(|| LocaleError::NotRegistered {
                name: name.to_string(),
            })
    })
}

/// Returns true if a locale is registered under the given name.
pub fn is_registered(name: &str) -> bool {
    with_registry(|registry| registry.contains_key(name))
}
