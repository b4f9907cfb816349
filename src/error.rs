//! Error types for locale lookup.

use thiserror::Error;

/// Errors that can occur when resolving a locale.
///
/// Locale construction and pattern rendering are total; the only failure
/// in this crate is asking the registry for a name nobody registered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    #[error("locale '{name}' is not registered")]
    NotRegistered { name: String },
}
