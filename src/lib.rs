//! falocale - Persian (fa) date-display locale data and localized formatting
//!
//! This crate provides the Persian locale table (weekday and month names,
//! long-date format templates, relative-time phrasing), a process-wide
//! locale registry, and rendering of Moment.js-style display patterns
//! against that data.

pub mod error;
pub mod pattern;
pub mod registry;

mod cache;
mod formatter;
mod locale;

pub use error::LocaleError;
pub use formatter::format;
pub use formatter::relative::{humanize, phrase, with_tense, RelativeUnit, Tense};
pub use locale::{DateFormats, Locale, LongFormat, OrdinalFn, RelativeKey, RelativeTime};
