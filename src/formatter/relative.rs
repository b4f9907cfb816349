//! Relative-time phrasing.
//!
//! Renders the locale's relative-time templates: singular/plural template
//! selection from a count, `%d` count substitution, and `%s` future/past
//! wrapping. [`humanize`] buckets a signed duration into the standard
//! display thresholds.

use chrono::Duration;

use crate::locale::{Locale, RelativeKey};

/// A relative-time unit, selecting a singular/plural template pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

/// Whether a phrase refers to the future or the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Future,
    Past,
}

/// Render a count of units as a locale phrase.
///
/// Counts of at most one pick the singular template; larger counts pick the
/// plural template with the count substituted for `%d`. The count's absolute
/// value is displayed. Seconds have a single "a few seconds" template, used
/// for any count.
pub fn phrase(locale: &Locale, count: i64, unit: RelativeUnit) -> String {
    let n = count.unsigned_abs();
    let key = if n <= 1 {
        singular_key(unit)
    } else {
        plural_key(unit)
    };
    fill_count(locale.relative_time.template(key), n)
}

/// Wrap a phrase in the locale's future or past template.
pub fn with_tense(locale: &Locale, phrase: &str, tense: Tense) -> String {
    let key = match tense {
        Tense::Future => RelativeKey::Future,
        Tense::Past => RelativeKey::Past,
    };
    fill_subject(locale.relative_time.template(key), phrase)
}

/// Render a signed duration as a relative-time phrase.
///
/// Thresholds follow the common display convention: up to 44 seconds reads
/// as seconds, 45-89 seconds as a minute, and so on up the units. With
/// `with_suffix`, negative durations phrase as the past and non-negative
/// ones as the future.
pub fn humanize(locale: &Locale, duration: Duration, with_suffix: bool) -> String {
    let seconds = duration.num_seconds().unsigned_abs();
    let minutes = div_round(seconds, 60);
    let hours = div_round(minutes, 60);
    let days = div_round(hours, 24);

    let body = if seconds <= 44 {
        phrase(locale, seconds as i64, RelativeUnit::Seconds)
    } else if seconds <= 89 {
        phrase(locale, 1, RelativeUnit::Minutes)
    } else if minutes <= 44 {
        phrase(locale, minutes as i64, RelativeUnit::Minutes)
    } else if minutes <= 89 {
        phrase(locale, 1, RelativeUnit::Hours)
    } else if hours <= 21 {
        phrase(locale, hours as i64, RelativeUnit::Hours)
    } else if hours <= 35 {
        phrase(locale, 1, RelativeUnit::Days)
    } else if days <= 25 {
        phrase(locale, days as i64, RelativeUnit::Days)
    } else if days <= 45 {
        phrase(locale, 1, RelativeUnit::Months)
    } else if days <= 344 {
        phrase(locale, div_round(days, 30) as i64, RelativeUnit::Months)
    } else if days <= 547 {
        phrase(locale, 1, RelativeUnit::Years)
    } else {
        phrase(locale, div_round(days, 365) as i64, RelativeUnit::Years)
    };

    if with_suffix {
        let tense = if duration < Duration::zero() {
            Tense::Past
        } else {
            Tense::Future
        };
        with_tense(locale, &body, tense)
    } else {
        body
    }
}

fn singular_key(unit: RelativeUnit) -> RelativeKey {
    match unit {
        RelativeUnit::Seconds => RelativeKey::Seconds,
        RelativeUnit::Minutes => RelativeKey::Minute,
        RelativeUnit::Hours => RelativeKey::Hour,
        RelativeUnit::Days => RelativeKey::Day,
        RelativeUnit::Months => RelativeKey::Month,
        RelativeUnit::Years => RelativeKey::Year,
    }
}

fn plural_key(unit: RelativeUnit) -> RelativeKey {
    match unit {
        RelativeUnit::Seconds => RelativeKey::Seconds,
        RelativeUnit::Minutes => RelativeKey::Minutes,
        RelativeUnit::Hours => RelativeKey::Hours,
        RelativeUnit::Days => RelativeKey::Days,
        RelativeUnit::Months => RelativeKey::Months,
        RelativeUnit::Years => RelativeKey::Years,
    }
}

fn fill_count(template: &str, n: u64) -> String {
    template.replace("%d", &n.to_string())
}

fn fill_subject(template: &str, subject: &str) -> String {
    template.replace("%s", subject)
}

fn div_round(n: u64, d: u64) -> u64 {
    (n + d / 2) / d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(89, 60), 1);
        assert_eq!(div_round(90, 60), 2);
        assert_eq!(div_round(100, 30), 3);
        assert_eq!(div_round(800, 365), 2);
    }
}
