//! Locale-aware rendering of display patterns.

pub mod relative;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::cache;
use crate::locale::Locale;
use crate::pattern::expand_localized;
use crate::pattern::tokens::Token;

/// Render a datetime against a display pattern using the given locale.
///
/// Localized keys (LT, LTS, L, LL, LLL, LLLL) are expanded from the
/// locale's templates before tokenization. Rendering is total: anything the
/// lexer does not recognize passes through as literal text.
pub fn format(datetime: &NaiveDateTime, pattern: &str, locale: &Locale) -> String {
    let expanded = expand_localized(pattern, &locale.formats);
    let tokens = cache::get_or_tokenize(&expanded);

    let mut result = String::new();
    for token in &tokens {
        render_token(token, datetime, locale, &mut result);
    }
    result
}

fn render_token(token: &Token, dt: &NaiveDateTime, locale: &Locale, out: &mut String) {
    // Name tables are indexed by days from Sunday, the formatter's day 0.
    let weekday = dt.weekday().num_days_from_sunday() as usize;
    let month0 = dt.month0() as usize;

    match token {
        Token::Literal(text) => out.push_str(text),

        Token::Year2 => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
        Token::Year4 => out.push_str(&format!("{:04}", dt.year())),

        Token::Month => out.push_str(&dt.month().to_string()),
        Token::Month2 => out.push_str(&format!("{:02}", dt.month())),
        Token::MonthAbbr => out.push_str(locale.months_short[month0]),
        Token::MonthFull => out.push_str(locale.months[month0]),

        Token::Day => out.push_str(&dt.day().to_string()),
        Token::Day2 => out.push_str(&format!("{:02}", dt.day())),
        Token::DayOrdinal => out.push_str(&(locale.ordinal)(dt.day())),

        Token::WeekdayNum => out.push_str(&weekday.to_string()),
        Token::WeekdayMin => out.push_str(locale.weekdays_min[weekday]),
        Token::WeekdayShort => out.push_str(locale.weekdays_short[weekday]),
        Token::WeekdayFull => out.push_str(locale.weekdays[weekday]),

        Token::Hour24 => out.push_str(&dt.hour().to_string()),
        Token::Hour24Two => out.push_str(&format!("{:02}", dt.hour())),
        Token::Hour12 => out.push_str(&to_12_hour(dt.hour()).to_string()),
        Token::Hour12Two => out.push_str(&format!("{:02}", to_12_hour(dt.hour()))),

        Token::Minute => out.push_str(&dt.minute().to_string()),
        Token::Minute2 => out.push_str(&format!("{:02}", dt.minute())),

        Token::Second => out.push_str(&dt.second().to_string()),
        Token::Second2 => out.push_str(&format!("{:02}", dt.second())),

        // The locale table carries no meridiem strings; the default Latin
        // markers apply.
        Token::MeridiemUpper => out.push_str(if dt.hour() >= 12 { "PM" } else { "AM" }),
        Token::MeridiemLower => out.push_str(if dt.hour() >= 12 { "pm" } else { "am" }),

        Token::Eof => {}
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}
