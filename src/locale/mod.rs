//! Locale data types for date display.

mod builtin;

use chrono::Weekday;

/// Renders a day-of-month number as its ordinal display form.
///
/// Total over all inputs; out-of-range day numbers are rendered like any
/// other value rather than rejected.
pub type OrdinalFn = fn(u32) -> String;

/// A locale's date-display conventions.
///
/// Constructed once, never mutated. Weekday arrays are indexed by days
/// from Sunday (index 0 = Sunday); `week_start` is stored data and is not
/// derived from the weekday ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub name: &'static str,
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    pub weekdays_min: [&'static str; 7],
    pub week_start: u8,
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    pub ordinal: OrdinalFn,
    pub formats: DateFormats,
    pub relative_time: RelativeTime,
}

impl Locale {
    /// The first day of the week for this locale.
    pub fn first_weekday(&self) -> Weekday {
        match self.week_start % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

/// The localized long-date format templates.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFormats {
    /// LT, e.g. "HH:mm"
    pub time: &'static str,
    /// LTS, e.g. "HH:mm:ss"
    pub time_with_seconds: &'static str,
    /// L, e.g. "DD/MM/YYYY"
    pub short_date: &'static str,
    /// LL, e.g. "D MMMM YYYY"
    pub long_date: &'static str,
    /// LLL, e.g. "D MMMM YYYY HH:mm"
    pub long_date_time: &'static str,
    /// LLLL, e.g. "dddd, D MMMM YYYY HH:mm"
    pub full_date_time: &'static str,
}

impl DateFormats {
    /// Returns the template for the given localized format key.
    pub fn get(&self, format: LongFormat) -> &'static str {
        match format {
            LongFormat::Lt => self.time,
            LongFormat::Lts => self.time_with_seconds,
            LongFormat::L => self.short_date,
            LongFormat::Ll => self.long_date,
            LongFormat::Lll => self.long_date_time,
            LongFormat::Llll => self.full_date_time,
        }
    }
}

/// A localized long-date format key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongFormat {
    Lt,
    Lts,
    L,
    Ll,
    Lll,
    Llll,
}

impl LongFormat {
    pub const ALL: [LongFormat; 6] = [
        LongFormat::Lt,
        LongFormat::Lts,
        LongFormat::L,
        LongFormat::Ll,
        LongFormat::Lll,
        LongFormat::Llll,
    ];

    /// The key as it appears in display patterns.
    pub fn token(&self) -> &'static str {
        match self {
            LongFormat::Lt => "LT",
            LongFormat::Lts => "LTS",
            LongFormat::L => "L",
            LongFormat::Ll => "LL",
            LongFormat::Lll => "LLL",
            LongFormat::Llll => "LLLL",
        }
    }

    /// Parses an exact format key ("LT", "LLLL", ...).
    pub fn from_token(token: &str) -> Option<LongFormat> {
        match token {
            "LT" => Some(LongFormat::Lt),
            "LTS" => Some(LongFormat::Lts),
            "L" => Some(LongFormat::L),
            "LL" => Some(LongFormat::Ll),
            "LLL" => Some(LongFormat::Lll),
            "LLLL" => Some(LongFormat::Llll),
            _ => None,
        }
    }
}

/// The relative-time phrase templates.
///
/// Plural templates carry a `%d` placeholder for the count; the future and
/// past templates carry a `%s` placeholder for the phrase they wrap.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeTime {
    /// future, e.g. "in %s"
    pub future: &'static str,
    /// past, e.g. "%s ago"
    pub past: &'static str,
    /// s
    pub seconds: &'static str,
    /// m
    pub minute: &'static str,
    /// mm
    pub minutes: &'static str,
    /// h
    pub hour: &'static str,
    /// hh
    pub hours: &'static str,
    /// d
    pub day: &'static str,
    /// dd
    pub days: &'static str,
    /// M
    pub month: &'static str,
    /// MM
    pub months: &'static str,
    /// y
    pub year: &'static str,
    /// yy
    pub years: &'static str,
}

impl RelativeTime {
    /// Returns the template for the given relative-time key.
    pub fn template(&self, key: RelativeKey) -> &'static str {
        match key {
            RelativeKey::Future => self.future,
            RelativeKey::Past => self.past,
            RelativeKey::Seconds => self.seconds,
            RelativeKey::Minute => self.minute,
            RelativeKey::Minutes => self.minutes,
            RelativeKey::Hour => self.hour,
            RelativeKey::Hours => self.hours,
            RelativeKey::Day => self.day,
            RelativeKey::Days => self.days,
            RelativeKey::Month => self.month,
            RelativeKey::Months => self.months,
            RelativeKey::Year => self.year,
            RelativeKey::Years => self.years,
        }
    }
}

/// A relative-time template key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeKey {
    Future,
    Past,
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl RelativeKey {
    pub const ALL: [RelativeKey; 13] = [
        RelativeKey::Future,
        RelativeKey::Past,
        RelativeKey::Seconds,
        RelativeKey::Minute,
        RelativeKey::Minutes,
        RelativeKey::Hour,
        RelativeKey::Hours,
        RelativeKey::Day,
        RelativeKey::Days,
        RelativeKey::Month,
        RelativeKey::Months,
        RelativeKey::Year,
        RelativeKey::Years,
    ];

    /// The key as it appears in locale data ("s", "mm", "future", ...).
    pub fn token(&self) -> &'static str {
        match self {
            RelativeKey::Future => "future",
            RelativeKey::Past => "past",
            RelativeKey::Seconds => "s",
            RelativeKey::Minute => "m",
            RelativeKey::Minutes => "mm",
            RelativeKey::Hour => "h",
            RelativeKey::Hours => "hh",
            RelativeKey::Day => "d",
            RelativeKey::Days => "dd",
            RelativeKey::Month => "M",
            RelativeKey::Months => "MM",
            RelativeKey::Year => "y",
            RelativeKey::Years => "yy",
        }
    }
}
