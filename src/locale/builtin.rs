//! Built-in locale data.

use crate::locale::{DateFormats, Locale, RelativeTime};

/// Persian ordinal display is the bare day number.
fn bare_number(n: u32) -> String {
    n.to_string()
}

impl Default for Locale {
    fn default() -> Self {
        Self::fa()
    }
}

impl Locale {
    /// Persian locale. Weekday tables are Saturday-first: index 0 (the
    /// formatter's Sunday slot) carries شنبه.
    pub fn fa() -> Self {
        Locale {
            name: "fa",
            weekdays: [
                "شنبه",
                "یک\u{200c}شنبه",
                "دوشنبه",
                "سه\u{200c}شنبه",
                "چهارشنبه",
                "پنج\u{200c}شنبه",
                "جمعه",
            ],
            weekdays_short: [
                "شنبه",
                "یک\u{200c}شنبه",
                "دوشنبه",
                "سه\u{200c}شنبه",
                "چهارشنبه",
                "پنج\u{200c}شنبه",
                "جمعه",
            ],
            weekdays_min: ["ش", "ی", "د", "س", "چ", "پ", "ج"],
            week_start: 1,
            months: [
                "فروردین",
                "اردیبهشت",
                "خرداد",
                "تیر",
                "مرداد",
                "شهریور",
                "مهر",
                "آبان",
                "آذر",
                "دی",
                "بهمن",
                "اسفند",
            ],
            months_short: [
                "فروردین",
                "اردیبهشت",
                "خرداد",
                "تیر",
                "مرداد",
                "شهریور",
                "مهر",
                "آبان",
                "آذر",
                "دی",
                "بهمن",
                "اسفند",
            ],
            ordinal: bare_number,
            formats: DateFormats {
                time: "HH:mm",
                time_with_seconds: "HH:mm:ss",
                short_date: "DD/MM/YYYY",
                long_date: "D MMMM YYYY",
                long_date_time: "D MMMM YYYY HH:mm",
                full_date_time: "dddd, D MMMM YYYY HH:mm",
            },
            relative_time: RelativeTime {
                future: "در %s",
                past: "%s پیش",
                seconds: "چند ثانیه",
                minute: "یک دقیقه",
                minutes: "%d دقیقه",
                hour: "یک ساعت",
                hours: "%d ساعت",
                day: "یک روز",
                days: "%d روز",
                month: "یک ماه",
                months: "%d ماه",
                year: "یک سال",
                years: "%d سال",
            },
        }
    }
}
