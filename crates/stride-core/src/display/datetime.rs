//! Date and duration display utilities.
//!
//! Wrapper types that format calendar dates and day counts consistently
//! across plan output.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a calendar `Date` that formats it with its weekday.
///
/// # Format
///
/// The display format follows the pattern: `Www, YYYY-MM-DD`
/// (for example `Fri, 2024-03-01`).
pub struct CalendarDate<'a>(pub &'a Date);

impl<'a> fmt::Display for CalendarDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %Y-%m-%d"))
    }
}

/// A day count that pluralizes itself: `1 day`, `3 days`.
pub struct DayCount(pub u32);

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.0 == 1 { "day" } else { "days" };
        write!(f, "{} {unit}", self.0)
    }
}
