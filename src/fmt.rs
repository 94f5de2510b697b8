use std::fmt::{Debug, Display, Formatter};

use chrono::{DateTime, Local, NaiveDateTime};

/// Shown in place of a value which cannot be computed.
pub const PLACEHOLDER: &str = "–";

/// Share of a total, formatted as a percentage with one decimal.
#[must_use]
#[derive(Copy, Clone, PartialEq)]
pub struct FormattedShare(pub Option<f64>);

impl Debug for FormattedShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(share) => write!(f, "{:.1}%", share * 100.0),
            None => f.write_str(PLACEHOLDER),
        }
    }
}

/// Optional value, falling back to the placeholder.
#[must_use]
pub struct FormattedOption<T>(pub Option<T>);

impl<T: Display> Display for FormattedOption<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(value) => Display::fmt(value, f),
            None => f.write_str(PLACEHOLDER),
        }
    }
}

/// Timestamp as received from the API, shown in local time.
///
/// Anything which does not parse is printed verbatim.
#[must_use]
pub struct FormattedTime<'a> {
    pub raw: &'a str,
    pub compact: bool,
}

impl FormattedTime<'_> {
    pub fn parse(raw: &str) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.with_timezone(&Local))
            .or_else(|_| {
                // Naive timestamps are in UTC.
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|timestamp| timestamp.and_utc().with_timezone(&Local))
            })
            .ok()
    }
}

impl Display for FormattedTime<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match Self::parse(self.raw) {
            Some(timestamp) if self.compact => write!(f, "{}", timestamp.format("%-d/%-m %H:%M")),
            Some(timestamp) => write!(f, "{}", timestamp.format("%H:%M")),
            None => f.write_str(self.raw),
        }
    }
}
