// Time range domain model - the unit of navigation and querying
use crate::domain::error::BrowseError;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

/// Format used both for parsing inbound `_from`/`_to` values and for
/// rendering the resolved bounds back into the navigation controls.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// A half-open interval [start, end) in UTC. Immutable; every transform
/// produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, BrowseError> {
        if start >= end {
            return Err(BrowseError::MalformedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Both bounds moved by `offset`; negative offsets retreat.
    pub fn shift(&self, offset: Duration) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// The abutting window immediately following: [end, end + duration).
    pub fn next(&self) -> Self {
        self.shift(self.duration())
    }

    /// The abutting window immediately preceding: [start - duration, start).
    pub fn previous(&self) -> Self {
        self.shift(-self.duration())
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }
}

/// Parse an inbound timestamp string. Accepts a few common layouts plus
/// RFC 3339; everything is interpreted as UTC.
pub fn parse_time(input: &str) -> Result<DateTime<Utc>, BrowseError> {
    let trimmed = input.trim();
    for format in PARSE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    Err(BrowseError::TimestampParse(input.to_string()))
}

/// Render a timestamp the way the navigation controls expect it.
pub fn format_time(t: DateTime<Utc>) -> String {
    t.format(TIME_FORMAT).to_string()
}
