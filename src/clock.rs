//! Wall-clock interpretation of epoch timestamps.
//!
//! Hours are read at a fixed, explicit UTC offset rather than the host locale so the
//! same corpus always yields the same histogram. The offset is a reference frame, not
//! the poster's real timezone.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourClock {
    offset: UtcOffset,
}

impl Default for HourClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl HourClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self { offset: UtcOffset::UTC }
    }

    /// Whole-hour offset, e.g. `-5` for UTC-05:00. Out-of-range values are rejected.
    pub fn from_hours(hours: i8) -> Option<Self> {
        UtcOffset::from_hms(hours, 0, 0).ok().map(Self::new)
    }

    fn datetime(&self, ts: i64) -> Option<OffsetDateTime> {
        let dt = OffsetDateTime::from_unix_timestamp(ts).ok()?;
        Some(dt.to_offset(self.offset))
    }

    /// Hour of day (0..=23) for a Unix timestamp; `None` outside the
    /// representable date range.
    pub fn hour_of(&self, ts: i64) -> Option<u8> {
        self.datetime(ts).map(|dt| dt.hour())
    }

    /// `YYYY-MM-DD HH:MM:SS` at this clock's offset.
    pub fn format_datetime(&self, ts: i64) -> String {
        let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        self.datetime(ts)
            .and_then(|dt| dt.format(fmt).ok())
            .unwrap_or_else(|| ts.to_string())
    }
}
