use chrono::{DateTime, Utc};

/// Seconds between the NTP epoch (1900-01-01) and the UNIX epoch.
pub const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

/// Unit letter of a typed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// `d`
    Days,
    /// `h`
    Hours,
    /// `m`
    Minutes,
    /// `s`
    Seconds,
}

impl TimeUnit {
    /// Maps `d`, `h`, `m` or `s` to a unit.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'd' => Some(TimeUnit::Days),
            'h' => Some(TimeUnit::Hours),
            'm' => Some(TimeUnit::Minutes),
            's' => Some(TimeUnit::Seconds),
            _ => None,
        }
    }

    /// The unit letter.
    pub fn letter(self) -> char {
        match self {
            TimeUnit::Days => 'd',
            TimeUnit::Hours => 'h',
            TimeUnit::Minutes => 'm',
            TimeUnit::Seconds => 's',
        }
    }

    /// Length of one unit in seconds.
    pub fn seconds(self) -> i64 {
        match self {
            TimeUnit::Days => 86_400,
            TimeUnit::Hours => 3_600,
            TimeUnit::Minutes => 60,
            TimeUnit::Seconds => 1,
        }
    }
}

/// A typed time such as `7d`, `-1h` or a bare `3600`.
///
/// A bare number has no unit and means seconds; the missing letter is kept
/// so that the token is written back exactly as it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Count of `unit`, may be negative
    pub value: i64,
    /// `None` for a bare number of seconds
    pub unit: Option<TimeUnit>,
}

impl Interval {
    /// An interval written with a unit letter.
    pub fn new(value: i64, unit: TimeUnit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    /// A bare number of seconds, written without a letter.
    pub fn seconds(value: i64) -> Self {
        Self { value, unit: None }
    }

    /// Total length in seconds, saturating on overflow.
    pub fn as_seconds(&self) -> i64 {
        self.value
            .saturating_mul(self.unit.map_or(1, TimeUnit::seconds))
    }
}

/// An `r=` line attached to the preceding `t=` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    /// Repeat period
    pub interval: Interval,
    /// Length of each active slot
    pub duration: Interval,
    /// Slot starts relative to the `t=` start time
    pub offsets: Vec<Interval>,
}

/// A `t=` line together with its `r=` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time {
    /// NTP seconds, 0 means the session is permanent
    pub start_time: u64,
    /// NTP seconds, 0 means unbounded
    pub stop_time: u64,
    /// `r=` lines following this `t=` line
    pub repeats: Vec<Repeat>,
}

impl Time {
    /// A time with no repeats.
    pub fn new(start_time: u64, stop_time: u64) -> Self {
        Self {
            start_time,
            stop_time,
            repeats: Vec::new(),
        }
    }

    /// Whether the stop time is 0.
    pub fn is_unbounded(&self) -> bool {
        self.stop_time == 0
    }

    /// Start as a UTC timestamp, see [`ntp_to_datetime`].
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        ntp_to_datetime(self.start_time)
    }

    /// Stop as a UTC timestamp, see [`ntp_to_datetime`].
    pub fn stop_datetime(&self) -> Option<DateTime<Utc>> {
        ntp_to_datetime(self.stop_time)
    }
}

/// Converts NTP seconds to a UTC timestamp. Zero and pre-1970 values have no mapping.
pub fn ntp_to_datetime(ntp: u64) -> Option<DateTime<Utc>> {
    let unix = ntp.checked_sub(NTP_UNIX_OFFSET)?;
    DateTime::from_timestamp(i64::try_from(unix).ok()?, 0)
}

/// One `<adjustment time> <offset>` pair of a `z=` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZoneAdjustment {
    /// NTP time at which the adjustment takes effect
    pub time: u64,
    /// Offset from the session's base time
    pub adjustment: Interval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_seconds() {
        assert_eq!(Interval::new(7, TimeUnit::Days).as_seconds(), 604_800);
        assert_eq!(Interval::new(-1, TimeUnit::Hours).as_seconds(), -3_600);
        assert_eq!(Interval::new(25, TimeUnit::Minutes).as_seconds(), 1_500);
        assert_eq!(Interval::seconds(90_000).as_seconds(), 90_000);
    }

    #[test]
    fn test_ntp_conversion() {
        let time = Time::new(3_724_394_400, 0);
        let start = time.start_datetime().unwrap();
        assert_eq!(start.timestamp(), 3_724_394_400 - NTP_UNIX_OFFSET as i64);
        assert!(time.is_unbounded());
        assert!(time.stop_datetime().is_none());
        assert!(ntp_to_datetime(12).is_none());
    }
}
