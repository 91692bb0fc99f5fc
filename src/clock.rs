//! Minutes-of-day clock values formatted as `HH:MM`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseClockError;

/// A wall-clock time stored as minutes since midnight.
///
/// There is no day rollover: a stop scheduled past midnight stays at
/// `25:10` rather than wrapping to `01:10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 60 + minutes)
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Clock time `minutes` later. Saturates instead of overflowing.
    pub const fn add_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ParseClockError::MissingSeparator(s.to_string()))?;

        let hours: u32 = Some(hours)
            .filter(|h| !h.is_empty() && h.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|h| h.parse().ok())
            .ok_or_else(|| ParseClockError::InvalidHour(s.to_string()))?;
        let minutes: u32 = Some(minutes)
            .filter(|m| m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|m| m.parse().ok())
            .filter(|m| *m < 60)
            .ok_or_else(|| ParseClockError::InvalidMinute(s.to_string()))?;

        hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .map(Self)
            .ok_or_else(|| ParseClockError::InvalidHour(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let time: ClockTime = "09:05".parse().unwrap();
        assert_eq!(time.minutes(), 545);
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn test_single_digit_hour_is_accepted() {
        let time: ClockTime = "9:30".parse().unwrap();
        assert_eq!(time, ClockTime::from_hm(9, 30));
        assert_eq!(time.to_string(), "09:30");
    }

    #[test]
    fn test_no_rollover_past_midnight() {
        let time = ClockTime::from_hm(23, 30).add_minutes(100);
        assert_eq!(time.to_string(), "25:10");
        assert_eq!("25:10".parse::<ClockTime>().unwrap(), time);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "0930".parse::<ClockTime>(),
            Err(ParseClockError::MissingSeparator("0930".to_string()))
        );
        assert_eq!(
            "xx:30".parse::<ClockTime>(),
            Err(ParseClockError::InvalidHour("xx:30".to_string()))
        );
        assert_eq!(
            "09:75".parse::<ClockTime>(),
            Err(ParseClockError::InvalidMinute("09:75".to_string()))
        );
        assert_eq!(
            "+9:05".parse::<ClockTime>(),
            Err(ParseClockError::InvalidHour("+9:05".to_string()))
        );
        assert_eq!(
            ":30".parse::<ClockTime>(),
            Err(ParseClockError::InvalidHour(":30".to_string()))
        );
        assert_eq!(
            "9:5".parse::<ClockTime>(),
            Err(ParseClockError::InvalidMinute("9:5".to_string()))
        );
        assert_eq!(
            "09:+5".parse::<ClockTime>(),
            Err(ParseClockError::InvalidMinute("09:+5".to_string()))
        );
        assert_eq!(
            "09:005".parse::<ClockTime>(),
            Err(ParseClockError::InvalidMinute("09:005".to_string()))
        );
    }

    #[test]
    fn test_add_minutes_saturates() {
        let time = ClockTime::from_minutes(u32::MAX - 1).add_minutes(10);
        assert_eq!(time.minutes(), u32::MAX);
    }
}
