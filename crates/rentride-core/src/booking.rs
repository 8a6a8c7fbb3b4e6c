//! Pickup/return window selected in the booking flow.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parse a local date/time as typed in the booking form
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| Error::InvalidDateTime(input.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub pickup_at: NaiveDateTime,
    pub return_at: NaiveDateTime,
}

impl BookingWindow {
    /// Build a window, rejecting a return before pickup
    pub fn new(pickup_at: NaiveDateTime, return_at: NaiveDateTime) -> Result<Self> {
        if return_at < pickup_at {
            return Err(Error::InvalidBookingWindow {
                pickup_at,
                return_at,
            });
        }
        Ok(Self {
            pickup_at,
            return_at,
        })
    }

    pub fn parse(pickup: &str, return_at: &str) -> Result<Self> {
        Self::new(parse_datetime(pickup)?, parse_datetime(return_at)?)
    }

    /// Number of started 24-hour periods; equal instants give 0
    pub fn rental_days(&self) -> u32 {
        let secs = (self.return_at - self.pickup_at).num_seconds().max(0);
        let days = (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(pickup: &str, ret: &str) -> BookingWindow {
        BookingWindow::parse(pickup, ret).unwrap()
    }

    #[test]
    fn test_whole_days() {
        assert_eq!(window("2024-03-01 10:00", "2024-03-04 10:00").rental_days(), 3);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        assert_eq!(window("2024-03-01 10:00", "2024-03-01 10:01").rental_days(), 1);
        assert_eq!(window("2024-03-01T10:00", "2024-03-03T11:30").rental_days(), 3);
    }

    #[test]
    fn test_same_instant_is_zero_days() {
        assert_eq!(window("2024-03-01 10:00", "2024-03-01 10:00").rental_days(), 0);
    }

    #[test]
    fn test_return_before_pickup_rejected() {
        let err = BookingWindow::parse("2024-03-02 10:00", "2024-03-01 10:00").unwrap_err();
        assert!(matches!(err, Error::InvalidBookingWindow { .. }));
    }

    #[test]
    fn test_bad_datetime_rejected() {
        let err = parse_datetime("tomorrow").unwrap_err();
        assert!(matches!(err, Error::InvalidDateTime(s) if s == "tomorrow"));
    }
}
