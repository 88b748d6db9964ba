//! Packed time and date values as they appear in NMEA fields.
//!
//! Both are kept as the plain number the receiver sent. The accessors split
//! them into components without any range check; with the `time` feature the
//! values can be turned into [`time`] types, which is where calendar
//! validation happens.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FromField;

/// UTC time of day packed as `hhmmss.sss`.
///
/// ```rust
/// use nmea0183_decoder::nmea_content::UtcTime;
///
/// let time = UtcTime(123519.25);
/// assert_eq!(time.hour(), 12);
/// assert_eq!(time.minute(), 35);
/// assert_eq!(time.second(), 19.25);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UtcTime(pub f64);

impl UtcTime {
    /// Hours, the leading two digits.
    pub fn hour(&self) -> u8 {
        (self.0 / 10_000.0).trunc() as u8
    }

    /// Minutes, the middle two digits.
    pub fn minute(&self) -> u8 {
        ((self.0 / 100.0).trunc() % 100.0) as u8
    }

    /// Seconds including the fractional part.
    pub fn second(&self) -> f64 {
        self.0 % 100.0
    }

    /// Converts to a [`time::Time`], `None` if a component is out of range.
    #[cfg(feature = "time")]
    pub fn to_time(&self) -> Option<time::Time> {
        if !self.0.is_finite() || self.0.is_sign_negative() || self.0 >= 1_000_000.0 {
            return None;
        }

        let second = self.second();
        let milliseconds = ((second.fract() * 1000.0).round() as u16).min(999);

        time::Time::from_hms_milli(self.hour(), self.minute(), second.trunc() as u8, milliseconds)
            .ok()
    }
}

impl FromField for UtcTime {
    fn from_field(token: &str) -> Option<Self> {
        f64::from_field(token).map(UtcTime)
    }
}

/// Calendar date packed as `ddmmyy`, as carried by RMC.
///
/// ```rust
/// use nmea0183_decoder::nmea_content::NmeaDate;
///
/// let date = NmeaDate(230394);
/// assert_eq!(date.day(), 23);
/// assert_eq!(date.month(), 3);
/// assert_eq!(date.year(), 94);
/// assert_eq!(date.full_year(), 1994);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NmeaDate(pub u32);

impl NmeaDate {
    /// Day of month, the leading two digits.
    pub fn day(&self) -> u32 {
        self.0 / 10_000
    }

    /// Month, the middle two digits.
    pub fn month(&self) -> u32 {
        (self.0 / 100) % 100
    }

    /// Two-digit year, the last two digits.
    pub fn year(&self) -> u32 {
        self.0 % 100
    }

    /// Four-digit year: 83–99 are read as 1983–1999, the rest as 20xx.
    pub fn full_year(&self) -> u32 {
        match self.year() {
            year @ 83..=99 => year + 1900,
            year => year + 2000,
        }
    }

    /// Converts to a [`time::Date`], `None` if it is not a real calendar date.
    #[cfg(feature = "time")]
    pub fn to_date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(u8::try_from(self.month()).ok()?).ok()?;
        let day = u8::try_from(self.day()).ok()?;

        time::Date::from_calendar_date(self.full_year() as i32, month, day).ok()
    }
}

impl FromField for NmeaDate {
    fn from_field(token: &str) -> Option<Self> {
        u32::from_field(token).map(NmeaDate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_components() {
        let time = UtcTime::from_field("235959.999").unwrap();
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 59);
        assert!((time.second() - 59.999).abs() < 1e-6);

        let time = UtcTime::from_field("000001").unwrap();
        assert_eq!((time.hour(), time.minute()), (0, 0));
        assert_eq!(time.second(), 1.0);
    }

    #[test]
    fn test_date_is_not_validated() {
        let date = NmeaDate::from_field("321399").unwrap();
        assert_eq!(date.day(), 32);
        assert_eq!(date.month(), 13);
        assert_eq!(date.full_year(), 1999);

        let date = NmeaDate::from_field("010100").unwrap();
        assert_eq!((date.day(), date.month(), date.full_year()), (1, 1, 2000));
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_time_conversions() {
        assert_eq!(
            UtcTime(123519.5).to_time(),
            time::Time::from_hms_milli(12, 35, 19, 500).ok()
        );
        assert_eq!(UtcTime(256000.0).to_time(), None);
        assert_eq!(UtcTime(-1.0).to_time(), None);

        assert_eq!(
            NmeaDate(230394).to_date(),
            time::Date::from_calendar_date(1994, time::Month::March, 23).ok()
        );
        assert_eq!(NmeaDate(321399).to_date(), None);
        assert_eq!(NmeaDate(290223).to_date(), None);
    }
}
