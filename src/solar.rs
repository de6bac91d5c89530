//! Solar date-time and the day boundary rule.
//!
//! A reckoning day may begin at local sunset rather than at midnight. The
//! sunset time itself comes from outside this crate (see [`crate::sunset`]);
//! here it is only a clock time.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::date::Date;
use crate::error::{Error, Result};
use crate::sunset::{LocationInfo, SunsetSource};

/// A solar calendar date with a clock time, second precision.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SolarDateTime {
    /// The day.
    pub date: Date,
    /// Local clock time on that day.
    pub time: NaiveTime,
}

impl SolarDateTime {
    /// Creates a date-time from solar calendar components. `month` is
    /// 1-based.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::SolarDateTime;
    ///
    /// let dt = SolarDateTime::new(2000, 1, 1, 18, 30, 0).unwrap();
    /// assert_eq!((2000, 1, 1), dt.date.solar());
    /// assert_eq!(18, dt.hour());
    /// ```
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let date =
            Date::from_solar(year, month, day).ok_or(Error::InvalidSolarDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(Error::InvalidTime {
            hour,
            minute,
            second,
        })?;
        Ok(Self { date, time })
    }
    /// The first second of `date`.
    pub fn midnight(date: Date) -> Self {
        Self {
            date,
            time: NaiveTime::default(),
        }
    }

    pub fn year(&self) -> i32 {
        self.date.solar().0
    }
    pub fn month(&self) -> i32 {
        self.date.solar().1
    }
    pub fn day(&self) -> i32 {
        self.date.solar().2
    }
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }
    pub fn second(&self) -> u32 {
        self.time.second()
    }
}

/// When a reckoning day begins.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// Days change at solar midnight.
    #[default]
    Midnight,
    /// Days change at the given local sunset time.
    Sunset(NaiveTime),
}

impl DayBoundary {
    /// Parses a sunset time in `HH:MM:SS` form.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::DayBoundary;
    ///
    /// assert!(DayBoundary::sunset("19:42:05").is_ok());
    /// assert!(DayBoundary::sunset("7:42 pm").is_err());
    /// ```
    pub fn sunset(hms: &str) -> Result<Self> {
        NaiveTime::parse_from_str(hms, "%H:%M:%S")
            .map(Self::Sunset)
            .map_err(|source| Error::InvalidSunset {
                input: hms.to_owned(),
                source,
            })
    }
    /// Asks `source` for the sunset of `date` at `location`.
    ///
    /// A source that cannot resolve the sunset yields [`DayBoundary::Midnight`].
    pub fn resolve(
        source: &dyn SunsetSource,
        date: Date,
        location: &LocationInfo,
    ) -> Result<Self> {
        match source.sunset(date, location) {
            Some(hms) => Self::sunset(&hms),
            None => {
                warn!(
                    date = %date.iso_solar(),
                    time_zone = %location.time_zone,
                    "no sunset available, days change at midnight"
                );
                Ok(Self::Midnight)
            }
        }
    }
    /// Returns the sunset time, if any.
    pub fn sunset_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Midnight => None,
            Self::Sunset(t) => Some(*t),
        }
    }
    /// `true` if a clock reading of `time` already belongs to the next
    /// reckoning day. Sunset itself counts as the next day.
    pub fn rolls_over(&self, time: NaiveTime) -> bool {
        self.sunset_time().is_some_and(|sunset| time >= sunset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn new_rejects_invalid_components() {
        assert_eq!(
            Err(Error::InvalidSolarDate {
                year: 2001,
                month: 2,
                day: 29
            }),
            SolarDateTime::new(2001, 2, 29, 0, 0, 0)
        );
        assert_eq!(
            Err(Error::InvalidTime {
                hour: 24,
                minute: 0,
                second: 0
            }),
            SolarDateTime::new(2001, 2, 28, 24, 0, 0)
        );
    }

    #[test]
    fn accessors() {
        let dt = SolarDateTime::new(1999, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(
            (1999, 12, 31, 23, 59, 58),
            (
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            )
        );
    }

    #[test]
    fn rolls_over() {
        let boundary = DayBoundary::sunset("18:00:00").unwrap();
        for (time, expected) in [
            (hms(0, 0, 0), false),
            (hms(17, 59, 59), false),
            (hms(18, 0, 0), true),
            (hms(23, 59, 59), true),
        ] {
            assert_eq!(expected, boundary.rolls_over(time), "{time}");
        }
        assert!(!DayBoundary::Midnight.rolls_over(hms(23, 59, 59)));
    }

    #[test]
    fn sunset_parse_error() {
        match DayBoundary::sunset("25:00:00") {
            Err(Error::InvalidSunset { input, .. }) => assert_eq!("25:00:00", input),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn boundary_serde_shape() {
        let json = serde_json::to_string(&DayBoundary::sunset("18:30:00").unwrap()).unwrap();
        assert_eq!(r#"{"sunset":"18:30:00"}"#, json);
        let back: DayBoundary = serde_json::from_str(r#""midnight""#).unwrap();
        assert_eq!(DayBoundary::Midnight, back);
    }
}
