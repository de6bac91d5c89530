//! Calendar-independant date and the solar calendar.
//!
//! The solar calendar used throughout this crate is the historical civil
//! calendar: Julian up to October 4, 1582, Gregorian from October 15, 1582.
//! The ten days in between do not exist.

use std::ops::{Add, Sub};

/// Julian day number of October 15, 1582, the first Gregorian day.
pub const GREGORIAN_REFORM_JDN: i32 = 2299161;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` with a solar calendar date.
    ///
    /// Dates before October 15, 1582 are read in the Julian calendar, later
    /// ones in the Gregorian calendar. `year` is an astronomical year number,
    /// i.e. 1 BC is `0`.
    ///
    /// Returns `None` if the month or day is out of range, if the date falls
    /// in the days dropped by the Gregorian reform, or if the date is outside
    /// the supported range (a Julian day number that fits in `i32`).
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::Date;
    ///
    /// let date = Date::from_solar(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    ///
    /// // The day before the Gregorian reform, in the Julian calendar.
    /// let date = Date::from_solar(1582, 10, 4).unwrap();
    /// assert_eq!(2299160, date.jdn());
    ///
    /// assert_eq!(None, Date::from_solar(1582, 10, 10));
    /// ```
    pub fn from_solar(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        let ymd = (year, month, day);
        let jdn = if ymd >= (1582, 10, 15) {
            gregorian_to_jdn(year.into(), month.into(), day.into())
        } else if ymd >= (1582, 10, 5) {
            return None;
        } else {
            julian_to_jdn(year.into(), month.into(), day.into())
        };
        i32::try_from(jdn)
            .ok()
            .filter(|&jdn| jdn >= 0)
            .map(Self::from_jdn)
    }
    /// Represents the date in the solar calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::Date;
    ///
    /// assert_eq!((2000, 1, 1), Date::from_jdn(2451545).solar());
    /// assert_eq!((1582, 10, 4), Date::from_jdn(2299160).solar());
    /// assert_eq!((1582, 10, 15), Date::from_jdn(2299161).solar());
    /// ```
    pub fn solar(&self) -> (i32, i32, i32) {
        let (year, month, day) = if self.jdn >= GREGORIAN_REFORM_JDN {
            jdn_to_gregorian(self.jdn.into())
        } else {
            jdn_to_julian(self.jdn.into())
        };
        // An `i32` day number stays within a few million years.
        (year as i32, month as i32, day as i32)
    }
    /// Returns the date `days` later, or `None` if the day number overflows.
    pub fn checked_add(self, days: i32) -> Option<Self> {
        self.jdn.checked_add(days).map(Self::from_jdn)
    }
    /// Formats the date in ISO 8601 format, in the solar calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::Date;
    ///
    /// let date = Date::from_solar(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_solar());
    /// ```
    pub fn iso_solar(&self) -> String {
        let (y, m, d) = self.solar();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
}

/// # Panics
///
/// Panics if the day number overflows. Use [`Date::checked_add`] to avoid
/// this.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        self.checked_add(rhs)
            .unwrap_or_else(|| panic!("day number overflow: {} + {rhs}", self.jdn))
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in the solar calendar: Julian rule
    /// up to 1582, Gregorian rule afterwards.
    pub fn from_solar(year: i32) -> Self {
        let leap = if year <= 1582 {
            year.rem_euclid(4) == 0
        } else {
            year % 4 == 0 && year % 100 != 0 || year % 400 == 0
        };
        if leap { Self::Leap } else { Self::Common }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in `month` of `year` in the solar calendar, or 0 if `month`
/// is not in `1..=12`.
///
/// October 1582 still reports 31 days; the reform gap is handled by
/// [`Date::from_solar`].
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_solar(year).is_leap() as i32,
        _ => 0,
    }
}

fn gregorian_to_jdn(y: i64, m: i64, d: i64) -> i64 {
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

fn julian_to_jdn(y: i64, m: i64, d: i64) -> i64 {
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083
}

fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year, month, day)
}

fn jdn_to_julian(jdn: i64) -> (i64, i64, i64) {
    let c = jdn + 32082;
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = d - 4800 + m / 10;
    (year, month, day)
}
