//! Imladris Reckoning, the calendar of Rivendell.
//!
//! A year (*loa*) has nine periods: six months of 54 or 72 days and three
//! holiday periods. Every twelfth year is a leap year, doubling the three
//! middle days (*enderi*) to six. 144 years make an era (*yén*), labelled
//! with Roman numerals. The week has six days.
//!
//! Each year begins on a day of March given by the [`epoch`] table. A
//! reckoning day may begin at sunset instead of midnight, see
//! [`DayBoundary`].
//!
//! # Example
//!
//! ```
//! use imladris::ReckoningDate;
//! use imladris::reckoning::Period;
//!
//! let date = ReckoningDate::from_ymd_hms(2000, 1, 1, 12, 0, 0).unwrap();
//! assert_eq!((14, 127, 279), (date.era(), date.year(), date.day_of_year()));
//! assert_eq!((Period::Hrive, 41), (date.period(), date.day_of_period()));
//! assert_eq!("Isilya, Hrívë 41, XIV 127", date.to_string());
//!
//! let back = ReckoningDate::from_reckoning("XIV", 127, Period::Hrive, 41).unwrap();
//! assert_eq!("2000-01-01", back.date().iso_solar());
//! ```

use std::fmt::{self as stdfmt, Display};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::Date;
use crate::error::{Error, Result};
use crate::solar::{DayBoundary, SolarDateTime};

pub mod arith;
pub mod epoch;
pub mod fmt;
pub mod roman;

/// Period lengths in a common year.
pub const LENGTHS: [u32; 9] = [1, 54, 72, 54, 3, 54, 72, 54, 1];
/// Period lengths in a leap year.
pub const LENGTHS_LEAP: [u32; 9] = [1, 54, 72, 54, 6, 54, 72, 54, 1];

/// A period of the year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Period {
    Yestare = 1,
    Tuile,
    Laire,
    Yavie,
    Enderi,
    Quelle,
    Hrive,
    Coire,
    Mettare,
}

impl Period {
    pub const ALL: [Period; 9] = [
        Period::Yestare,
        Period::Tuile,
        Period::Laire,
        Period::Yavie,
        Period::Enderi,
        Period::Quelle,
        Period::Hrive,
        Period::Coire,
        Period::Mettare,
    ];

    /// Position in the year, `1..=9`.
    pub fn number(self) -> u32 {
        self as u32
    }
    pub fn from_number(num: u32) -> Option<Self> {
        Self::ALL.get((num as usize).checked_sub(1)?).copied()
    }
    pub fn name(self) -> &'static str {
        fmt::period(self)
    }
    /// Days in this period.
    pub fn length(self, leap: bool) -> u32 {
        let lengths = if leap { &LENGTHS_LEAP } else { &LENGTHS };
        lengths[self.number() as usize - 1]
    }
    /// `true` for the six months, `false` for Yestarë, Enderi and Mettarë.
    pub fn is_month(self) -> bool {
        self.month().is_some()
    }
    /// Month number `1..=6` for months.
    pub fn month(self) -> Option<u32> {
        match self.number() {
            n @ 2..=4 => Some(n - 1),
            n @ 6..=8 => Some(n - 2),
            _ => None,
        }
    }
    /// Days of the year before this period starts.
    pub fn days_before(self, leap: bool) -> u32 {
        Self::ALL[..self.number() as usize - 1]
            .iter()
            .map(|p| p.length(leap))
            .sum()
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        f.write_str(self.name())
    }
}

/// A day of the six-day week.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Weekday {
    Elenya = 1,
    Anarya,
    Isilya,
    Alduya,
    Menelya,
    Valanya,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Elenya,
        Weekday::Anarya,
        Weekday::Isilya,
        Weekday::Alduya,
        Weekday::Menelya,
        Weekday::Valanya,
    ];

    /// Day of week, `1..=6` from Elenya.
    pub fn number(self) -> u32 {
        self as u32
    }
    /// Day of week, `0..6` from Elenya.
    pub fn index(self) -> usize {
        self as usize - 1
    }
    pub fn from_number(num: u32) -> Option<Self> {
        Self::ALL.get((num as usize).checked_sub(1)?).copied()
    }
    /// Weekday `index` days after Elenya, modulo 6.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }
    pub fn name(self) -> &'static str {
        fmt::weekday(self)
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        f.write_str(self.name())
    }
}

/// Fields readable with [`ReckoningDate::get`] and adjustable with
/// [`ReckoningDate::with_field`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Field {
    Era,
    Year,
    DayOfYear,
    Period,
    DayOfPeriod,
    DayOfWeek,
    WeekOfPeriod,
}

/// Days in a year.
pub fn year_length(leap: bool) -> u32 {
    if leap { 368 } else { 365 }
}

/// Splits a day of the year into period and day of period.
fn period_and_day(day_of_year: u32, leap: bool) -> (Period, u32) {
    let mut days = day_of_year;
    for p in Period::ALL {
        let length = p.length(leap);
        if days <= length {
            return (p, days);
        }
        days -= length;
    }
    unreachable!("day {day_of_year} is past the end of the year")
}

/// A point in Imladris Reckoning, with every field computed up front.
///
/// Equality, ordering and hashing only consider era, year and day of year.
#[derive(Debug, Clone)]
pub struct ReckoningDate {
    era: i32,
    era_label: String,
    year: u32,
    day_of_year: u32,
    period: Period,
    day_of_period: u32,
    week_of_period: u32,
    week_in_period: u32,
    day_of_week: Weekday,
    year_start_weekday: Weekday,
    new_year_march_day: u32,
    solar: SolarDateTime,
    boundary: DayBoundary,
}

impl ReckoningDate {
    /// Converts a solar date-time.
    ///
    /// With a sunset boundary, a time at or after sunset belongs to the next
    /// day; the stored solar value is then that next day at midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::{DayBoundary, ReckoningDate, SolarDateTime};
    ///
    /// let evening = SolarDateTime::new(2000, 1, 1, 18, 0, 0).unwrap();
    /// let sunset = DayBoundary::sunset("17:30:00").unwrap();
    /// let date = ReckoningDate::from_solar(evening, sunset).unwrap();
    /// assert_eq!(280, date.day_of_year());
    /// assert_eq!("2000-01-02", date.date().iso_solar());
    /// ```
    pub fn from_solar(dt: SolarDateTime, boundary: DayBoundary) -> Result<Self> {
        let SolarDateTime { mut date, mut time } = dt;
        if boundary.rolls_over(time) {
            debug!(date = %date.iso_solar(), %time, "after sunset, moving to next day");
            date = date.checked_add(1).ok_or(Error::EraOutOfRange {
                era: epoch::era_of(date.solar().0),
            })?;
            time = NaiveTime::default();
        }
        let mut solar_year = date.solar().0;
        let mut start = epoch::new_year_date(solar_year)?;
        if date < start {
            debug!(
                date = %date.iso_solar(),
                yestare = %start.iso_solar(),
                "before Yestarë, counting from the previous year"
            );
            solar_year -= 1;
            start = epoch::new_year_date(solar_year)?;
        }
        let day_of_year = (date - start + 1) as u32;
        let era = epoch::era_of(solar_year);
        let year = epoch::year_of(solar_year) as u32;
        let res = Self::compute(era, year, day_of_year, time, boundary)?;
        debug!(solar = %date.iso_solar(), reckoning = %res, "converted solar date");
        Ok(res)
    }

    /// Converts a solar date and time with days changing at midnight.
    /// `month` is 1-based.
    pub fn from_ymd_hms(
        year: i32,
        month: i32,
        day: i32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let dt = SolarDateTime::new(year, month, day, hour, minute, second)?;
        Self::from_solar(dt, DayBoundary::Midnight)
    }

    /// Builds a date from era label, year, period and day of period, at
    /// midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::ReckoningDate;
    /// use imladris::reckoning::Period;
    ///
    /// let date = ReckoningDate::from_reckoning("I", 144, Period::Yestare, 1).unwrap();
    /// assert_eq!("0144-03-26", date.date().iso_solar());
    /// ```
    pub fn from_reckoning(era: &str, year: u32, period: Period, day: u32) -> Result<Self> {
        Self::from_reckoning_at(era, year, period, day, NaiveTime::default(), DayBoundary::Midnight)
    }

    /// Builds a date from era label, year, period and day of period, at clock
    /// time `time`.
    ///
    /// With a sunset boundary, a time at or after sunset moves the date one
    /// day forward, carrying into the next year after Mettarë. The stored
    /// solar value is the solar day of the resulting date at midnight.
    pub fn from_reckoning_at(
        era: &str,
        year: u32,
        period: Period,
        day: u32,
        time: NaiveTime,
        boundary: DayBoundary,
    ) -> Result<Self> {
        let era = roman::parse_era_label(era);
        check_era_year(era, year)?;
        let leap = epoch::is_leap(year);
        let length = period.length(leap);
        if !(1..=length).contains(&day) {
            return Err(Error::DayOutOfRange {
                day,
                length,
                period: period.name(),
            });
        }
        let (mut era, mut year) = (era, year);
        let mut day_of_year = period.days_before(leap) + day;
        let mut time = time;
        if boundary.rolls_over(time) {
            debug!(era, year, day_of_year, %time, "after sunset, moving to next day");
            day_of_year += 1;
            time = NaiveTime::default();
            if day_of_year > year_length(leap) {
                (era, year) = next_year(era, year);
                day_of_year = 1;
            }
        }
        Self::compute(era, year, day_of_year, time, boundary)
    }

    /// Builds a date from era, year and day of year, at midnight.
    pub fn from_day_of_year(era: i32, year: u32, day_of_year: u32) -> Result<Self> {
        Self::compute(era, year, day_of_year, NaiveTime::default(), DayBoundary::Midnight)
    }

    /// Derives every field from era, year and day of year.
    pub(crate) fn compute(
        era: i32,
        year: u32,
        day_of_year: u32,
        time: NaiveTime,
        boundary: DayBoundary,
    ) -> Result<Self> {
        check_era_year(era, year)?;
        let leap = epoch::is_leap(year);
        let length = year_length(leap);
        if !(1..=length).contains(&day_of_year) {
            return Err(Error::DayOutOfRange {
                day: day_of_year,
                length,
                period: "year",
            });
        }
        let start = epoch::new_year_date(epoch::solar_year(era, year))?;
        let (period, day_of_period) = period_and_day(day_of_year, leap);

        let year_start_weekday = epoch::year_start_weekday(era, year);
        let first = year_start_weekday.index();
        let day_of_week = Weekday::from_index(first + day_of_year as usize - 1);
        let period_start = Weekday::from_index(first + (day_of_year - day_of_period) as usize);
        let week_of_period =
            (day_of_year + (6 - day_of_week.number()) + (year_start_weekday.number() - 1)) / 6;
        let week_in_period = (day_of_period - 1 + period_start.index() as u32) / 6 + 1;

        Ok(Self {
            era,
            era_label: roman::era_label(era),
            year,
            day_of_year,
            period,
            day_of_period,
            week_of_period,
            week_in_period,
            day_of_week,
            year_start_weekday,
            new_year_march_day: start.solar().2 as u32,
            solar: SolarDateTime {
                date: start + (day_of_year as i32 - 1),
                time,
            },
            boundary,
        })
    }

    pub fn era(&self) -> i32 {
        self.era
    }
    /// Era in Roman numerals.
    pub fn era_label(&self) -> &str {
        &self.era_label
    }
    /// Year within the era, `1..=144`.
    pub fn year(&self) -> u32 {
        self.year
    }
    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }
    pub fn period(&self) -> Period {
        self.period
    }
    pub fn period_name(&self) -> &'static str {
        self.period.name()
    }
    pub fn is_leap_year(&self) -> bool {
        epoch::is_leap(self.year)
    }
    pub fn is_in_named_month(&self) -> bool {
        self.period.is_month()
    }
    /// Month `1..=6`, or `None` on Yestarë, Enderi and Mettarë.
    pub fn month_index(&self) -> Option<u32> {
        self.period.month()
    }
    pub fn day_of_period(&self) -> u32 {
        self.day_of_period
    }
    /// Week number read through [`Field::WeekOfPeriod`].
    ///
    /// Weeks start on Elenya and are counted from Yestarë, so the number
    /// runs through the whole year rather than restarting each period.
    pub fn week_of_period(&self) -> u32 {
        self.week_of_period
    }
    /// Week within the current period, weeks starting on Elenya.
    pub fn week_in_period(&self) -> u32 {
        self.week_in_period
    }
    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }
    pub fn day_of_week_name(&self) -> &'static str {
        self.day_of_week.name()
    }
    /// Weekday of Yestarë of this year.
    pub fn year_start_weekday(&self) -> Weekday {
        self.year_start_weekday
    }
    /// Day of March on which this year began.
    pub fn new_year_march_day(&self) -> u32 {
        self.new_year_march_day
    }
    /// The solar day this date falls on.
    pub fn date(&self) -> Date {
        self.solar.date
    }
    pub fn solar(&self) -> SolarDateTime {
        self.solar
    }
    pub fn day_boundary(&self) -> DayBoundary {
        self.boundary
    }
    pub fn sunset(&self) -> Option<NaiveTime> {
        self.boundary.sunset_time()
    }
    pub fn is_sunset_defined(&self) -> bool {
        self.sunset().is_some()
    }
    /// Length of `period` in this year.
    pub fn length_of_period(&self, period: Period) -> u32 {
        period.length(self.is_leap_year())
    }
    pub fn length_of_year(&self) -> u32 {
        year_length(self.is_leap_year())
    }

    /// Reads a field as a number.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::ReckoningDate;
    /// use imladris::reckoning::Field;
    ///
    /// let date = ReckoningDate::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap();
    /// assert_eq!(14, date.get(Field::Era));
    /// assert_eq!(7, date.get(Field::Period));
    /// ```
    pub fn get(&self, field: Field) -> i32 {
        match field {
            Field::Era => self.era,
            Field::Year => self.year as i32,
            Field::DayOfYear => self.day_of_year as i32,
            Field::Period => self.period.number() as i32,
            Field::DayOfPeriod => self.day_of_period as i32,
            Field::DayOfWeek => self.day_of_week.number() as i32,
            Field::WeekOfPeriod => self.week_of_period as i32,
        }
    }
}

impl Display for ReckoningDate {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.day_of_week,
            fmt::period_day(self.period, self.day_of_period),
            self.era_label,
            self.year
        )
    }
}

fn check_era_year(era: i32, year: u32) -> Result<()> {
    if !epoch::eras().contains(&era) {
        return Err(Error::EraOutOfRange { era });
    }
    if !(1..=epoch::YEARS_PER_ERA as u32).contains(&year) {
        return Err(Error::YearOutOfRange { year: year as i32 });
    }
    Ok(())
}

fn next_year(era: i32, year: u32) -> (i32, u32) {
    if year == epoch::YEARS_PER_ERA as u32 {
        (era + 1, 1)
    } else {
        (era, year + 1)
    }
}
