//! Field arithmetic and ordering.
//!
//! Days carry through the leap-aware year lengths (365 or 368 days), years
//! carry into eras every 144 years. Results keep the time of day and day
//! boundary of the value they were derived from.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::epoch::{self, DAYS_PER_ERA, YEARS_PER_ERA};
use super::{year_length, Field, Period, ReckoningDate};
use crate::error::{Error, Result};

impl ReckoningDate {
    /// Returns the date `amount` units of `field` later (or earlier, for a
    /// negative amount).
    ///
    /// * `DayOfYear`, `DayOfPeriod` and `DayOfWeek` add days.
    /// * `WeekOfPeriod` adds six days per week.
    /// * `Year` adds years; the day of year is clamped to the target year.
    /// * `Era` adds eras, keeping year and day of year.
    /// * `Period` adds periods, nine to a year; the day of period is clamped
    ///   to the target period.
    ///
    /// # Example
    ///
    /// ```
    /// use imladris::ReckoningDate;
    /// use imladris::reckoning::Field;
    ///
    /// let date = ReckoningDate::from_day_of_year(1, 1, 1).unwrap();
    /// let later = date.with_field(Field::DayOfYear, 150_000).unwrap();
    /// assert_eq!((3, 123, 249), (later.era(), later.year(), later.day_of_year()));
    /// assert_eq!("0411-12-02", later.date().iso_solar());
    /// ```
    pub fn with_field(&self, field: Field, amount: i32) -> Result<Self> {
        let amount = i64::from(amount);
        let (era, year, day_of_year) = match field {
            Field::DayOfYear | Field::DayOfPeriod | Field::DayOfWeek => self.add_days(amount),
            Field::WeekOfPeriod => self.add_days(6 * amount),
            Field::Year => {
                let (era, year) = add_years(i64::from(self.era), self.year, amount);
                let length = year_length(epoch::is_leap(year));
                (era, year, self.day_of_year.min(length))
            }
            Field::Era => (i64::from(self.era) + amount, self.year, self.day_of_year),
            Field::Period => {
                let index = i64::from(self.period.number() - 1) + amount;
                let (era, year) =
                    add_years(i64::from(self.era), self.year, index.div_euclid(9));
                let period = Period::ALL[index.rem_euclid(9) as usize];
                let leap = epoch::is_leap(year);
                let day = self.day_of_period.min(period.length(leap));
                (era, year, period.days_before(leap) + day)
            }
        };
        let era = i32::try_from(era).unwrap_or(if era < 0 { i32::MIN } else { i32::MAX });
        debug!(?field, amount, era, year, day_of_year, "field arithmetic");
        if !epoch::eras().contains(&era) {
            return Err(Error::EraOutOfRange { era });
        }
        Self::compute(era, year, day_of_year, self.solar.time, self.boundary)
    }

    /// Adds days, stepping whole eras at once and walking the remaining
    /// years by their leap-aware lengths.
    fn add_days(&self, amount: i64) -> (i64, u32, u32) {
        let year = i64::from(self.year) - 1;
        let day = year * 365 + 3 * (year / i64::from(epoch::LEAP_CYCLE))
            + i64::from(self.day_of_year)
            - 1
            + amount;
        let per_era = i64::from(DAYS_PER_ERA);
        let era = i64::from(self.era) + day.div_euclid(per_era);
        let mut day = day.rem_euclid(per_era) as u32;
        let mut year = 1;
        loop {
            let length = year_length(epoch::is_leap(year));
            if day < length {
                break;
            }
            day -= length;
            year += 1;
        }
        (era, year, day + 1)
    }

    /// `true` if `self` comes strictly before `other`.
    pub fn before(&self, other: &Self) -> bool {
        self < other
    }

    /// `true` if `self` comes strictly after `other`.
    pub fn after(&self, other: &Self) -> bool {
        self > other
    }

    /// `true` if both fall on the same reckoning day.
    pub fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn key(&self) -> (i32, u32, u32) {
        (self.era, self.year, self.day_of_year)
    }
}

fn add_years(era: i64, year: u32, amount: i64) -> (i64, u32) {
    let years = i64::from(YEARS_PER_ERA);
    let index = i64::from(year) - 1 + amount;
    (era + index.div_euclid(years), index.rem_euclid(years) as u32 + 1)
}

impl PartialEq for ReckoningDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ReckoningDate {}

impl Hash for ReckoningDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for ReckoningDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReckoningDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
