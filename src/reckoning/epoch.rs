//! Epoch table and era/year arithmetic.
//!
//! Each era lists the day of March on which Yestarë falls, in ranges of
//! years. Irregular eras carry more than one range: era XI absorbs the
//! Gregorian reform, the later ones follow skipped Gregorian leap days, and
//! the last years of era XVI are uncertain.

use tracing::trace;

use super::Weekday;
use crate::date::Date;
use crate::error::{Error, Result};

/// Years in an era.
pub const YEARS_PER_ERA: i32 = 144;
/// Leap years come every this many years.
pub const LEAP_CYCLE: u32 = 12;
/// Days in an era: 144 years of 365 days plus three days per leap year.
pub const DAYS_PER_ERA: i32 = YEARS_PER_ERA * 365 + 3 * (YEARS_PER_ERA / LEAP_CYCLE as i32);

/// Weekday of Yestarë of year 1, era I.
pub const EPOCH_WEEKDAY: Weekday = Weekday::Elenya;

/// Years `first..=last` of an era begin on March `march_day`, before the
/// leap cycle correction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Range {
    pub first: u32,
    pub last: u32,
    pub march_day: u32,
}

const fn r(first: u32, last: u32, march_day: u32) -> Range {
    Range {
        first,
        last,
        march_day,
    }
}

/// Epoch table, indexed by era minus one.
pub static NEW_YEAR: &[&[Range]] = &[
    &[r(1, 144, 26)],                              // I
    &[r(1, 144, 26)],                              // II
    &[r(1, 144, 26)],                              // III
    &[r(1, 144, 23)],                              // IV
    &[r(1, 144, 23)],                              // V
    &[r(1, 144, 23)],                              // VI
    &[r(1, 144, 20)],                              // VII
    &[r(1, 144, 20)],                              // VIII
    &[r(1, 144, 20)],                              // IX
    &[r(1, 144, 17)],                              // X
    &[r(1, 142, 17), r(143, 144, 27)],             // XI
    &[r(1, 115, 27), r(116, 144, 28)],             // XII
    &[r(1, 71, 25), r(72, 144, 26)],               // XIII
    &[r(1, 27, 26), r(28, 144, 27)],               // XIV
    &[r(1, 83, 27), r(84, 144, 28)],               // XV
    &[r(1, 39, 25), r(40, 139, 26), r(140, 144, 26)], // XVI, 140..=144 uncertain
];

/// Eras covered by the epoch table.
pub fn eras() -> std::ops::RangeInclusive<i32> {
    1..=NEW_YEAR.len() as i32
}

fn sign(solar_year: i32) -> i32 {
    if solar_year >= 0 { 1 } else { -1 }
}

/// Era containing `solar_year`. There is no era 0: year 0 and later fall in
/// era I or after, earlier years in negative eras.
///
/// # Example
///
/// ```
/// use imladris::reckoning::epoch::era_of;
///
/// assert_eq!(1, era_of(144));
/// assert_eq!(2, era_of(145));
/// assert_eq!(15, era_of(2024));
/// ```
pub fn era_of(solar_year: i32) -> i32 {
    (solar_year - 1) / YEARS_PER_ERA + sign(solar_year)
}

/// Year within its era for `solar_year`, `1..=144` for positive years.
///
/// Solar year 0 yields 0, which no era contains.
pub fn year_of(solar_year: i32) -> i32 {
    if solar_year == 0 {
        return 0;
    }
    (solar_year - 1) % YEARS_PER_ERA + sign(solar_year)
}

/// Solar year in which year `year` of `era` begins.
pub fn solar_year(era: i32, year: u32) -> i32 {
    (era - 1) * YEARS_PER_ERA + year as i32
}

/// `true` if `year` of any era is a leap year.
pub fn is_leap(year: u32) -> bool {
    year % LEAP_CYCLE == 0
}

/// Shift of Yestarë within the leap cycle, relative to the range's nominal
/// day of March.
pub fn leap_correction(year: u32) -> u32 {
    match year % LEAP_CYCLE {
        0 => 0,
        1..=3 => 3,
        4..=7 => 2,
        _ => 1,
    }
}

/// Day of March on which year `year` of `era` begins.
///
/// Returns `None` if the era is not in the table or `year` is not in
/// `1..=144`.
///
/// # Example
///
/// ```
/// use imladris::reckoning::epoch::new_year_march_day;
///
/// assert_eq!(Some(26), new_year_march_day(1, 144));
/// assert_eq!(Some(18), new_year_march_day(11, 142));
/// assert_eq!(Some(28), new_year_march_day(11, 143));
/// assert_eq!(None, new_year_march_day(17, 1));
/// ```
///
/// # Panics
///
/// Panics if the table has a gap inside a covered era.
pub fn new_year_march_day(era: i32, year: u32) -> Option<u32> {
    let ranges = usize::try_from(era - 1).ok().and_then(|i| NEW_YEAR.get(i))?;
    if !(1..=YEARS_PER_ERA as u32).contains(&year) {
        return None;
    }
    let range = ranges
        .iter()
        .find(|range| (range.first..=range.last).contains(&year))
        .unwrap_or_else(|| panic!("epoch table has no range for era {era}, year {year}"));
    trace!(era, year, march_day = range.march_day, "epoch table lookup");
    Some(range.march_day + leap_correction(year))
}

/// Solar date of Yestarë for the year beginning in `solar_year`.
pub fn new_year_date(solar_year: i32) -> Result<Date> {
    if solar_year < 1 {
        return Err(Error::BeforeEpoch { year: solar_year });
    }
    let era = era_of(solar_year);
    let march_day = new_year_march_day(era, year_of(solar_year) as u32)
        .ok_or(Error::EraOutOfRange { era })?;
    Date::from_solar(solar_year, 3, march_day as i32).ok_or(Error::InvalidSolarDate {
        year: solar_year,
        month: 3,
        day: march_day as i32,
    })
}

/// Weekday of Yestarë of year `year` of `era`.
///
/// Every common year moves the weekday back by one (365 = 6 * 61 - 1),
/// every leap year forward by two (368 = 6 * 61 + 2).
pub fn year_start_weekday(era: i32, year: u32) -> Weekday {
    let elapsed = i64::from(solar_year(era, year)) - 1;
    let leap = elapsed.div_euclid(i64::from(LEAP_CYCLE));
    let common = elapsed - leap;
    let offset = 2 * leap - common;
    Weekday::from_index((EPOCH_WEEKDAY.index() as i64 + offset).rem_euclid(6) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_year_to_era_and_year() {
        for (solar, era, year) in [
            (1, 1, 1),
            (144, 1, 144),
            (145, 2, 1),
            (1582, 11, 142),
            (1583, 11, 143),
            (2016, 14, 144),
            (2024, 15, 8),
            (2304, 16, 144),
        ] {
            assert_eq!((era, year), (era_of(solar), year_of(solar)), "{solar}");
            assert_eq!(solar, super::solar_year(era, year as u32));
        }
    }

    #[test]
    fn no_era_zero() {
        for solar in -400..=400 {
            assert_ne!(0, era_of(solar), "{solar}");
        }
        assert_eq!((1, 0), (era_of(0), year_of(0)));
        assert_eq!(-1, era_of(-1));
    }

    #[test]
    fn table_covers_every_year() {
        for era in eras() {
            for year in 1..=144 {
                assert!(new_year_march_day(era, year).is_some(), "{era} {year}");
            }
        }
        assert_eq!(None, new_year_march_day(0, 1));
        assert_eq!(None, new_year_march_day(17, 1));
        assert_eq!(None, new_year_march_day(1, 0));
        assert_eq!(None, new_year_march_day(1, 145));
    }

    #[test]
    fn corrections_follow_leap_cycle() {
        let corrections: Vec<_> = (1..=12).map(leap_correction).collect();
        assert_eq!(vec![3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 0], corrections);
        assert_eq!(Some(26), new_year_march_day(1, 144));
        assert_eq!(Some(29), new_year_march_day(1, 1));
        assert_eq!(Some(27), new_year_march_day(16, 140));
    }

    #[test]
    fn sub_range_switch() {
        assert_eq!(Some(18), new_year_march_day(11, 142));
        assert_eq!(Some(28), new_year_march_day(11, 143));
        // 1700 skips its leap day; the range switch holds Yestarë in place.
        assert_eq!(Some(29), new_year_march_day(12, 115));
        assert_eq!(Some(29), new_year_march_day(12, 116));
        // Same for 1900.
        assert_eq!(Some(29), new_year_march_day(14, 27));
        assert_eq!(Some(29), new_year_march_day(14, 28));
    }

    #[test]
    fn new_year_dates() {
        for (solar, iso) in [
            (1, "0001-03-29"),
            (144, "0144-03-26"),
            (1582, "1582-03-18"),
            (1583, "1583-03-28"),
            (2024, "2024-03-28"),
        ] {
            assert_eq!(iso, new_year_date(solar).unwrap().iso_solar());
        }
        assert_eq!(Err(Error::BeforeEpoch { year: 0 }), new_year_date(0));
        assert_eq!(Err(Error::EraOutOfRange { era: 17 }), new_year_date(2305));
    }

    #[test]
    fn era_length() {
        assert_eq!(52596, DAYS_PER_ERA);
    }

    #[test]
    fn weekday_of_year_start() {
        use Weekday::*;
        for ((era, year), weekday) in [
            ((1, 1), Elenya),
            ((1, 2), Valanya),
            ((1, 13), Alduya),
            ((11, 142), Elenya),
            ((11, 143), Valanya),
            ((14, 127), Elenya),
            ((15, 8), Valanya),
        ] {
            assert_eq!(weekday, year_start_weekday(era, year), "{era} {year}");
        }
    }

    /// The table and the weekday rule describe the same drift: wherever the
    /// table gives a 365/368-day year, consecutive Yestarë weekdays differ by
    /// the year length modulo 6.
    #[test]
    fn weekday_agrees_with_table() {
        let irregular = [432, 864, 1296, 1728, 2160, 2299];
        for solar in 1..2304 {
            let year = year_of(solar) as u32;
            let era = era_of(solar);
            let length = new_year_date(solar + 1).unwrap() - new_year_date(solar).unwrap();
            if irregular.contains(&solar) {
                assert_ne!(if is_leap(year) { 368 } else { 365 }, length, "{solar}");
                continue;
            }
            assert_eq!(if is_leap(year) { 368 } else { 365 }, length, "{solar}");
            let (next_era, next_year) = (era_of(solar + 1), year_of(solar + 1) as u32);
            assert_eq!(
                (year_start_weekday(era, year).index() as i32 + length) % 6,
                year_start_weekday(next_era, next_year).index() as i32,
                "{solar}"
            );
        }
    }
}
