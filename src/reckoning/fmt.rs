//! Period and weekday names, and date formatting.

use super::{Period, Weekday};

/// Period names, `Yestarë` through `Mettarë`.
pub const PERIOD_NAMES: &[&str] = &[
    "Yestarë", "Tuilë", "Lairë", "Yávië", "Ender", "Quellë", "Hrívë", "Coirë", "Mettarë",
];

/// Weekday names, `Elenya` through `Valanya`.
pub const WEEKDAY_NAMES: &[&str] = &["Elenya", "Anarya", "Isilya", "Aldúya", "Menelya", "Valanya"];

/// Name of a period.
///
/// # Example
///
/// ```
/// use imladris::reckoning::{fmt, Period};
///
/// assert_eq!("Hrívë", fmt::period(Period::Hrive));
/// ```
pub fn period(p: Period) -> &'static str {
    PERIOD_NAMES[p.number() as usize - 1]
}

/// Name of a weekday.
pub fn weekday(w: Weekday) -> &'static str {
    WEEKDAY_NAMES[w.index()]
}

/// Period with day, as used in dates. The single-day periods Yestarë and
/// Mettarë are written without a day.
///
/// # Example
///
/// ```
/// use imladris::reckoning::{fmt, Period};
///
/// assert_eq!("Tuilë 12", fmt::period_day(Period::Tuile, 12));
/// assert_eq!("Ender 2", fmt::period_day(Period::Enderi, 2));
/// assert_eq!("Mettarë", fmt::period_day(Period::Mettare, 1));
/// ```
pub fn period_day(p: Period, day: u32) -> String {
    if p.is_month() || p == Period::Enderi {
        format!("{} {}", period(p), day)
    } else {
        period(p).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_line_up() {
        assert_eq!(Period::ALL.len(), PERIOD_NAMES.len());
        assert_eq!(Weekday::ALL.len(), WEEKDAY_NAMES.len());
        assert_eq!("Yestarë", period(Period::Yestare));
        assert_eq!("Mettarë", period(Period::Mettare));
        assert_eq!("Elenya", weekday(Weekday::Elenya));
        assert_eq!("Valanya", weekday(Weekday::Valanya));
    }

    #[test]
    fn test_period_day() {
        for (std, p, d) in [
            ("Yestarë", Period::Yestare, 1),
            ("Lairë 72", Period::Laire, 72),
            ("Ender 6", Period::Enderi, 6),
            ("Coirë 1", Period::Coire, 1),
        ] {
            assert_eq!(std, period_day(p, d));
        }
    }
}
