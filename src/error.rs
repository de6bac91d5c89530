//! Error types for the imladris crate.

/// Error type for all fallible conversions in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when solar date components do not name an existing day.
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate {
        /// Astronomical year number.
        year: i32,
        /// Month, `1..=12` when valid.
        month: i32,
        /// Day of month.
        day: i32,
    },

    /// Returned when a clock time is out of range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour of day.
        hour: u32,
        /// Minute.
        minute: u32,
        /// Second.
        second: u32,
    },

    /// Returned when a sunset string is not in `HH:MM:SS` form.
    #[error("invalid sunset time {input:?}: {source}")]
    InvalidSunset {
        /// The string handed over by the sunset source.
        input: String,
        /// Underlying parse failure.
        source: chrono::ParseError,
    },

    /// Returned when a solar year precedes the first year of era I.
    #[error("solar year {year} precedes era I")]
    BeforeEpoch {
        /// The solar year.
        year: i32,
    },

    /// Returned when an era has no entry in the epoch table.
    #[error("era {era} is outside the epoch table")]
    EraOutOfRange {
        /// The unsupported era.
        era: i32,
    },

    /// Returned when a year-within-era is not in `1..=144`.
    #[error("year {year} is not in 1..=144")]
    YearOutOfRange {
        /// The invalid year.
        year: i32,
    },

    /// Returned when a day does not exist in the given period.
    #[error("day {day} is not in 1..={length} for {period}")]
    DayOutOfRange {
        /// The invalid day.
        day: u32,
        /// Length of the target period (or year).
        length: u32,
        /// Name of the target period, or `"year"`.
        period: &'static str,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_solar_date() {
        let e = Error::InvalidSolarDate {
            year: 1582,
            month: 10,
            day: 10,
        };
        assert_eq!(e.to_string(), "invalid solar date 1582-10-10");
    }

    #[test]
    fn error_era_out_of_range() {
        let e = Error::EraOutOfRange { era: 17 };
        assert_eq!(e.to_string(), "era 17 is outside the epoch table");
    }

    #[test]
    fn error_day_out_of_range() {
        let e = Error::DayOutOfRange {
            day: 4,
            length: 3,
            period: "Ender",
        };
        assert_eq!(e.to_string(), "day 4 is not in 1..=3 for Ender");
    }

    #[test]
    fn error_invalid_sunset() {
        let source = chrono::NaiveTime::parse_from_str("7pm", "%H:%M:%S").unwrap_err();
        let e = Error::InvalidSunset {
            input: "7pm".into(),
            source,
        };
        assert!(e.to_string().starts_with("invalid sunset time \"7pm\": "));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<Error>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Error>();
    }
}
