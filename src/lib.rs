//! Conversion between solar dates and Imladris Reckoning.
//!
//! Imladris Reckoning is the calendar of the Elves of Rivendell: a 144-year
//! era (*yén*) split into years of nine periods, with a six-day week. Years
//! begin in March on days given by an epoch table, which covers eras I to
//! XVI (solar years 1 to 2304).
//!
//! Solar dates follow the Julian calendar up to 1582-10-04 and the Gregorian
//! calendar from 1582-10-15.
//!
//! # Examples
//!
//! Solar to reckoning:
//!
//! ```
//! use imladris::ReckoningDate;
//!
//! let date = ReckoningDate::from_ymd_hms(2000, 1, 1, 12, 0, 0).unwrap();
//!
//! assert_eq!("Isilya, Hrívë 41, XIV 127", date.to_string());
//! assert_eq!(47, date.week_of_period());
//! ```
//!
//! Reckoning to solar, with days beginning at sunset:
//!
//! ```
//! use chrono::NaiveTime;
//! use imladris::{DayBoundary, FixedSunset, LocationInfo, ReckoningDate};
//! use imladris::reckoning::Period;
//!
//! let oslo = LocationInfo::new("Europe/Oslo", 59.91, 10.75);
//! let source = FixedSunset::new("15:20:00");
//! let day = imladris::Date::from_solar(2000, 1, 1).unwrap();
//! let boundary = DayBoundary::resolve(&source, day, &oslo).unwrap();
//!
//! let evening = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
//! let date =
//!     ReckoningDate::from_reckoning_at("XIV", 127, Period::Hrive, 41, evening, boundary).unwrap();
//!
//! assert_eq!(42, date.day_of_period());
//! assert_eq!("2000-01-02", date.date().iso_solar());
//! ```

pub mod date;
pub mod error;
pub mod reckoning;
pub mod solar;
pub mod sunset;

pub use date::{Date, YearType};
pub use error::{Error, Result};
pub use reckoning::{Field, Period, ReckoningDate, Weekday};
pub use solar::{DayBoundary, SolarDateTime};
pub use sunset::{FixedSunset, LocationInfo, SunsetSource};
