//! Interface to an external sunset provider.
//!
//! Geocoding, time zone lookup and solar position math live outside this
//! crate. A provider is handed to [`DayBoundary::resolve`] explicitly and
//! answers with a local `HH:MM:SS` string.
//!
//! [`DayBoundary::resolve`]: crate::DayBoundary::resolve

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Where sunset should be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    /// IANA time zone name, e.g. `"Europe/Madrid"`.
    pub time_zone: String,
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lng: f64,
}

impl LocationInfo {
    pub fn new(time_zone: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            time_zone: time_zone.into(),
            lat,
            lng,
        }
    }
}

/// Something that knows when the sun sets.
pub trait SunsetSource {
    /// Local sunset on `date` at `location` in `HH:MM:SS` form, or `None` if
    /// it cannot be determined (polar day, lookup failure, ...).
    fn sunset(&self, date: Date, location: &LocationInfo) -> Option<String>;
}

/// A provider answering the same time for every date and place.
///
/// # Example
///
/// ```
/// use imladris::{Date, DayBoundary, FixedSunset, LocationInfo};
///
/// let source = FixedSunset::new("19:00:00");
/// let here = LocationInfo::new("Europe/Madrid", 40.4, -3.7);
/// let date = Date::from_solar(2024, 6, 1).unwrap();
///
/// let boundary = DayBoundary::resolve(&source, date, &here).unwrap();
/// assert_eq!(DayBoundary::sunset("19:00:00").unwrap(), boundary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSunset {
    hms: String,
}

impl FixedSunset {
    pub fn new(hms: impl Into<String>) -> Self {
        Self { hms: hms.into() }
    }
}

impl SunsetSource for FixedSunset {
    fn sunset(&self, _date: Date, _location: &LocationInfo) -> Option<String> {
        Some(self.hms.clone())
    }
}
