#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between WGS84 latitude/longitude and
//! [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
//! easting/northing, using the truncated Transverse Mercator series.
//!
//! All angles are in radians.
//!
//! ```
//! use latlon_utm::{to_geodetic, to_projected};
//!
//! let lat = 52.50207395_f64.to_radians();
//! let lon = (-2.9096531_f64).to_radians();
//!
//! let utm = to_projected(lat, lon).unwrap();
//! let zone = utm.zone().to_string();
//! assert_eq!(zone, "U30");
//!
//! let back = to_geodetic(utm.easting(), utm.northing(), &zone).unwrap();
//! assert!((back.latitude() - lat).abs() < 1e-9);
//! assert!((back.longitude() - lon).abs() < 1e-9);
//! ```

use thiserror::Error;

pub mod latlon;
pub mod utm;
pub mod zone;
pub(crate) mod utility;

pub use latlon::LatLon;
pub use utm::{to_geodetic, to_projected, Utm};
pub use zone::{zone_letter_for, zone_number_for, Zone};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Zone is invalid: {0}")]
    InvalidZone(String),
    #[error("Zone number {0} not in range [1, 60]")]
    InvalidZoneNumber(i32),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
    #[error("Coordinate type {coord_type} not valid for conversion to {dest_type}: {msg}")]
    InvalidRange {
        coord_type: String,
        dest_type: String,
        msg: String,
    },
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
