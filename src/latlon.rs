use std::{f64::consts::{FRAC_PI_2, PI}, fmt::Display};

use crate::{utm::Utm, Error};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 Latitude/Longitude point, both angles in radians.
/// Can be converted to/from [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair in radians.
    /// First checks if the values are valid:
    /// * Latitude must be in range [-pi/2, pi/2]
    /// * Longitude must be in range (-pi, pi]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::LatLon;
    ///
    /// let coord = LatLon::create(0.7112, -1.2913);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 0.7112);
    /// assert_eq!(coord.longitude(), -1.2913);
    ///
    /// let invalid_coord_lat = LatLon::create(2.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -4.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-FRAC_PI_2..=FRAC_PI_2).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-pi/2, pi/2].")))
        } else if !(lon > -PI && lon <= PI) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range (-pi, pi].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Same as [`LatLon::create`] with both angles given in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::LatLon;
    ///
    /// let coord = LatLon::from_degrees(52.50207395, -2.9096531).unwrap();
    /// assert!((coord.latitude_degrees() - 52.50207395).abs() < 1e-12);
    ///
    /// assert!(LatLon::from_degrees(91.0, 0.0).is_err());
    /// ```
    pub fn from_degrees(lat: f64, lon: f64) -> Result<LatLon, Error> {
        Self::create(lat.to_radians(), lon.to_radians())
    }

    /// Returns the latitude in radians.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in radians.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    #[inline]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    /// Returns whether the current point is in the northern hemisphere.
    /// The equator counts as north.
    ///
    /// # Example
    ///
    /// ```
    /// use latlon_utm::LatLon;
    ///
    /// let coord = LatLon::from_degrees(40.748333, -73.985278).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::from_degrees(-40.748333, -73.985278).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude) / 2.0).sin().powi(2) +
            self.latitude.cos() * other.latitude.cos() *
            ((other.longitude - self.longitude) / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::{LatLon, Utm};
    ///
    /// let coord = LatLon::from_degrees(52.50207395, -2.9096531).unwrap();
    /// let coord_utm = Utm::create("U30".parse().unwrap(), 506132.736, 5816886.533).unwrap();
    ///
    /// let converted = LatLon::from_utm(&coord_utm);
    ///
    /// // Accurate to 6 decimal degrees
    /// assert!((converted.latitude_degrees() - coord.latitude_degrees()).abs() < 1e-6);
    /// assert!((converted.longitude_degrees() - coord.longitude_degrees()).abs() < 1e-6);
    /// ```
    pub fn from_utm(value: &Utm) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Utm`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the point lies outside the UTM
    /// latitude limits `[-80, 84]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::LatLon;
    ///
    /// let coord = LatLon::from_degrees(52.50207395, -2.9096531).unwrap();
    ///
    /// let converted = coord.to_utm().unwrap();
    ///
    /// assert_eq!(converted.zone().to_string(), "U30");
    /// assert!((converted.easting() - 506132.74).abs() < 1e-2);
    /// assert!((converted.northing() - 5816886.53).abs() < 1e-2);
    ///
    /// let polar = LatLon::from_degrees(85.0, 0.0).unwrap();
    /// assert!(polar.to_utm().is_err());
    /// ```
    pub fn to_utm(&self) -> Result<Utm, Error> {
        Utm::from_latlon(self)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
