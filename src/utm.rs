use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING},
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    zone::{check_envelope, Zone},
    Error, ThisOrThat,
};

const MIN_EASTING: f64 = 0.;
const MAX_EASTING: f64 = 2. * FALSE_EASTING;
// Indexed by hemisphere, south then north. 80S and 84N project to about
// 1 118 km and 9 334 km; the extra margin keeps the inverse short of the poles.
const MIN_NORTHING: [f64; 2] = [1_100_000., 0.];
const MAX_NORTHING: [f64; 2] = [FALSE_NORTHING, 9_400_000.];

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point: easting and northing in meters within a [`Zone`]. Eastings carry the
/// 500 000 m false easting, southern hemisphere northings the 10 000 000 m
/// false northing, so both are non-negative.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: Zone,
    #[cfg_attr(feature = "serde", serde(alias = "x"))]
    pub(crate) easting: f64,
    #[cfg_attr(feature = "serde", serde(alias = "y"))]
    pub(crate) northing: f64,
}

impl Utm {
    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtmCoords`] if easting or northing are not finite
    /// or fall outside the zone's hemisphere: easting `[0, 1 000 000]` meters,
    /// northing `[0, 9 400 000]` in the north or `[1 100 000, 10 000 000]` in
    /// the south.
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::{Utm, Zone};
    ///
    /// let zone: Zone = "U30".parse().unwrap();
    /// let coord = Utm::create(zone, 506132.736, 5816886.533);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone(), zone);
    /// assert!((coord.easting() - 506132.736).abs() < 1e-3);
    /// assert!((coord.northing() - 5816886.533).abs() < 1e-3);
    ///
    /// let invalid_easting = Utm::create(zone, -10.0, 5816886.533);
    /// assert!(invalid_easting.is_err());
    ///
    /// let invalid_northing = Utm::create(zone, 506132.736, f64::NAN);
    /// assert!(invalid_northing.is_err());
    ///
    /// // Beyond the north pole
    /// assert!(Utm::create(zone, 500000.0, 9_999_000.0).is_err());
    /// ```
    pub fn create(zone: Zone, easting: f64, northing: f64) -> Result<Utm, Error> {
        check_coords(zone, easting, northing)?;

        Ok(Utm { zone, easting, northing })
    }

    /// Returns the grid zone.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Returns whether the coordinate is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.zone.is_north()
    }

    /// Returns the UTM easting (x) in meters.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing (y) in meters.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`Utm`]. The zone is chosen from the
    /// position, including the Norway and Svalbard exceptions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the point lies outside the UTM
    /// latitude limits `[-80, 84]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::{LatLon, Utm};
    ///
    /// let coord = LatLon::from_degrees(-33.8688, 151.2093).unwrap();
    /// let converted = Utm::from_latlon(&coord).unwrap();
    ///
    /// assert_eq!(converted.zone().to_string(), "H56");
    /// assert!(!converted.is_north());
    /// assert!((converted.easting() - 334368.634).abs() < 1e-3);
    /// assert!((converted.northing() - 6250948.345).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Result<Utm, Error> {
        check_envelope(value.latitude, value.longitude, "Utm")?;

        let zone = Zone::for_latlon(value.latitude, value.longitude)?;
        let lon0 = zone.central_meridian();

        let (x, y) = TransverseMercator::utm().from_latlon(lon0, value.latitude, value.longitude);

        let easting = x + FALSE_EASTING;
        let northing = y + value.is_north().ternary(0., FALSE_NORTHING);

        tracing::trace!(lat = value.latitude, lon = value.longitude, %zone, easting, northing, "projected");

        Ok(Utm {
            zone,
            easting,
            northing,
        })
    }

    /// Converts from [`Utm`] to [`LatLon`]. The result approximates the
    /// original position to well under a millimeter on the ground.
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::{LatLon, Utm};
    ///
    /// let coord = LatLon::from_degrees(-33.8688, 151.2093).unwrap();
    /// let converted = Utm::from_latlon(&coord).unwrap().to_latlon();
    ///
    /// assert!(coord.haversine(&converted) < 1e-3);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        let x = self.easting - FALSE_EASTING;
        let y = self.northing - self.is_north().ternary(0., FALSE_NORTHING);

        let (lat, lon) = TransverseMercator::utm().to_latlon(self.zone.central_meridian(), x, y);

        tracing::trace!(zone = %self.zone, x = self.easting, y = self.northing, lat, lon, "unprojected");

        LatLon::new(lat, lon)
    }
}

/// Projects `lat`/`lon` (radians) to UTM, see [`Utm::from_latlon`].
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if the position is outside latitude
/// `[-80, 84]` or longitude `(-180, 180]` degrees.
///
/// # Usage
///
/// ```
/// use latlon_utm::to_projected;
///
/// let utm = to_projected(52.50207395_f64.to_radians(), (-2.9096531_f64).to_radians()).unwrap();
///
/// assert_eq!(utm.zone().to_string(), "U30");
/// assert!((utm.easting() - 506132.74).abs() < 1e-2);
/// assert!((utm.northing() - 5816886.53).abs() < 1e-2);
/// ```
pub fn to_projected(lat: f64, lon: f64) -> Result<Utm, Error> {
    Utm::from_latlon(&LatLon::new(lat, lon))
}

/// Recovers latitude/longitude (radians) from a UTM easting/northing and the
/// zone string produced by [`to_projected`], e.g. `"U30"`.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] or [`Error::InvalidZoneNumber`] if `zone`
/// is malformed, and [`Error::InvalidUtmCoords`] if `x`/`y` are out of bounds.
///
/// # Usage
///
/// ```
/// use latlon_utm::to_geodetic;
///
/// let coord = to_geodetic(506132.7356, 5816886.5334, "U30").unwrap();
///
/// assert!((coord.latitude_degrees() - 52.50207395).abs() < 1e-6);
/// assert!((coord.longitude_degrees() + 2.9096531).abs() < 1e-6);
///
/// assert!(to_geodetic(506132.7356, 5816886.5334, "U0").is_err());
/// ```
pub fn to_geodetic(x: f64, y: f64, zone: &str) -> Result<LatLon, Error> {
    let zone: Zone = zone.parse()?;

    Ok(Utm::create(zone, x, y)?.to_latlon())
}

pub(crate) fn check_coords(zone: Zone, x: f64, y: f64) -> Result<(), Error> {
    if !(MIN_EASTING..=MAX_EASTING).contains(&x) {
        return Err(Error::InvalidUtmCoords(
            format!(
                "Easting {:.2}km not in UTM range for zone {zone} [{:.2}km, {:.2}km]",
                x / 1000.0,
                MIN_EASTING / 1000.0,
                MAX_EASTING / 1000.0,
            )
        ));
    }

    let ind = zone.is_north().ternary(1, 0);
    if !(MIN_NORTHING[ind]..=MAX_NORTHING[ind]).contains(&y) {
        return Err(Error::InvalidUtmCoords(
            format!(
                "Northing {:.2}km not in UTM range for zone {zone}, {} hemisphere [{:.2}km, {:.2}km]",
                y / 1000.0,
                zone.is_north().ternary("north", "south"),
                MIN_NORTHING[ind] / 1000.0,
                MAX_NORTHING[ind] / 1000.0,
            )
        ));
    }

    Ok(())
}

impl std::fmt::Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{} {easting} {northing}",
            self.zone,
        )
    }
}
