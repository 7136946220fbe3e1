// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

/// Added to every easting so x stays positive within a zone
pub(crate) const FALSE_EASTING: f64 = 500_000.;
/// Added to southern hemisphere northings
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;

// UTM limits, degrees
pub(crate) const MIN_LATITUDE: f64 = -80.;
pub(crate) const MAX_LATITUDE: f64 = 84.;
