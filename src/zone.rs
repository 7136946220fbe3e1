use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

use num::{clamp, Integer};

use crate::{constants::{MAX_LATITUDE, MIN_LATITUDE}, utility::{dms, GeoMath}, Error};

/// Latitude band letters, 8 degrees each starting at 80S. `X` also absorbs 80N..84N.
pub const LATBAND: &str = "CDEFGHJKLMNPQRSTUVWX";
const DIGITS: &str = "0123456789";

pub const MINUTMZONE: i32 = 1;
pub const MAXUTMZONE: i32 = 60;

// Index of `N` in LATBAND, the first band north of the equator
const NORTH_BAND: usize = 10;

/// A region where the zone number differs from the regular 6 degree strip.
/// Bounds are whole degrees, inclusive, after flooring.
struct ZoneException {
    name: &'static str,
    lat: RangeInclusive<i32>,
    lon: RangeInclusive<i32>,
    zone: i32,
}

// Evaluated top to bottom, first match wins
static ZONE_EXCEPTIONS: [ZoneException; 5] = [
    // Zone 32V widened over southwest Norway
    ZoneException { name: "Norway", lat: 56..=63, lon: 3..=11, zone: 32 },
    // Zones 32X, 34X and 36X are unused; odd zones widened over Svalbard
    ZoneException { name: "Svalbard 31X", lat: 72..=84, lon: 0..=8, zone: 31 },
    ZoneException { name: "Svalbard 33X", lat: 72..=84, lon: 9..=20, zone: 33 },
    ZoneException { name: "Svalbard 35X", lat: 72..=84, lon: 21..=32, zone: 35 },
    ZoneException { name: "Svalbard 37X", lat: 72..=84, lon: 33..=41, zone: 37 },
];

/// Checks that `lat`/`lon` (radians) lie inside the area covered by UTM:
/// latitude in `[-80, 84]` degrees, longitude in `(-180, 180]` degrees.
pub(crate) fn check_envelope(lat: f64, lon: f64, dest_type: &str) -> Result<(), Error> {
    if !(MIN_LATITUDE.to_radians()..=MAX_LATITUDE.to_radians()).contains(&lat) {
        return Err(Error::InvalidRange {
            coord_type: "LatLon".to_string(),
            dest_type: dest_type.to_string(),
            msg: format!("Latitude {}deg outside of UTM range [-80, 84].", lat.to_degrees()),
        });
    }

    if !(lon > -std::f64::consts::PI && lon <= std::f64::consts::PI) {
        return Err(Error::InvalidRange {
            coord_type: "LatLon".to_string(),
            dest_type: dest_type.to_string(),
            msg: format!("Longitude {}deg outside of UTM range (-180, 180].", lon.to_degrees()),
        });
    }

    Ok(())
}

/// Returns the index of the latitude band containing `lat` (radians), `0` for `C`.
#[allow(clippy::cast_sign_loss)]
fn band_index(lat: f64) -> usize {
    let lat_d = lat.floor_degrees();
    // Rounding at -80 can floor to -81, and 80..84 all belong to X
    clamp(Integer::div_floor(&(lat_d + 80), &dms::BAND), 0, 19) as usize
}

/// Returns the UTM latitude band letter for `lat` in radians.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if `lat` is outside `[-80, 84]` degrees.
///
/// # Usage
///
/// ```
/// use latlon_utm::zone_letter_for;
///
/// assert_eq!(zone_letter_for(52.5_f64.to_radians()).unwrap(), 'U');
/// assert_eq!(zone_letter_for(-0.5_f64.to_radians()).unwrap(), 'M');
/// assert_eq!(zone_letter_for(84_f64.to_radians()).unwrap(), 'X');
///
/// assert!(zone_letter_for(85_f64.to_radians()).is_err());
/// ```
pub fn zone_letter_for(lat: f64) -> Result<char, Error> {
    check_envelope(lat, 0., "Zone")?;

    Ok(LATBAND.as_bytes()[band_index(lat)] as char)
}

/// Returns the UTM zone number for `lat`/`lon` in radians, taking the
/// Norway and Svalbard exceptions into account. Longitude 180 degrees is
/// classified with -180 degrees, in zone 1.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if the position is outside the UTM envelope.
///
/// # Usage
///
/// ```
/// use latlon_utm::zone_number_for;
///
/// let zone = zone_number_for(52.5_f64.to_radians(), (-2.9_f64).to_radians()).unwrap();
/// assert_eq!(zone, 30);
///
/// // Norway
/// assert_eq!(zone_number_for(60_f64.to_radians(), 5_f64.to_radians()).unwrap(), 32);
/// // Svalbard
/// assert_eq!(zone_number_for(75_f64.to_radians(), 10_f64.to_radians()).unwrap(), 33);
/// ```
pub fn zone_number_for(lat: f64, lon: f64) -> Result<i32, Error> {
    check_envelope(lat, lon, "Zone")?;

    let lat_d = lat.floor_degrees();
    let mut lon_d = lon.floor_degrees();
    if lon_d >= dms::HD {
        lon_d -= dms::TD;
    }

    let standard = clamp(
        Integer::div_floor(&(lon_d + dms::HD), &dms::ZONE) + 1,
        MINUTMZONE,
        MAXUTMZONE,
    );

    let zone = ZONE_EXCEPTIONS
        .iter()
        .find(|ex| ex.lat.contains(&lat_d) && ex.lon.contains(&lon_d))
        .map_or(standard, |ex| {
            tracing::debug!(region = ex.name, standard, zone = ex.zone, "zone exception applied");
            ex.zone
        });

    Ok(zone)
}

/// Identifies a UTM grid zone: latitude band letter plus zone number.
/// Serialized as the letter followed by the number, e.g. `"U32"` or `"C1"`,
/// two or three characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Zone {
    pub(crate) letter: char,
    pub(crate) number: i32,
}

impl Zone {
    /// Tries to create a zone from a band letter and a zone number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the letter is not a UTM latitude band,
    /// or [`Error::InvalidZoneNumber`] if the number is outside `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use latlon_utm::Zone;
    ///
    /// let zone = Zone::create('U', 30).unwrap();
    /// assert_eq!(zone.to_string(), "U30");
    ///
    /// assert!(Zone::create('I', 30).is_err());
    /// assert!(Zone::create('U', 61).is_err());
    /// ```
    pub fn create(letter: char, number: i32) -> Result<Zone, Error> {
        let letter = letter.to_ascii_uppercase();
        if !LATBAND.contains(letter) {
            return Err(Error::InvalidZone(format!("Band letter {letter} not in UTM set {LATBAND}")));
        }

        if !(MINUTMZONE..=MAXUTMZONE).contains(&number) {
            return Err(Error::InvalidZoneNumber(number));
        }

        Ok(Zone { letter, number })
    }

    /// Returns the zone containing `lat`/`lon` in radians.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the position is outside the UTM envelope.
    pub fn for_latlon(lat: f64, lon: f64) -> Result<Zone, Error> {
        Ok(Zone {
            letter: zone_letter_for(lat)?,
            number: zone_number_for(lat, lon)?,
        })
    }

    /// Returns the latitude band letter.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Returns the zone number, `[1, 60]`.
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Returns whether the band lies north of the equator. Bands are assigned
    /// from the floored latitude, so this agrees with `lat >= 0` for any zone
    /// produced by a forward conversion.
    ///
    /// ```
    /// use latlon_utm::Zone;
    ///
    /// assert!(Zone::create('N', 31).unwrap().is_north());
    /// assert!(!Zone::create('M', 31).unwrap().is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        LATBAND.find(self.letter).is_some_and(|i| i >= NORTH_BAND)
    }

    /// Returns the longitude of the central meridian of this zone, in radians.
    ///
    /// ```
    /// use latlon_utm::Zone;
    ///
    /// let zone = Zone::create('U', 30).unwrap();
    /// assert!((zone.central_meridian() - (-3_f64).to_radians()).abs() < 1e-15);
    /// ```
    pub fn central_meridian(&self) -> f64 {
        // +3 puts the origin in the middle of the zone
        f64::from((self.number - 1) * dms::ZONE - dms::HD + dms::ZONE / 2).to_radians()
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_uppercase();
        let mut chars = value.chars();

        let Some(letter) = chars.next() else {
            return Err(Error::InvalidZone("Empty zone".to_string()));
        };

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(Error::InvalidZone(format!("Missing zone number in {value}")));
        }
        if !digits.chars().all(|c| DIGITS.contains(c)) {
            return Err(Error::InvalidZone(format!("Zone number {digits} is not numeric")));
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(Error::InvalidZone(format!("Leading zero in zone number {digits}")));
        }
        if digits.len() > 2 {
            return Err(Error::InvalidZone(format!("More than 2 digits in zone number {digits}")));
        }

        let number = digits
            .parse::<i32>()
            .map_err(|e| Error::InvalidZone(format!("Zone number {digits}: {e}")))?;

        Zone::create(letter, number)
    }
}

impl TryFrom<String> for Zone {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(value: Zone) -> Self {
        value.to_string()
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}
