use lazy_static::lazy_static;

use crate::{constants::{WGS84_A, WGS84_F, UTM_K0}, utility::{polyval, GeoMath}};

// ================================
// Transverse Mercator Constants
// ================================

// Meridional arc, polynomials in e^2 of order 3
const M1_COEFF: [f64; 5] = [
    // m1 = 1 - e2/4 - 3e4/64 - 5e6/256
    -5., -12., -64., 256., 256.,
];  // count = 5

const M2_COEFF: [f64; 5] = [
    // m2 = 3e2/8 + 3e4/32 + 45e6/1024
    45., 96., 384., 0., 1024.,
];  // count = 5

const M3_COEFF: [f64; 5] = [
    // m3 = 15e4/256 + 45e6/1024
    45., 60., 0., 0., 1024.,
];  // count = 5

const M4_COEFF: [f64; 5] = [
    // m4 = 35e6/3072
    35., 0., 0., 0., 3072.,
];  // count = 5

// Footpoint latitude, polynomials in n of order 5
const P2_COEFF: [f64; 7] = [
    // p2 = 3n/2 - 27n3/32 + 269n5/512
    269., 0., -432., 0., 768., 0., 512.,
];  // count = 7

const P4_COEFF: [f64; 7] = [
    // p4 = 21n2/16 - 55n4/32
    0., -55., 0., 42., 0., 0., 32.,
];  // count = 7

const P6_COEFF: [f64; 7] = [
    // p6 = 151n3/96
    0., 0., 151., 0., 0., 0., 96.,
];  // count = 7

const P8_COEFF: [f64; 7] = [
    // p8 = 1097n4/512 - 417n5/128
    -1668., 1097., 0., 0., 0., 0., 512.,
];  // count = 7

const A: f64 = WGS84_A;
const F: f64 = WGS84_F;
const E2: f64 = F * (2. - F);

lazy_static! {
    static ref UTM: TransverseMercator = TransverseMercator::new(A, E2, UTM_K0);
}

// Last entry of each table is the common denominator
fn series(coeff: &[f64], x: f64) -> f64 {
    let m = coeff.len() - 1;
    polyval(&coeff[..m], x) / coeff[m]
}

/// Ellipsoid constants and the truncated Transverse Mercator series built on them.
/// Only a single instance exists for UTM, see [`TransverseMercator::utm`].
#[derive(Debug)]
pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    e2: f64,
    // second eccentricity squared
    ep2: f64,
    m1: f64,
    m2: f64,
    m3: f64,
    m4: f64,
    p2: f64,
    p4: f64,
    p6: f64,
    p8: f64,
}

impl TransverseMercator {
    fn new(a: f64, e2: f64, k0: f64) -> TransverseMercator {
        let ep2 = e2 / (1. - e2);
        // Third flattening
        let ec = (1. - e2).sqrt();
        let n = (1. - ec) / (1. + ec);

        Self {
            a,
            k0,
            e2,
            ep2,
            m1: series(&M1_COEFF, e2),
            m2: series(&M2_COEFF, e2),
            m3: series(&M3_COEFF, e2),
            m4: series(&M4_COEFF, e2),
            p2: series(&P2_COEFF, n),
            p4: series(&P4_COEFF, n),
            p6: series(&P6_COEFF, n),
            p8: series(&P8_COEFF, n),
        }
    }

    /// The shared WGS84 / UTM instance.
    pub fn utm() -> &'static TransverseMercator {
        &UTM
    }

    // Meridional arc length from the equator to `lat`
    fn meridian_arc(&self, lat: f64) -> f64 {
        self.a * (
            self.m1 * lat
            - self.m2 * (2. * lat).sin()
            + self.m3 * (4. * lat).sin()
            - self.m4 * (6. * lat).sin()
        )
    }

    // Latitude whose meridional arc is `m`
    fn footpoint_latitude(&self, m: f64) -> f64 {
        let mu = m / (self.a * self.m1);

        mu
            + self.p2 * (2. * mu).sin()
            + self.p4 * (4. * mu).sin()
            + self.p6 * (6. * mu).sin()
            + self.p8 * (8. * mu).sin()
    }

    /// Projects `lat`/`lon` (radians) onto the plane of the meridian `lon0`.
    /// The returned x/y carry no false easting or northing.
    #[allow(clippy::similar_names)]
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let (lat_s, lat_c) = lat.sin_cos();
        let t = lat_s / lat_c;
        let t2 = t * t;
        let t4 = t2 * t2;

        let n = self.a / (1. - self.e2 * lat_s * lat_s).sqrt();
        let c = self.ep2 * lat_c * lat_c;

        let a = lat_c * (lon - lon0).ang_normalize();
        let a2 = a * a;
        let a3 = a * a2;
        let a4 = a * a3;
        let a5 = a * a4;
        let a6 = a * a5;

        let m = self.meridian_arc(lat);

        let x = self.k0 * n * (
            a
            + (1. - t2 + c) * a3 / 6.
            + (5. - 18. * t2 + t4 + 72. * c - 58. * self.ep2) * a5 / 120.
        );

        let y = self.k0 * (m + n * t * (
            a2 / 2.
            + (5. - t2 + (9. + 4. * c) * c) * a4 / 24.
            + (61. - 58. * t2 + t4 + 600. * c - 330. * self.ep2) * a6 / 720.
        ));

        (x, y)
    }

    /// Inverse of [`TransverseMercator::from_latlon`]. Returns `(lat, lon)` in
    /// radians, longitude normalised into (-pi, pi].
    #[allow(clippy::similar_names)]
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> (f64, f64) {
        let p1 = self.footpoint_latitude(y / self.k0);

        let (p1_s, p1_c) = p1.sin_cos();
        let t = p1_s / p1_c;
        let t2 = t * t;
        let t4 = t2 * t2;

        let tmp = 1. - self.e2 * p1_s * p1_s;
        let n = self.a / tmp.sqrt();
        // Ratio of meridian to prime vertical radius of curvature
        let r = (1. - self.e2) / tmp;

        let c = self.ep2 * p1_c * p1_c;
        let c2 = c * c;

        let d = x / (n * self.k0);
        let d2 = d * d;
        let d3 = d * d2;
        let d4 = d * d3;
        let d5 = d * d4;
        let d6 = d * d5;

        let lat = p1 - (t / r) * (
            d2 / 2.
            - (5. + 3. * t2 + 10. * c - 4. * c2 - 9. * self.ep2) * d4 / 24.
            + (61. + 90. * t2 + 298. * c + 45. * t4 - 252. * self.ep2 - 3. * c2) * d6 / 720.
        );

        let lon = (
            d
            - (1. + 2. * t2 + c) * d3 / 6.
            + (5. - 2. * c + 28. * t2 - 3. * c2 + 8. * self.ep2 + 24. * t4) * d5 / 120.
        ) / p1_c;

        (lat, (lon + lon0).ang_normalize())
    }
}
