use std::f64::consts::{PI, TAU};

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
    /// Degrees spanned by a latitude band
    pub const BAND: i32 = 8;
    /// Degrees spanned by a standard zone
    pub const ZONE: i32 = 6;
}

/// Evaluate a polynomial, coefficients ordered from the highest power down
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

pub(crate) trait GeoMath {
    fn remainder(&self, denom: Self) -> Self;
    fn ang_normalize(&self) -> Self;
    fn floor_degrees(&self) -> i32;
}

impl GeoMath for f64 {
    fn remainder(&self, denom: Self) -> Self {
        *self - (*self / denom).round() * denom
    }

    /// Wraps an angle in radians into (-pi, pi]
    fn ang_normalize(&self) -> f64 {
        let value = self.remainder(TAU);

        if value <= -PI {
            value + TAU
        } else {
            value
        }
    }

    /// Radians to whole degrees, rounding toward negative infinity
    #[allow(clippy::cast_possible_truncation)]
    fn floor_degrees(&self) -> i32 {
        self.to_degrees().floor() as i32
    }
}
