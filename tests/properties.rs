use std::f64::consts::{PI, TAU};

use latlon_utm::{to_geodetic, to_projected, zone::LATBAND, zone_letter_for, zone_number_for};
use proptest::prelude::*;

fn ang_diff(a: f64, b: f64) -> f64 {
    ((a - b + PI).rem_euclid(TAU) - PI).abs()
}

proptest! {
    #[test]
    fn prop_round_trip(lat_deg in -80.0..=84.0f64, lon_deg in -179.999..180.0f64) {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();

        let utm = to_projected(lat, lon).unwrap();
        let back = to_geodetic(utm.easting(), utm.northing(), &utm.zone().to_string()).unwrap();

        // Widened Norway / Svalbard zones are looser
        let naive = (lon_deg.floor() as i32 + 180) / 6 + 1;
        let tolerance = if utm.zone().number() == naive { 1e-9 } else { 5e-8 };

        prop_assert!((back.latitude() - lat).abs() < tolerance);
        prop_assert!(ang_diff(back.longitude(), lon) < tolerance);
    }

    #[test]
    fn prop_zone_number_range(lat_deg in -80.0..=84.0f64, lon_deg in -179.999..=180.0f64) {
        let zone = zone_number_for(lat_deg.to_radians(), lon_deg.to_radians()).unwrap();
        prop_assert!((1..=60).contains(&zone));
    }

    #[test]
    fn prop_zone_letter_monotonic(a in -80.0..=84.0f64, b in -80.0..=84.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let lo_idx = LATBAND.find(zone_letter_for(lo.to_radians()).unwrap()).unwrap();
        let hi_idx = LATBAND.find(zone_letter_for(hi.to_radians()).unwrap()).unwrap();

        prop_assert!(lo_idx <= hi_idx);
    }

    #[test]
    fn prop_hemisphere_offset(lat_deg in -80.0..=84.0f64, lon_deg in -179.999..180.0f64) {
        let utm = to_projected(lat_deg.to_radians(), lon_deg.to_radians()).unwrap();

        prop_assert_eq!(utm.is_north(), lat_deg >= 0.0);
        prop_assert!(utm.northing() >= 0.0);
        prop_assert!(utm.northing() < 10_000_000.0);
        prop_assert!(utm.easting() > 0.0 && utm.easting() < 1_000_000.0);
    }
}
