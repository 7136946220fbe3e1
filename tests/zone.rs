use latlon_utm::{zone::LATBAND, zone_letter_for, zone_number_for, Error, Zone};

fn letter(lat_deg: f64) -> char {
    zone_letter_for(lat_deg.to_radians()).unwrap()
}

fn number(lat_deg: f64, lon_deg: f64) -> i32 {
    zone_number_for(lat_deg.to_radians(), lon_deg.to_radians()).unwrap()
}

#[test]
fn band_centres() {
    for (i, expected) in LATBAND.chars().enumerate() {
        let lat_deg = -80.0 + 8.0 * i as f64 + 4.0;
        assert_eq!(letter(lat_deg), expected, "{lat_deg}");
    }
}

#[test]
fn band_edges() {
    assert_eq!(letter(-80.0), 'C');
    assert_eq!(letter(-72.5), 'C');
    assert_eq!(letter(-71.5), 'D');
    assert_eq!(letter(-0.5), 'M');
    assert_eq!(letter(0.0), 'N');
    assert_eq!(letter(0.5), 'N');
    assert_eq!(letter(71.9), 'W');
    assert_eq!(letter(72.1), 'X');
    assert_eq!(letter(80.5), 'X');
    assert_eq!(letter(84.0), 'X');
}

#[test]
fn bands_are_monotonic_and_complete() {
    let mut seen = Vec::new();
    let mut last = 0;

    // -80.00 to 84.00 in 0.05 degree steps
    for step in 0..=3280 {
        let lat_deg = -80.0 + f64::from(step) * 0.05;
        let c = letter(lat_deg.min(84.0));
        let idx = LATBAND.find(c).unwrap();

        assert!(idx >= last, "{lat_deg}: {c}");
        last = idx;
        if seen.last() != Some(&c) {
            seen.push(c);
        }
    }

    assert_eq!(seen.into_iter().collect::<String>(), LATBAND);
}

#[test]
fn letter_out_of_range() {
    for lat_deg in [-80.01, 84.01, -90.0, 90.0] {
        let res = zone_letter_for(f64::to_radians(lat_deg));
        assert!(matches!(res, Err(Error::InvalidRange { .. })), "{lat_deg}");
    }
    assert!(zone_letter_for(f64::NAN).is_err());
}

#[test]
fn standard_zones() {
    assert_eq!(number(52.5, -2.9), 30);
    assert_eq!(number(0.0, 0.5), 31);
    assert_eq!(number(0.0, -0.5), 30);
    assert_eq!(number(-33.9, 151.2), 56);
    assert_eq!(number(10.0, -179.99), 1);
    assert_eq!(number(10.0, 179.99), 60);
    assert_eq!(number(-79.9, 100.5), 47);
}

#[test]
fn antimeridian_is_zone_one() {
    assert_eq!(zone_number_for(0.1, std::f64::consts::PI).unwrap(), 1);
}

#[test]
fn norway_exception() {
    assert_eq!(number(60.0, 5.0), 32);
    assert_eq!(number(56.5, 3.5), 32);
    assert_eq!(number(63.9, 11.9), 32);
    // Outside the band the regular strips apply
    assert_eq!(number(55.5, 5.0), 31);
    assert_eq!(number(64.5, 5.0), 31);
    assert_eq!(number(60.0, 2.5), 31);
    assert_eq!(number(60.0, 12.5), 33);
}

#[test]
fn svalbard_exception() {
    assert_eq!(number(75.0, 10.0), 33);
    assert_eq!(number(72.5, 0.5), 31);
    assert_eq!(number(78.0, 8.9), 31);
    assert_eq!(number(78.0, 9.1), 33);
    assert_eq!(number(78.0, 20.9), 33);
    assert_eq!(number(78.0, 21.1), 35);
    assert_eq!(number(78.0, 32.9), 35);
    assert_eq!(number(78.0, 33.1), 37);
    assert_eq!(number(84.0, 41.9), 37);
    // Beyond 42E and west of Greenwich nothing changes
    assert_eq!(number(78.0, 42.1), 38);
    assert_eq!(number(78.0, -0.5), 30);
    assert_eq!(number(71.5, 10.0), 32);
}

#[test]
fn zone_numbers_in_range() {
    for lat_deg in (-80..=84).step_by(4) {
        for lon_deg in -179..=180 {
            let zone = number(f64::from(lat_deg), f64::from(lon_deg) - 0.5);
            assert!((1..=60).contains(&zone), "{lat_deg} {lon_deg}: {zone}");
        }
    }
}

#[test]
fn parse_and_format() {
    let zone: Zone = "U32".parse().unwrap();
    assert_eq!(zone.letter(), 'U');
    assert_eq!(zone.number(), 32);
    assert_eq!(zone.to_string(), "U32");

    assert_eq!("C1".parse::<Zone>().unwrap().to_string(), "C1");
    assert_eq!("x60".parse::<Zone>().unwrap().to_string(), "X60");
    assert_eq!(" M31 ".parse::<Zone>().unwrap().to_string(), "M31");

    let zone = Zone::try_from("H56".to_string()).unwrap();
    assert_eq!(String::from(zone), "H56");
}

#[test]
fn malformed_zones() {
    for s in ["", "U", "32", "U032", "U3a", "U 32", "U100", "I32", "O1", "A1", "Z60", "é32", "U-1"] {
        let res = s.parse::<Zone>();
        assert!(matches!(res, Err(Error::InvalidZone(_))), "{s:?}: {res:?}");
    }

    assert!(matches!("U61".parse::<Zone>(), Err(Error::InvalidZoneNumber(61))));
    // A bare zero is out of range rather than malformed
    assert!(matches!("U0".parse::<Zone>(), Err(Error::InvalidZoneNumber(0))));
    assert!(matches!("U00".parse::<Zone>(), Err(Error::InvalidZone(_))));
    assert!(matches!(Zone::create('U', 0), Err(Error::InvalidZoneNumber(0))));
}

#[test]
fn hemisphere_from_letter() {
    for (i, c) in LATBAND.chars().enumerate() {
        let zone = Zone::create(c, 31).unwrap();
        assert_eq!(zone.is_north(), i >= 10, "{c}");
    }
}

#[test]
fn forward_zone_agrees_with_latitude_sign() {
    for lat_deg in [-79.9, -8.0, -1e-9, -0.0, 0.0, 1e-9, 8.0, 83.9] {
        let zone = Zone::for_latlon(f64::to_radians(lat_deg), 0.1).unwrap();
        assert_eq!(zone.is_north(), lat_deg >= 0.0, "{lat_deg}");
    }
}

#[test]
fn central_meridians() {
    let cm = |s: &str| s.parse::<Zone>().unwrap().central_meridian().to_degrees();

    assert!((cm("N1") + 177.0).abs() < 1e-12);
    assert!((cm("N31") - 3.0).abs() < 1e-12);
    assert!((cm("U30") + 3.0).abs() < 1e-12);
    assert!((cm("N60") - 177.0).abs() < 1e-12);
}
