#![cfg(feature = "serde")]

use latlon_utm::{LatLon, Utm, Zone};

#[test]
fn zone_serializes_as_string() {
    let zone: Zone = "U30".parse().unwrap();

    assert_eq!(serde_json::to_string(&zone).unwrap(), "\"U30\"");
    assert_eq!(serde_json::from_str::<Zone>("\"u30\"").unwrap(), zone);
    assert!(serde_json::from_str::<Zone>("\"U61\"").is_err());
}

#[test]
fn utm_json() {
    let utm = LatLon::from_degrees(52.50207395, -2.9096531).unwrap().to_utm().unwrap();
    let json = serde_json::to_string(&utm).unwrap();

    assert!(json.contains("\"zone\":\"U30\""));

    let parsed: Utm = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.zone(), utm.zone());
    assert!((parsed.easting() - utm.easting()).abs() < 1e-6);
    assert!((parsed.northing() - utm.northing()).abs() < 1e-6);

    let aliased: Utm = serde_json::from_str(r#"{"zone":"U30","x":506132.5,"y":5816886.25}"#).unwrap();
    assert_eq!(aliased.easting(), 506_132.5);
}

#[test]
fn latlon_aliases() {
    let coord: LatLon = serde_json::from_str(r#"{"lat":0.5,"lon":-0.25}"#).unwrap();

    assert_eq!(coord.latitude(), 0.5);
    assert_eq!(coord.longitude(), -0.25);
}
