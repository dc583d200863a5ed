use map_3d::{ecef2geodetic, geodetic2ecef};
use rstest::*;

use crate::{
    constants::{EARTH_SEMI_MAJOR_AXIS_WGS84_M, EARTH_SEMI_MINOR_AXIS_WGS84_M},
    prelude::{
        ecef_to_geodetic, geodetic_to_ecef, Ellipsoid, GeodeticPosition, Position, Vector3,
    },
};

#[rstest]
#[case(0.88779580846, 0.08226562731, 114.562)]
#[case(0.0, 0.0, 0.0)]
#[case(0.0, 3.0, 1500.0)]
#[case(-0.6, -1.2, -50.0)]
#[case(1.4, 2.5, 20_000.0)]
#[case(-1.5, 0.3, 8848.0)]
fn geodetic_to_ecef_conversion(#[case] lat_rad: f64, #[case] lon_rad: f64, #[case] h_m: f64) {
    let geodetic = GeodeticPosition::new(lat_rad, lon_rad, h_m);
    let ecef = geodetic_to_ecef(&geodetic, &Ellipsoid::WGS84);

    let (x, y, z) = geodetic2ecef(lat_rad, lon_rad, h_m, map_3d::Ellipsoid::WGS84);
    let err = (ecef - Vector3::new(x, y, z)).norm();
    assert!(err < 1.0E-3, "({}, {}, {}): error {} m", lat_rad, lon_rad, h_m, err);

    let (lat, lon, h) = ecef2geodetic(ecef[0], ecef[1], ecef[2], map_3d::Ellipsoid::WGS84);
    assert!((lat - lat_rad).abs() < 1.0E-9);
    assert!((lon - lon_rad).abs() < 1.0E-9);
    assert!((h - h_m).abs() < 1.0E-3);

    let back = ecef_to_geodetic(&ecef, &Ellipsoid::WGS84);
    assert!((back.latitude_rad - lat_rad).abs() < 1.0E-12);
    assert!((back.longitude_rad - lon_rad).abs() < 1.0E-12);
    assert!((back.height_m - h_m).abs() < 1.0E-6);
}

#[test]
fn default_receiver() {
    let position = Position::from_geo(GeodeticPosition::default(), &Ellipsoid::default());
    let ecef = position.ecef();

    // mid latitude antenna, northern hemisphere, close to the Greenwich meridian
    assert!((ecef[0] - 4_019_953.499).abs() < 1.0E-2);
    assert!((ecef[1] - 331_452.049).abs() < 1.0E-2);
    assert!((ecef[2] - 4_924_305.508).abs() < 1.0E-2);

    let radius = ecef.norm();
    assert!(radius > 6.35E6 && radius < 6.40E6);

    let geodetic = Position::from_ecef(ecef, &Ellipsoid::default()).geodetic();
    assert!((geodetic.latitude_rad - 0.88779580846).abs() < 1.0E-12);
    assert!((geodetic.longitude_rad - 0.08226562731).abs() < 1.0E-12);
    assert!((geodetic.height_m - 114.562).abs() < 1.0E-6);
}

#[test]
fn equator() {
    let geodetic = GeodeticPosition::new(0.0, 0.0, 0.0);
    let ecef = geodetic_to_ecef(&geodetic, &Ellipsoid::WGS84);
    assert!((ecef[0] - EARTH_SEMI_MAJOR_AXIS_WGS84_M).abs() < 1.0E-6);
    assert!(ecef[1].abs() < 1.0E-6);
    assert!(ecef[2].abs() < 1.0E-6);

    let geodetic = GeodeticPosition::from_degrees(0.0, 90.0, 100.0);
    let ecef = geodetic_to_ecef(&geodetic, &Ellipsoid::WGS84);
    assert!(ecef[0].abs() < 1.0E-6);
    assert!((ecef[1] - EARTH_SEMI_MAJOR_AXIS_WGS84_M - 100.0).abs() < 1.0E-6);
}

#[rstest]
#[case(1.0)]
#[case(-1.0)]
fn poles(#[case] sign: f64) {
    let geodetic = GeodeticPosition::new(sign * std::f64::consts::FRAC_PI_2, 0.0, 0.0);
    let ecef = geodetic_to_ecef(&geodetic, &Ellipsoid::WGS84);

    // semi minor axis, within the definition accuracy of the ellipsoid
    assert!(ecef[0].abs() < 1.0E-6);
    assert!(ecef[1].abs() < 1.0E-6);
    assert!((ecef[2] - sign * EARTH_SEMI_MINOR_AXIS_WGS84_M).abs() < 1.0E-3);

    let back = ecef_to_geodetic(&Vector3::new(0.0, 0.0, ecef[2]), &Ellipsoid::WGS84);
    assert_eq!(back.latitude_rad, sign * std::f64::consts::FRAC_PI_2);
    assert!(back.height_m.abs() < 1.0E-3);
}

#[test]
fn custom_ellipsoid() {
    // sphere
    let sphere = Ellipsoid::from_axes(6_371_000.0, 6_371_000.0);
    assert_eq!(sphere.eccentricity_squared, 0.0);

    let geodetic = GeodeticPosition::from_degrees(45.0, 45.0, 1000.0);
    let ecef = geodetic_to_ecef(&geodetic, &sphere);
    assert!((ecef.norm() - 6_372_000.0).abs() < 1.0E-6);
}
