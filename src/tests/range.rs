use hifitime::Unit;

use crate::{
    prelude::{
        geometric_range_m, ranges, residuals, Ellipsoid, GeodeticPosition,
        InterpolatedPosition, Position, RangeSample, Vector3,
    },
    tests::sample_epoch,
};

fn interpolated(nth: usize, position_km: Vector3<f64>) -> InterpolatedPosition {
    InterpolatedPosition {
        epoch: sample_epoch(nth),
        position_km,
        offset: 0.0,
        extrapolated: false,
    }
}

#[test]
fn range_units() {
    let rx = Vector3::new(6_378_137.0, 0.0, 0.0);
    let sv = Vector3::new(26_378.137, 0.0, 0.0);
    assert!((geometric_range_m(&sv, &rx) - 20_000_000.0).abs() < 1.0E-6);

    let sv = Vector3::new(6_378.137, 3.0, 4.0);
    assert!((geometric_range_m(&sv, &rx) - 5_000.0).abs() < 1.0E-6);
}

#[test]
fn range_sanity() {
    let receiver = Position::from_geo(GeodeticPosition::default(), &Ellipsoid::WGS84);
    let rx_km = receiver.ecef() / 1.0E3;

    // moving away from the receiver along each axis increases the range
    for axis in 0..3 {
        let mut previous = 0.0;
        for step in 1..10 {
            let mut position_km = rx_km;
            position_km[axis] += 1000.0 * step as f64;
            let range = geometric_range_m(&position_km, &receiver.ecef());
            assert!((range - 1.0E6 * step as f64).abs() < 1.0E-6);
            assert!(range > previous);
            previous = range;
        }
    }
}

#[test]
fn nan_propagation() {
    let receiver = Position::from_geo(GeodeticPosition::default(), &Ellipsoid::WGS84);
    let positions = [
        interpolated(0, Vector3::new(15000.0, -12000.0, 20000.0)),
        interpolated(1, Vector3::new(f64::NAN, -12000.0, 20000.0)),
        interpolated(2, Vector3::new(15002.5, -12005.0, 20001.5)),
    ];

    let samples = ranges(&positions, &receiver);
    assert_eq!(samples.len(), 3);

    // input order is preserved
    for (nth, sample) in samples.iter().enumerate() {
        assert_eq!(sample.epoch, sample_epoch(nth));
    }

    assert!(samples[0].is_valid());
    assert!(samples[1].range_m.is_nan());
    assert!(!samples[1].is_valid());
    assert!(samples[2].is_valid());
}

#[test]
fn extrapolated_ranges() {
    let receiver = Position::from_geo(GeodeticPosition::default(), &Ellipsoid::WGS84);
    let mut position = interpolated(0, Vector3::new(15000.0, -12000.0, 20000.0));
    position.extrapolated = true;

    let samples = ranges(&[position], &receiver);
    assert!(samples[0].range_m.is_finite());
    assert!(samples[0].extrapolated);
    assert!(!samples[0].is_valid());
}

#[test]
fn pseudo_range_residuals() {
    let geometric = (0..5)
        .map(|nth| RangeSample {
            epoch: sample_epoch(nth),
            range_m: 2.0E7 + nth as f64,
            extrapolated: false,
        })
        .collect::<Vec<_>>();

    let mut geometric_with_gap = geometric.clone();
    geometric_with_gap[3].range_m = f64::NAN;

    let pseudo_ranges = vec![
        (sample_epoch(0) - 5.0 * Unit::Minute, 1.0),
        (sample_epoch(1), 2.0E7 + 11.0),
        (sample_epoch(2), 2.0E7 + 2.0),
        (sample_epoch(2) + 1.0 * Unit::Second, 3.0),
        (sample_epoch(3), 2.0E7 + 13.0),
        (sample_epoch(4), f64::NAN),
        (sample_epoch(7), 4.0),
    ];

    let residuals = residuals(&geometric_with_gap, &pseudo_ranges);

    assert_eq!(
        residuals,
        vec![
            (sample_epoch(1), Some(10.0)),
            (sample_epoch(2), Some(0.0)),
            (sample_epoch(3), None),
            (sample_epoch(4), None),
        ]
    );
}
