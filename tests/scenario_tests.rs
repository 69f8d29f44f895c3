//! End-to-end scenarios for the virtual orientation sensor
//!
//! These tests drive the fusion engine through realistic sample sequences
//! and check the externally observable contract: event gating, heading
//! wrapping, staleness, reactivation behavior, and graceful handling of
//! degenerate timestamps.

use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use virtual_orientation::{
    HEADING_UNDEFINED, OrientationFusion, RawSample, SensorKind, SensorStatus,
    tilt_compensated_heading,
};

fn mag(timestamp_ns: u64, x: f32, y: f32, z: f32) -> RawSample {
    RawSample {
        kind: SensorKind::Magnetometer,
        timestamp_ns,
        data: Vector3::new(x, y, z),
        status: SensorStatus::AccuracyHigh,
    }
}

fn accel(timestamp_ns: u64, x: f32, y: f32, z: f32) -> RawSample {
    RawSample {
        kind: SensorKind::Accelerometer,
        timestamp_ns,
        data: Vector3::new(x, y, z),
        status: SensorStatus::AccuracyHigh,
    }
}

/// One magnetometer sample at t=0 is enough for the next accelerometer
/// sample to produce an event, even though the timestamp itself is zero.
#[test]
fn test_single_mag_sample_enables_emission() {
    let mut fusion = OrientationFusion::new();

    assert!(fusion.process_sample(&mag(0, 1.0, 0.0, 0.0)).is_none());

    let event = fusion
        .process_sample(&accel(0, 0.0, 0.0, 1.0))
        .expect("event must be emitted once a magnetometer sample was seen");

    // Field along +x with level attitude reads 270°
    assert!((event.heading - 270.0).abs() < 1e-3);
    assert_eq!(event.pitch, 0.0);
    assert_eq!(event.roll, -180.0);
    assert_eq!(event.timestamp_ns, 0);
}

/// The emitted heading reflects the low-pass filtered field after the
/// second magnetometer sample, not the first raw reading.
#[test]
fn test_heading_tracks_filtered_field() {
    let mut fusion = OrientationFusion::new();

    fusion.process_sample(&mag(0, 1.0, 0.0, 0.0));
    fusion.process_sample(&mag(100_000_000, 0.0, 1.0, 0.0));

    let event = fusion
        .process_sample(&accel(100_000_000, 0.0, 0.0, 9.8))
        .expect("magnetic fix exists");

    // Reproduce the adaptive filter step for a 0.1 s period
    let coefficient = 1.0 - (-core::f32::consts::TAU * 1.5 * 0.1_f32).exp();
    let filtered = Vector3::new(1.0 - coefficient, coefficient, 0.0);
    let expected = tilt_compensated_heading(filtered, 0.0, 0.0);

    assert!(
        (event.heading - expected).abs() < 1e-4,
        "heading {} does not match filtered field heading {}",
        event.heading,
        expected
    );
    // And it must differ from the heading of the first raw sample (270°)
    assert!((event.heading - 270.0).abs() > 10.0);
}

/// Deactivating and reactivating mid-stream re-triggers the initialization
/// path: the first sample of each kind passes through unfiltered.
#[test]
fn test_reactivation_reinitializes_both_banks() {
    let mut fusion = OrientationFusion::new();

    fusion.process_sample(&mag(0, 10.0, 0.0, 0.0));
    fusion.process_sample(&mag(100_000_000, 0.0, 10.0, 0.0));
    fusion.process_sample(&accel(100_000_000, 0.0, 0.0, 9.8));
    fusion.process_sample(&accel(120_000_000, 1.0, 1.0, 9.0));

    fusion.reset();
    assert!(!fusion.has_magnetic_fix());
    assert_eq!(fusion.heading(), HEADING_UNDEFINED);

    // First post-reactivation magnetometer sample equals the raw input
    fusion.process_sample(&mag(200_000_000, 3.0, 4.0, 5.0));
    assert_eq!(fusion.filtered_mag(), Vector3::new(3.0, 4.0, 5.0));

    // Same for the accelerometer bank, observable through pitch/roll
    let raw = Vector3::new(0.0, 2.0, 9.5);
    let event = fusion
        .process_sample(&accel(210_000_000, raw.x, raw.y, raw.z))
        .expect("magnetic fix re-established");
    assert_eq!(event.pitch, virtual_orientation::pitch_degrees(raw));
    assert_eq!(event.roll, virtual_orientation::roll_degrees(raw));
}

/// Accelerometer-only streams never produce output.
#[test]
fn test_accelerometer_only_stream_emits_nothing() {
    let mut fusion = OrientationFusion::new();

    for i in 0..100u64 {
        let sample = accel(i * 20_000_000, 0.01 * i as f32, -0.2, 9.8);
        assert!(fusion.process_sample(&sample).is_none());
    }
    assert_eq!(fusion.heading(), HEADING_UNDEFINED);
}

/// Heading stays within [0, 360) for fields swept around the full circle,
/// including tilted attitudes.
#[test]
fn test_heading_wrap_invariant() {
    for angle_deg in (0..360).step_by(10) {
        let angle = (angle_deg as f32).to_radians();

        let mut fusion = OrientationFusion::new();
        fusion.process_sample(&accel(0, 1.5, -2.0, 9.3));
        fusion.process_sample(&mag(
            10_000_000,
            30.0 * angle.cos(),
            30.0 * angle.sin(),
            -20.0,
        ));

        let event = fusion
            .process_sample(&accel(20_000_000, 1.5, -2.0, 9.3))
            .expect("magnetic fix exists");
        assert!(
            (0.0..360.0).contains(&event.heading),
            "heading {} out of range at field angle {}°",
            event.heading,
            angle_deg
        );
    }
}

/// Fields almost exactly along +y land at the 0°/360° wrap boundary, where
/// adding a full turn to a half-ULP negative angle rounds to exactly 2π.
/// The emitted heading must still stay strictly below 360.
#[test]
fn test_heading_wrap_boundary() {
    for forward in [1e-5_f32, -1e-5] {
        let mut fusion = OrientationFusion::new();

        fusion.process_sample(&mag(0, forward, 60.0, 0.0));
        let event = fusion
            .process_sample(&accel(10_000_000, 0.0, 0.0, 9.81))
            .expect("magnetic fix exists");

        assert!(
            (0.0..360.0).contains(&event.heading),
            "heading {} out of range for forward component {}",
            event.heading,
            forward
        );
    }
}

/// Identical or decreasing timestamps must not corrupt the filter state;
/// the output stays finite and between the recent input extremes.
#[test]
fn test_monotonic_period_guard() {
    let mut fusion = OrientationFusion::new();

    fusion.process_sample(&mag(100_000_000, 40.0, -10.0, 25.0));
    fusion.process_sample(&mag(100_000_000, 42.0, -12.0, 24.0)); // duplicate
    fusion.process_sample(&mag(80_000_000, 41.0, -11.0, 26.0)); // out of order

    let filtered = fusion.filtered_mag();
    for axis in 0..3 {
        assert!(filtered[axis].is_finite());
    }
    assert!((40.0..=42.0).contains(&filtered.x));
    assert!((-12.0..=-10.0).contains(&filtered.y));
    assert!((24.0..=26.0).contains(&filtered.z));

    let event = fusion
        .process_sample(&accel(100_000_000, 0.0, 0.0, 9.8))
        .expect("magnetic fix exists");
    assert!((0.0..360.0).contains(&event.heading));
}

/// Randomized stream: every emitted event is finite and bounded no matter
/// how the samples jitter, repeat, or degenerate.
#[test]
fn test_randomized_stream_stays_bounded() {
    let mut rng = Pcg64::seed_from_u64(7);
    let mut fusion = OrientationFusion::new();

    let mut timestamp: u64 = 0;
    let mut events = 0;

    for i in 0..2000 {
        // Mostly advancing timestamps with occasional duplicates
        if rng.random_range(0..10) > 0 {
            timestamp += rng.random_range(1_000_000..30_000_000);
        }

        let sample = if i % 3 == 0 {
            mag(
                timestamp,
                rng.random_range(-60.0..60.0),
                rng.random_range(-60.0..60.0),
                rng.random_range(-60.0..60.0),
            )
        } else {
            accel(
                timestamp,
                rng.random_range(-20.0..20.0),
                rng.random_range(-20.0..20.0),
                rng.random_range(-20.0..20.0),
            )
        };

        if let Some(event) = fusion.process_sample(&sample) {
            events += 1;
            assert!(event.heading.is_finite());
            assert!((0.0..360.0).contains(&event.heading));
            assert!((-180.0..=180.0).contains(&event.pitch));
            assert!((-180.0..=180.0).contains(&event.roll));
        }
    }

    assert!(events > 1000, "expected steady emission, got {}", events);
}
