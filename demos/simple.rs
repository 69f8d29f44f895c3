//! Minimal virtual orientation sensor demonstration
//!
//! Feeds a synthetic rotating magnetic field and a level accelerometer into
//! the fusion engine and prints the fused orientation per sample pair.
//!
//! Run with: `cargo run --example simple`

use nalgebra::Vector3;
use virtual_orientation::{OrientationFusion, RawSample, SensorKind, SensorStatus};

const SAMPLE_PERIOD_NS: u64 = 20_000_000; // 50 Hz

fn main() {
    let mut fusion = OrientationFusion::new();

    for i in 0..20u64 {
        let timestamp_ns = i * SAMPLE_PERIOD_NS;
        let turn = i as f32 * 0.05;

        // replace these with actual sensor data
        let mag = RawSample {
            kind: SensorKind::Magnetometer,
            timestamp_ns,
            data: Vector3::new(22.0 * turn.cos(), -22.0 * turn.sin(), -41.0),
            status: SensorStatus::AccuracyHigh,
        };
        let accel = RawSample {
            kind: SensorKind::Accelerometer,
            timestamp_ns,
            data: Vector3::new(0.0, 0.0, 9.81),
            status: SensorStatus::AccuracyHigh,
        };

        fusion.process_sample(&mag);
        if let Some(event) = fusion.process_sample(&accel) {
            println!(
                "t={:>4} ms  Heading: {:6.1}°  Pitch: {:6.1}°  Roll: {:6.1}°",
                timestamp_ns / 1_000_000,
                event.heading,
                event.pitch,
                event.roll
            );
        }
    }
}
