#![no_std]

//! Virtual orientation sensor - synthesizes heading, pitch and roll by
//! fusing asynchronous accelerometer and magnetometer sample streams.
//!
//! Orientation is not a directly measurable quantity on most hardware; it
//! has to be reconstructed from two orthogonal raw sensors whose sampling
//! periods vary at runtime. This crate filters each stream through a
//! time-adaptive low-pass filter, extracts pitch and roll from the filtered
//! acceleration, computes a tilt-compensated magnetic heading, and emits a
//! fused orientation event per accelerometer sample once a magnetic fix
//! exists.
//!
//! # Features
//!
//! - Per-axis exponential smoothing with a decay coefficient recomputed from
//!   the measured inter-sample period
//! - Tilt-compensated heading wrapped to [0, 360)
//! - Event gating: orientation is emitted only on accelerometer samples and
//!   only after the first magnetometer sample of an activation cycle
//! - Graceful degradation for degenerate input (zero vectors, duplicate or
//!   out-of-order timestamps) - outputs are always finite and bounded
//! - Thin adapter exposing the engine as a sensor-like entity (describe,
//!   activate, delay control) over an external sensor hub
//! - `#![no_std]` compatible for embedded pipelines
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use virtual_orientation::{OrientationFusion, RawSample, SensorKind, SensorStatus};
//!
//! let mut fusion = OrientationFusion::new();
//!
//! // Magnetometer sample (µT); updates the heading, never emits
//! let mag = RawSample {
//!     kind: SensorKind::Magnetometer,
//!     timestamp_ns: 0,
//!     data: Vector3::new(22.0, 5.0, -41.0),
//!     status: SensorStatus::AccuracyHigh,
//! };
//! assert!(fusion.process_sample(&mag).is_none());
//!
//! // Accelerometer sample (m/s²) completes the first orientation event
//! let accel = RawSample {
//!     kind: SensorKind::Accelerometer,
//!     timestamp_ns: 10_000_000,
//!     data: Vector3::new(0.0, 0.0, 9.81),
//!     status: SensorStatus::AccuracyHigh,
//! };
//! let event = fusion.process_sample(&accel).expect("magnetic fix exists");
//!
//! assert!((0.0..360.0).contains(&event.heading));
//! println!("heading: {:.1}°, pitch: {:.1}°, roll: {:.1}°",
//!     event.heading, event.pitch, event.roll);
//! ```

pub mod adapter;
pub mod attitude;
pub mod compass;
mod engine;
pub mod filter;
mod math;
mod types;

// Re-export all public types and functions
pub use adapter::{HubError, SensorHub, VirtualOrientationSensor};
pub use attitude::{pitch_degrees, roll_degrees};
pub use compass::tilt_compensated_heading;
pub use engine::{HEADING_UNDEFINED, OrientationFusion};
pub use filter::{AdaptiveLowPass, AxisFilter, FilterBank};
pub use math::{DEG_TO_RAD, RAD_TO_DEG};
pub use types::*;
