//! Core types for the virtual orientation sensor

use nalgebra::Vector3;

/// Raw sensor stream kinds delivered by the sensor hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    /// Triaxial acceleration in m/s².
    Accelerometer,
    /// Triaxial magnetic field in µT.
    Magnetometer,
    /// Angular rate streams are not consumed by the fusion engine; samples
    /// of this kind are silently ignored.
    Gyroscope,
}

/// Accuracy reported by a raw sensor alongside each sample.
///
/// The fusion engine does not interpret the status; it carries the
/// magnetometer's most recent status into every emitted orientation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SensorStatus {
    /// Readings cannot be trusted (e.g. sensor uncalibrated).
    #[default]
    Unreliable,
    /// Low accuracy, calibration recommended.
    AccuracyLow,
    /// Medium accuracy.
    AccuracyMedium,
    /// Maximum accuracy for this sensor.
    AccuracyHigh,
}

/// One raw sample as delivered by the sensor hub dispatch loop.
///
/// Samples arrive already deduplicated and time-ordered per sensor kind;
/// the fusion engine does not re-sort them, although degenerate timestamps
/// still degrade gracefully (see [`crate::filter::AdaptiveLowPass`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    /// Which raw sensor produced this sample.
    pub kind: SensorKind,
    /// Sample timestamp in nanoseconds.
    pub timestamp_ns: u64,
    /// Triaxial reading in the sensor's native unit.
    pub data: Vector3<f32>,
    /// Accuracy reported by the sensor for this sample.
    pub status: SensorStatus,
}

/// A fused orientation reading.
///
/// Emitted once per accelerometer sample, after the first magnetometer
/// sample of the current activation cycle has been processed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationEvent {
    /// Tilt-compensated magnetic heading in degrees, within [0, 360).
    pub heading: f32,
    /// Pitch in degrees, within [-180, 180], rounded to one decimal.
    pub pitch: f32,
    /// Roll in degrees, within [-180, 180], rounded to one decimal.
    pub roll: f32,
    /// Accuracy of the magnetometer stream the heading derives from.
    pub status: SensorStatus,
    /// Timestamp of the accelerometer sample that triggered the event.
    pub timestamp_ns: u64,
}

/// Fusion engine settings.
///
/// # Example
/// ```
/// use virtual_orientation::{FusionSettings, OrientationFusion};
///
/// let settings = FusionSettings {
///     corner_frequency_hz: 3.0, // less smoothing, faster response
/// };
/// let fusion = OrientationFusion::with_settings(settings);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FusionSettings {
    /// Corner frequency of the adaptive low-pass filters in Hz.
    ///
    /// Controls how aggressively raw samples are smoothed. The decay
    /// coefficient is recomputed from this frequency and the measured
    /// inter-sample period before every filter update, so the effective
    /// smoothing stays consistent across runtime rate changes.
    pub corner_frequency_hz: f32,
}

impl Default for FusionSettings {
    fn default() -> Self {
        Self {
            corner_frequency_hz: 1.5,
        }
    }
}

/// Opaque handle identifying a raw sensor at the hub boundary.
pub type SensorHandle = i32;

/// Static description of one raw sensor enumerated by the hub.
#[derive(Debug, Clone, Copy)]
pub struct SensorDescriptor {
    /// Hub-assigned handle used for activation and delay control.
    pub handle: SensorHandle,
    /// Kind of data this sensor produces.
    pub kind: SensorKind,
    /// Power draw in mA while active.
    pub power_ma: f32,
    /// Minimum supported delay between samples in microseconds.
    pub min_delay_us: u32,
}

/// Static metadata describing the virtual sensor itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorInfo {
    pub name: &'static str,
    pub vendor: &'static str,
    pub version: u32,
    /// Largest value any output channel can take, in degrees.
    pub max_range: f32,
    /// Output resolution in degrees.
    pub resolution: f32,
    /// Combined power draw of the underlying raw sensors in mA.
    pub power_ma: f32,
    /// Minimum supported delay between fused events in microseconds.
    pub min_delay_us: u32,
}
