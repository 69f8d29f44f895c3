//! Orientation fusion engine
//!
//! Consumes one raw sample at a time, updates the filter bank for that
//! sensor kind, and decides when a complete orientation reading is ready to
//! emit. Heading is recomputed only on magnetometer samples; pitch and roll
//! only on accelerometer samples; an event is emitted only for an
//! accelerometer sample once at least one magnetometer sample has been seen
//! in the current activation cycle.

use nalgebra::Vector3;

use crate::attitude;
use crate::compass;
use crate::filter::FilterBank;
use crate::types::{FusionSettings, OrientationEvent, RawSample, SensorKind, SensorStatus};

const NS_TO_SECONDS: f64 = 1.0e-9;

/// Heading value reported before the first magnetometer sample of an
/// activation cycle.
pub const HEADING_UNDEFINED: f32 = -1.0;

/// Fusion engine combining one accelerometer and one magnetometer stream.
///
/// The engine is a pure function of its accumulated state plus each new
/// sample: it never blocks, never errors, and performs no synchronization.
/// The caller (normally the sensor hub dispatch loop) serializes calls into
/// [`OrientationFusion::process_sample`].
#[derive(Debug, Clone)]
pub struct OrientationFusion {
    settings: FusionSettings,
    accel_bank: FilterBank,
    mag_bank: FilterBank,
    /// Timestamp of the last accelerometer sample in seconds. `None` until
    /// the first sample of the current activation cycle.
    last_accel_time: Option<f64>,
    /// Timestamp of the last magnetometer sample in seconds.
    last_mag_time: Option<f64>,
    filtered_mag: Vector3<f32>,
    heading: f32,
    pitch: f32,
    roll: f32,
    mag_status: SensorStatus,
}

impl OrientationFusion {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::with_settings(FusionSettings::default())
    }

    /// Create an engine with the given settings.
    pub fn with_settings(settings: FusionSettings) -> Self {
        Self {
            settings,
            accel_bank: FilterBank::new(settings.corner_frequency_hz),
            mag_bank: FilterBank::new(settings.corner_frequency_hz),
            last_accel_time: None,
            last_mag_time: None,
            filtered_mag: Vector3::zeros(),
            heading: HEADING_UNDEFINED,
            pitch: 0.0,
            roll: 0.0,
            mag_status: SensorStatus::Unreliable,
        }
    }

    /// Current engine settings.
    pub fn settings(&self) -> FusionSettings {
        self.settings
    }

    /// Return the engine to the awaiting-first-sample state of a fresh
    /// activation cycle.
    ///
    /// Both filter banks become uninitialized, so the next sample of each
    /// kind re-triggers the initialization path.
    pub fn reset(&mut self) {
        self.accel_bank.reset();
        self.mag_bank.reset();
        self.last_accel_time = None;
        self.last_mag_time = None;
        self.filtered_mag = Vector3::zeros();
        self.heading = HEADING_UNDEFINED;
        self.pitch = 0.0;
        self.roll = 0.0;
        self.mag_status = SensorStatus::Unreliable;
    }

    /// Feed one raw sample through the engine.
    ///
    /// Magnetometer samples update the filtered field and the heading but
    /// never emit. Accelerometer samples update pitch and roll and emit an
    /// [`OrientationEvent`] once a magnetometer sample has been seen since
    /// activation. Samples of any other kind are ignored.
    pub fn process_sample(&mut self, sample: &RawSample) -> Option<OrientationEvent> {
        match sample.kind {
            SensorKind::Magnetometer => {
                self.process_magnetic(sample);
                None
            }
            SensorKind::Accelerometer => self.process_acceleration(sample),
            _ => None,
        }
    }

    /// Most recent tilt-compensated heading in degrees, or
    /// [`HEADING_UNDEFINED`] before the first magnetometer sample.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Most recent pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Most recent roll in degrees.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Most recent filtered magnetic field vector.
    pub fn filtered_mag(&self) -> Vector3<f32> {
        self.filtered_mag
    }

    /// True once a magnetometer sample has been processed in the current
    /// activation cycle.
    pub fn has_magnetic_fix(&self) -> bool {
        self.last_mag_time.is_some()
    }

    fn process_magnetic(&mut self, sample: &RawSample) {
        let now = sample.timestamp_ns as f64 * NS_TO_SECONDS;

        self.filtered_mag = match self.last_mag_time {
            None => self.mag_bank.initialize(sample.data),
            Some(last) => {
                self.mag_bank.set_sampling_period((now - last) as f32);
                self.mag_bank.update(sample.data)
            }
        };
        self.last_mag_time = Some(now);
        self.mag_status = sample.status;

        // Tilt compensation uses the attitude from the previous
        // accelerometer sample; heading then stays stale until the next
        // magnetometer update.
        self.heading = compass::tilt_compensated_heading(self.filtered_mag, self.pitch, self.roll);
    }

    fn process_acceleration(&mut self, sample: &RawSample) -> Option<OrientationEvent> {
        let now = sample.timestamp_ns as f64 * NS_TO_SECONDS;

        let filtered = match self.last_accel_time {
            None => self.accel_bank.initialize(sample.data),
            Some(last) => {
                self.accel_bank.set_sampling_period((now - last) as f32);
                self.accel_bank.update(sample.data)
            }
        };
        self.last_accel_time = Some(now);

        self.pitch = attitude::pitch_degrees(filtered);
        self.roll = attitude::roll_degrees(filtered);

        // Heading is undefined until a magnetometer sample has been seen;
        // the accelerometer sample is consumed without output in that case.
        self.last_mag_time?;

        Some(OrientationEvent {
            heading: self.heading,
            pitch: self.pitch,
            roll: self.roll,
            status: self.mag_status,
            timestamp_ns: sample.timestamp_ns,
        })
    }
}

impl Default for OrientationFusion {
    fn default() -> Self {
        Self::new()
    }
}
