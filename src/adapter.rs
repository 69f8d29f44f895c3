//! Virtual sensor adapter over the external sensor hub
//!
//! Exposes the fusion engine as a sensor-like entity with static metadata,
//! activation and delay control. All algorithmic work stays in
//! [`OrientationFusion`]; this module only forwards control calls to the two
//! underlying raw-sensor subscriptions and resets fusion state on
//! activation.

use core::fmt;

use crate::engine::OrientationFusion;
use crate::types::{
    FusionSettings, OrientationEvent, RawSample, SensorDescriptor, SensorHandle, SensorInfo,
    SensorKind,
};

/// Status codes returned by the sensor hub for control operations.
///
/// The adapter forwards these verbatim; it adds no failure modes of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubError {
    /// No raw sensor with the requested handle is registered with the hub.
    UnknownHandle,
    /// The underlying device rejected the request.
    DeviceError,
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubError::UnknownHandle => write!(f, "no sensor registered for handle"),
            HubError::DeviceError => write!(f, "sensor device rejected the request"),
        }
    }
}

impl core::error::Error for HubError {}

/// External collaborator that owns raw sensor subscriptions and dispatches
/// samples.
///
/// The hub enumerates the available raw sensors, serializes all calls into
/// the adapter, and consumes the emitted orientation events for downstream
/// delivery.
pub trait SensorHub {
    /// Enable or disable sample delivery for one raw sensor.
    fn activate(&mut self, handle: SensorHandle, enable: bool) -> Result<(), HubError>;

    /// Request a sampling period for one raw sensor.
    fn set_delay(&mut self, handle: SensorHandle, period_ns: u64) -> Result<(), HubError>;
}

/// The virtual orientation sensor: a fusion engine plus the two raw-sensor
/// subscriptions it is derived from.
#[derive(Debug, Clone)]
pub struct VirtualOrientationSensor {
    engine: OrientationFusion,
    accel: SensorDescriptor,
    mag: SensorDescriptor,
}

impl VirtualOrientationSensor {
    /// Build the virtual sensor from the hub's enumerated sensor list.
    ///
    /// Returns `None` unless the list contains at least one accelerometer
    /// and one magnetometer; the first of each kind is used.
    pub fn from_sensors(sensors: &[SensorDescriptor]) -> Option<Self> {
        Self::with_settings(sensors, FusionSettings::default())
    }

    /// Same as [`VirtualOrientationSensor::from_sensors`] with explicit
    /// fusion settings.
    pub fn with_settings(sensors: &[SensorDescriptor], settings: FusionSettings) -> Option<Self> {
        let accel = sensors
            .iter()
            .find(|sensor| sensor.kind == SensorKind::Accelerometer)?;
        let mag = sensors
            .iter()
            .find(|sensor| sensor.kind == SensorKind::Magnetometer)?;

        Some(Self {
            engine: OrientationFusion::with_settings(settings),
            accel: *accel,
            mag: *mag,
        })
    }

    /// Enable or disable both underlying raw-sensor subscriptions.
    ///
    /// Enabling resets the fusion state, so the next sample of each kind
    /// re-triggers the filter initialization path. Hub status codes are
    /// forwarded verbatim; on error the fusion state is left untouched.
    pub fn activate<H: SensorHub>(&mut self, hub: &mut H, enable: bool) -> Result<(), HubError> {
        hub.activate(self.accel.handle, enable)?;
        hub.activate(self.mag.handle, enable)?;
        if enable {
            self.engine.reset();
        }
        Ok(())
    }

    /// Forward a requested sampling period to both underlying subscriptions.
    ///
    /// The filter corner frequency is not affected; the filters adapt to the
    /// actually observed sample periods instead.
    pub fn set_delay<H: SensorHub>(&mut self, hub: &mut H, period_ns: u64) -> Result<(), HubError> {
        hub.set_delay(self.accel.handle, period_ns)?;
        hub.set_delay(self.mag.handle, period_ns)
    }

    /// Static metadata synthesized from the two underlying raw sensors.
    pub fn describe(&self) -> SensorInfo {
        SensorInfo {
            name: "Virtual Orientation Sensor",
            vendor: "Virtual Sensors",
            version: 1,
            max_range: 360.0,
            resolution: 1.0,
            power_ma: self.accel.power_ma + self.mag.power_ma,
            min_delay_us: self.accel.min_delay_us,
        }
    }

    /// Feed one raw sample through the fusion engine.
    pub fn process_sample(&mut self, sample: &RawSample) -> Option<OrientationEvent> {
        self.engine.process_sample(sample)
    }

    /// Access the fusion engine, e.g. for diagnostics.
    pub fn engine(&self) -> &OrientationFusion {
        &self.engine
    }
}
