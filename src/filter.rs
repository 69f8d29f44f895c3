//! Time-adaptive low-pass filtering for raw sensor streams
//!
//! Sample streams from real hardware arrive with jittering inter-sample
//! periods, so a fixed smoothing coefficient would over- or under-filter
//! depending on the instantaneous rate. The filters here recompute their
//! decay coefficient from the measured sample period before every update.

use nalgebra::Vector3;

/// Shared time base for a bank of axis filters.
///
/// Holds the corner frequency and the decay coefficient derived from the
/// most recent valid sampling period. The three axis filters of one sensor
/// share a single time base, the same way the three components of a sample
/// share one clock.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveLowPass {
    corner_frequency_hz: f32,
    coefficient: f32,
}

impl AdaptiveLowPass {
    /// Create a time base with the given corner frequency.
    ///
    /// The coefficient starts at 1.0 (pass-through), so an update issued
    /// before the first valid sampling period still produces finite output.
    pub fn new(corner_frequency_hz: f32) -> Self {
        Self {
            corner_frequency_hz,
            coefficient: 1.0,
        }
    }

    /// Recompute the decay coefficient for a new inter-sample period.
    ///
    /// `coefficient = 1 - exp(-2π · fc · Δt)`, which lands in (0, 1] for any
    /// positive period. Degenerate periods (zero, negative, or non-finite,
    /// as produced by duplicate or out-of-order timestamps) leave the
    /// previous coefficient in place so the filter output stays finite.
    pub fn set_sampling_period(&mut self, delta_seconds: f32) {
        if delta_seconds > 0.0 && delta_seconds.is_finite() {
            self.coefficient =
                1.0 - (-core::f32::consts::TAU * self.corner_frequency_hz * delta_seconds).exp();
        }
    }

    /// Current decay coefficient.
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    /// Corner frequency this time base was created with.
    pub fn corner_frequency(&self) -> f32 {
        self.corner_frequency_hz
    }
}

/// Exponential smoothing state for a single axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisFilter {
    last_output: f32,
    initialized: bool,
}

impl AxisFilter {
    /// Seed the filter with the first raw value of an activation cycle.
    ///
    /// Returns the raw value unchanged. Called exactly once per activation;
    /// every later sample goes through [`AxisFilter::update`].
    pub fn init(&mut self, raw: f32) -> f32 {
        self.last_output = raw;
        self.initialized = true;
        raw
    }

    /// Apply one adaptive smoothing step using the shared time base.
    pub fn update(&mut self, low_pass: &AdaptiveLowPass, raw: f32) -> f32 {
        self.last_output += low_pass.coefficient() * (raw - self.last_output);
        self.last_output
    }

    /// Return to the uninitialized state.
    pub fn reset(&mut self) {
        self.last_output = 0.0;
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn output(&self) -> f32 {
        self.last_output
    }
}

/// Three axis filters sharing one adaptive time base.
#[derive(Debug, Clone, Copy)]
pub struct FilterBank {
    low_pass: AdaptiveLowPass,
    axes: [AxisFilter; 3],
}

impl FilterBank {
    pub fn new(corner_frequency_hz: f32) -> Self {
        Self {
            low_pass: AdaptiveLowPass::new(corner_frequency_hz),
            axes: [AxisFilter::default(); 3],
        }
    }

    /// Seed all three axes from the first raw vector of an activation cycle.
    ///
    /// Returns the raw vector unchanged.
    pub fn initialize(&mut self, raw: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            self.axes[0].init(raw.x),
            self.axes[1].init(raw.y),
            self.axes[2].init(raw.z),
        )
    }

    /// Recompute the shared decay coefficient for a new inter-sample period.
    pub fn set_sampling_period(&mut self, delta_seconds: f32) {
        self.low_pass.set_sampling_period(delta_seconds);
    }

    /// Apply one adaptive smoothing step to every axis.
    pub fn update(&mut self, raw: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            self.axes[0].update(&self.low_pass, raw.x),
            self.axes[1].update(&self.low_pass, raw.y),
            self.axes[2].update(&self.low_pass, raw.z),
        )
    }

    /// Return every axis to the uninitialized state, keeping the corner
    /// frequency and discarding the learned coefficient.
    pub fn reset(&mut self) {
        for axis in &mut self.axes {
            axis.reset();
        }
        self.low_pass = AdaptiveLowPass::new(self.low_pass.corner_frequency());
    }

    /// True once all axes have been seeded for the current activation cycle.
    pub fn is_initialized(&self) -> bool {
        self.axes.iter().all(AxisFilter::is_initialized)
    }

    /// Most recent filtered vector.
    pub fn output(&self) -> Vector3<f32> {
        Vector3::new(
            self.axes[0].output(),
            self.axes[1].output(),
            self.axes[2].output(),
        )
    }

    /// Current shared decay coefficient.
    pub fn coefficient(&self) -> f32 {
        self.low_pass.coefficient()
    }
}
