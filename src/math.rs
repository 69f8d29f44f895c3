//! Mathematical constants and helpers shared across the crate

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Round an angle to one decimal place.
///
/// Uses a truncating integer cast: positive values round half-up, negative
/// values are pulled toward zero by the +0.5 offset before truncation.
pub(crate) fn round_to_tenth(value: f32) -> f32 {
    ((value * 10.0 + 0.5) as i32) as f32 / 10.0
}
