//! Pitch and roll extraction from filtered acceleration components

use nalgebra::Vector3;

use crate::math::{RAD_TO_DEG, round_to_tenth};

/// Extract the pitch angle from a filtered acceleration vector.
///
/// Axis-aligned and zero-length vectors fall into the explicit `y == 0`
/// branch, so the result is always finite. The angle is quadrant-adjusted,
/// rounded to one decimal, and lies within [-180, 180].
pub fn pitch_degrees(accel: Vector3<f32>) -> f32 {
    let (x, y, z) = (accel.x, accel.y, accel.z);

    let mut pitch = if y == 0.0 {
        if z > 0.0 { 90.0 } else { -90.0 }
    } else {
        ((z / y) * (x * x + y * y + z * z) / (y * y + z * z)).atan() * RAD_TO_DEG
    };

    // Quadrant adjustment; both z half-planes share the same y rule
    if y >= 0.0 {
        pitch -= 90.0;
    } else {
        pitch += 90.0;
    }

    round_to_tenth(pitch)
}

/// Extract the roll angle from a filtered acceleration vector.
///
/// Mirrors [`pitch_degrees`] with x taking the role of y, but with its own
/// quadrant table and a final sign flip. The angle is rounded to one decimal
/// and lies within [-180, 180].
pub fn roll_degrees(accel: Vector3<f32>) -> f32 {
    let (x, y, z) = (accel.x, accel.y, accel.z);

    let roll = if x == 0.0 {
        if z > 0.0 { 90.0 } else { -90.0 }
    } else {
        ((z / x) * (x * x + y * y + z * z) / (x * x + z * z)).atan() * RAD_TO_DEG
    };

    let adjusted = if z <= 0.0 {
        if x > 0.0 { -roll - 90.0 } else { 90.0 - roll }
    } else if x <= 0.0 {
        90.0 + roll
    } else {
        roll - 90.0
    };

    -round_to_tenth(adjusted)
}
