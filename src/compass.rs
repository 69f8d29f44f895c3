//! Tilt-compensated heading from filtered magnetic field components

use nalgebra::Vector3;

use crate::math::{DEG_TO_RAD, RAD_TO_DEG};

/// Compute the tilt-compensated magnetic heading.
///
/// Rotates the filtered magnetic field components into the horizontal plane
/// using the most recently extracted pitch and roll angles, then takes the
/// heading angle of the horizontal components. The attitude angles may lag
/// the field reading by one accelerometer sample; the compensation uses
/// whatever attitude was last computed.
///
/// # Arguments
/// * `mag` - Filtered magnetic field reading (forward, left, up components)
/// * `pitch_deg` - Most recent pitch angle in degrees
/// * `roll_deg` - Most recent roll angle in degrees
///
/// # Returns
/// Heading angle in degrees, wrapped to [0, 360).
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use virtual_orientation::compass::tilt_compensated_heading;
///
/// let mag = Vector3::new(0.0, 22.0, 0.0);
/// let heading = tilt_compensated_heading(mag, 0.0, 0.0);
/// assert!(heading.abs() < 1e-3);
/// ```
pub fn tilt_compensated_heading(mag: Vector3<f32>, pitch_deg: f32, roll_deg: f32) -> f32 {
    let angle_forward = -roll_deg * DEG_TO_RAD;
    let angle_left = -pitch_deg * DEG_TO_RAD;

    let (sin_forward, cos_forward) = (angle_forward.sin(), angle_forward.cos());
    let (sin_left, cos_left) = (angle_left.sin(), angle_left.cos());

    // Horizontal field components with the tilt backed out
    let horizontal_1 =
        cos_forward * mag.x + sin_forward * sin_left * mag.y + sin_forward * cos_left * mag.z;
    let horizontal_2 = cos_left * mag.y - sin_left * mag.z;

    let mut heading = -horizontal_1.atan2(horizontal_2);
    if heading < 0.0 {
        heading += core::f32::consts::TAU;
    }

    // A tiny negative angle can round back up to a full turn when 2π is
    // added; fold the boundary so the result stays strictly below 360
    let mut heading_deg = heading * RAD_TO_DEG;
    if heading_deg >= 360.0 {
        heading_deg -= 360.0;
    }
    heading_deg
}
