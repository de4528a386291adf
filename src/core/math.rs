//! Angle math in the degree domain.
//!
//! Headings and bearings are `f32` degrees throughout the crate. The wrapped
//! range is (-180, 180], with 0 at the reference direction, positive angles
//! clockwise.

/// Wrap an angle into (-180, 180] degrees.
///
/// # Example
/// ```
/// use disha_cue::core::math::wrap_degrees;
///
/// assert_eq!(wrap_degrees(270.0), -90.0);
/// assert_eq!(wrap_degrees(-180.0), 180.0);
/// assert_eq!(wrap_degrees(540.0), 180.0);
/// ```
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let mut a = angle % 360.0;
    if a <= -180.0 {
        a += 360.0;
    } else if a > 180.0 {
        a -= 360.0;
    }
    a
}

/// Three-valued sign: -1 below zero, 0 at zero, +1 above.
///
/// Exact zero is its own sign, so a heading that lands precisely on a bearing
/// compares unequal to either side. `f32::signum` maps +0.0 to +1.0 and would
/// miss that case.
#[inline]
pub fn sign(x: f32) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Recover a heading in degrees from a forward unit vector.
///
/// `x` is the east component, `y` the north component, matching the
/// convention of camera/avatar forward vectors. North is 0, east +90,
/// west -90, south 180.
///
/// # Example
/// ```
/// use disha_cue::core::math::heading_from_forward;
///
/// assert!((heading_from_forward(0.0, 1.0)).abs() < 1e-6);
/// assert!((heading_from_forward(1.0, 0.0) - 90.0).abs() < 1e-4);
/// ```
#[inline]
pub fn heading_from_forward(x: f32, y: f32) -> f32 {
    x.atan2(y).to_degrees()
}
