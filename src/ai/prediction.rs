// Straight-line puck prediction for the intercept phases

use crate::game::PuckState;

/// Where and when the AI plans to meet the puck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    pub y: f64,
    /// Seconds from now; zero when the puck is already past the hit line
    pub time: f64,
}

/// Plan an intercept on the horizontal line `hit_line_y`.
///
/// Returns None when the puck has no vertical velocity, since it will never
/// reach the line. If the puck is already between the line and the AI's
/// baseline, the intercept is immediate at the puck's own Y.
///
/// No wall bounces are modelled: the returned time may be negative when the
/// puck is moving away from the line, and callers clamp the resulting X.
pub fn plan_intercept(puck: &PuckState, hit_line_y: f64) -> Option<Intercept> {
    if puck.vy == 0.0 {
        return None;
    }

    if puck.y < hit_line_y {
        return Some(Intercept { y: puck.y, time: 0.0 });
    }

    Some(Intercept {
        y: hit_line_y,
        time: (hit_line_y - puck.y) / puck.vy,
    })
}

/// Puck X after `seconds` of straight-line travel
pub fn x_after(puck: &PuckState, seconds: f64) -> f64 {
    puck.x + puck.vx * seconds
}

/// `value` limited to `[lo, hi]`; yields `lo` if the range is empty
pub fn clamp_between(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
