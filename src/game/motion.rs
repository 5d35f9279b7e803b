// Paddle mover: walks the AI paddle toward a decided target at limited speed
//
// The decision engine only returns a target. Clients that embed this crate
// (or mirror it) use these helpers to move the paddle frame by frame, which is
// where the difficulty's speed multiplier takes effect.

use super::state::{PaddleState, Vector2};

/// Base AI paddle speed in table units per second, before the difficulty multiplier
pub const DEFAULT_PADDLE_SPEED: f64 = 600.0;

/// Largest distance the paddle may cover on each axis this frame
pub fn max_step(paddle_speed: f64, speed_multiplier: f64, dt: f64) -> f64 {
    (paddle_speed * speed_multiplier * dt).max(0.0)
}

/// Move `current` toward `target`, each axis limited to `max_move`.
///
/// Axes are limited independently, so a diagonal move can cover up to
/// `max_move * sqrt(2)`.
pub fn step_toward(current: Vector2, target: Vector2, max_move: f64) -> Vector2 {
    let dx = target.x - current.x;
    let dy = target.y - current.y;

    Vector2::new(
        current.x + dx.signum() * dx.abs().min(max_move),
        current.y + dy.signum() * dy.abs().min(max_move),
    )
}

/// Keep a paddle on the table and inside the AI half (`y < table_height / 2`)
pub fn clamp_to_ai_half(paddle: &mut PaddleState, table_width: f64, table_height: f64) {
    let r = paddle.radius;
    paddle.x = paddle.x.min(table_width - r).max(r);
    paddle.y = paddle.y.min(table_height / 2.0 - r).max(r);
}

/// Advance the AI paddle one frame toward `target`
pub fn advance_paddle(
    paddle: &mut PaddleState,
    target: Vector2,
    paddle_speed: f64,
    speed_multiplier: f64,
    dt: f64,
    table_width: f64,
    table_height: f64,
) {
    let next = step_toward(
        paddle.position(),
        target,
        max_step(paddle_speed, speed_multiplier, dt),
    );
    paddle.x = next.x;
    paddle.y = next.y;
    clamp_to_ai_half(paddle, table_width, table_height);
}
