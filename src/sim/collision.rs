//! Circle-vs-rectangle collision test and paddle deflection
//!
//! The overlap test works in three stages: reject by bounding distance,
//! accept when the ball center sits inside the rectangle's extended cross,
//! otherwise do an exact corner check.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::MAX_DEFLECTION;

/// Does the ball overlap the paddle rectangle?
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let dist_x = (ball.pos.x - (paddle.x + paddle.width / 2.0)).abs();
    let dist_y = (ball.pos.y - (paddle.y + paddle.height / 2.0)).abs();

    if dist_x >= paddle.width / 2.0 + ball.radius {
        return false;
    }
    if dist_y >= paddle.height / 2.0 + ball.radius {
        return false;
    }

    if dist_x <= paddle.width / 2.0 {
        return true;
    }
    if dist_y <= paddle.height / 2.0 {
        return true;
    }

    // Corner region: compare squared distance from the nearest corner
    let dx = dist_x - paddle.width / 2.0;
    let dy = dist_y - paddle.height / 2.0;
    dx * dx + dy * dy <= ball.radius * ball.radius
}

/// Where on the paddle did the ball strike, normalized to roughly [-1, 1]
/// (negative = upper half)?
pub fn collide_point(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.pos.y - paddle.center_y()) / (paddle.height / 2.0)
}

/// Velocity after bouncing off a paddle.
///
/// The strike position maps linearly onto a deflection angle of up to 45
/// degrees from horizontal; `toward_left` redirects the ball back toward the
/// side it came from. Uses the ball's current `speed`, so callers that grow
/// the speed must do so after calling this.
pub fn deflect(ball: &Ball, paddle: &Paddle, toward_left: bool) -> Vec2 {
    let angle = MAX_DEFLECTION * collide_point(ball, paddle);
    let dir = if toward_left { -1.0 } else { 1.0 };
    Vec2::new(dir * ball.speed * angle.cos(), ball.speed * angle.sin())
}
