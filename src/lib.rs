//! Rally Pong - classic two-paddle Pong on an HTML canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring)
//! - `renderer`: Canvas 2D presentation (read-only over the world)
//! - `platform`: Keyboard input capture and per-tick snapshots

pub mod platform;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Ball radius in pixels
    pub const BALL_RADIUS: f32 = 15.0;
    /// Ball serve speed, and the speed the ball resets to after a point
    pub const BALL_BASE_SPEED: f32 = 500.0;
    /// Speed gained on every paddle hit (the rally accelerates over time)
    pub const BALL_SPEED_INCREMENT: f32 = 10.0;

    /// Paddle dimensions (identical for both paddles)
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Maximum paddle speed, pixels per second
    pub const PADDLE_MAX_SPEED: f32 = 500.0;
    /// Horizontal gap between a paddle and its edge of the surface
    pub const PADDLE_INSET: f32 = 10.0;

    /// Maximum deflection angle off a paddle, radians from horizontal
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4;

    /// Cap on per-frame elapsed seconds (guards against backgrounded tabs)
    pub const MAX_FRAME_DELTA: f32 = 50.0;

    /// Score text size in pixels
    pub const SCORE_FONT_PX: f32 = 50.0;
    /// FPS overlay text size in pixels
    pub const FPS_FONT_PX: f32 = 30.0;
}
