//! Game state and core simulation types
//!
//! The `World` is the sole owner of the ball and both paddles. No module-level
//! state anywhere; everything the simulation touches lives here and is passed
//! explicitly.

use glam::Vec2;

use crate::consts::*;

/// Which side a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleId {
    /// Human-controlled, left edge
    Player,
    /// Scripted, right edge
    Opponent,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Target speed magnitude. Grows by [`BALL_SPEED_INCREMENT`] on every
    /// paddle hit; `vel` is recomputed from it at each collision.
    pub speed: f32,
}

impl Ball {
    /// Ball at surface center, serving diagonally down-right
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            pos: Vec2::new(surface_width / 2.0, surface_height / 2.0),
            vel: Vec2::splat(BALL_BASE_SPEED),
            radius: BALL_RADIUS,
            speed: BALL_BASE_SPEED,
        }
    }

    /// Re-center the ball after a point and serve it horizontally toward
    /// whichever side did not just score (opposite of the pre-reset heading).
    pub fn reset(&mut self, surface_width: f32, surface_height: f32) {
        self.pos = Vec2::new(surface_width / 2.0, surface_height / 2.0);
        self.speed = BALL_BASE_SPEED;
        let dir = if self.vel.x > 0.0 { -1.0 } else { 1.0 };
        self.vel = Vec2::new(dir * self.speed, 0.0);
    }
}

/// A paddle. `x` is fixed at construction; only `y` ever moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    /// Top-left corner
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Movement speed cap, pixels per second
    pub speed: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle at the given x, vertically centered on the surface
    pub fn new(x: f32, surface_height: f32) -> Self {
        Self {
            x,
            y: surface_height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_MAX_SPEED,
            score: 0,
        }
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully inside the surface vertically
    pub fn clamp_to_surface(&mut self, surface_height: f32) {
        self.y = self.y.clamp(0.0, surface_height - self.height);
    }
}

/// Pressed-state of the direction keys, captured once per tick.
/// No history is retained; each tick gets a fresh snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
}

/// Complete game state for one match
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Surface size, queried once at startup and fixed for the session
    pub width: f32,
    pub height: f32,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
}

impl World {
    /// Build the initial world for a surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ball: Ball::new(width, height),
            player: Paddle::new(PADDLE_INSET, height),
            opponent: Paddle::new(width - PADDLE_WIDTH - PADDLE_INSET, height),
        }
    }

    pub fn paddle(&self, id: PaddleId) -> &Paddle {
        match id {
            PaddleId::Player => &self.player,
            PaddleId::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, id: PaddleId) -> &mut Paddle {
        match id {
            PaddleId::Player => &mut self.player,
            PaddleId::Opponent => &mut self.opponent,
        }
    }
}
