//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - State advances only through `step`, given elapsed time and an input
//!   snapshot
//! - No rendering or platform dependencies
//! - No hidden globals; the `World` owns everything

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_paddle, collide_point, deflect};
pub use state::{Ball, InputSnapshot, Paddle, PaddleId, World};
pub use tick::{active_paddle, clamp_frame_delta, step};
