//! Canvas 2D presentation
//!
//! A read-only pass over the [`World`]: two paddle rectangles, the ball as a
//! filled circle, and both scores as text. The drawing surface is behind the
//! [`Surface`] trait so the pass stays testable off the browser; on wasm it
//! is a thin wrapper over `CanvasRenderingContext2d`.

use crate::consts::{FPS_FONT_PX, SCORE_FONT_PX};
use crate::sim::World;

/// The external display-surface contract. Origin top-left, y down, pixels.
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill(&mut self, style: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32);
    fn fill_text(&mut self, x: f32, y: f32, text: &str, font_px: f32);
}

/// Draw one frame of the world. Mutates only the surface, never the world.
pub fn render(world: &World, surface: &mut impl Surface) {
    surface.fill_rect(
        world.player.x,
        world.player.y,
        world.player.width,
        world.player.height,
    );
    surface.fill_rect(
        world.opponent.x,
        world.opponent.y,
        world.opponent.width,
        world.opponent.height,
    );
    surface.fill_circle(world.ball.pos.x, world.ball.pos.y, world.ball.radius);

    surface.fill_text(
        world.width / 4.0,
        world.height / 10.0,
        &world.player.score.to_string(),
        SCORE_FONT_PX,
    );
    surface.fill_text(
        world.width / 1.4,
        world.height / 10.0,
        &world.opponent.score.to_string(),
        SCORE_FONT_PX,
    );
}

/// Frames-per-second counter over 1-second windows of the frame timestamp.
/// Diagnostic only; has no effect on the simulation.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start_ms: f64,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    /// Record one frame at the given timestamp (milliseconds)
    pub fn record_frame(&mut self, now_ms: f64) {
        self.frames += 1;
        if now_ms - self.window_start_ms >= 1000.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start_ms = now_ms;
        }
    }

    /// Frame count of the last completed window
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Draw the FPS readout in a translucent box at the top-right corner.
/// Leaves the fill style white for the next frame's draws.
pub fn render_fps_overlay(fps: u32, surface_width: f32, surface: &mut impl Surface) {
    surface.set_fill("rgba(0, 0, 0, 0.5)");
    surface.fill_rect(surface_width - 75.0, 0.0, 100.0, 40.0);
    surface.set_fill("white");
    surface.fill_text(surface_width - 65.0, 30.0, &fps.to_string(), FPS_FONT_PX);
}

/// `Surface` over a browser 2D canvas context
#[cfg(target_arch = "wasm32")]
pub struct CanvasSurface {
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(target_arch = "wasm32")]
impl CanvasSurface {
    pub fn new(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

#[cfg(target_arch = "wasm32")]
impl Surface for CanvasSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn set_fill(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str, font_px: f32) {
        self.ctx.set_font(&format!("{font_px}px Arial"));
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
