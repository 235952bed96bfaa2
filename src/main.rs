//! Rally Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use rally_pong::platform::{GameKey, Keys};
    use rally_pong::renderer::{CanvasSurface, FpsCounter, Surface, render, render_fps_overlay};
    use rally_pong::sim::{World, clamp_frame_delta, step};

    /// Game instance holding all state
    struct Game {
        world: World,
        surface: CanvasSurface,
        keys: Keys,
        last_time_ms: f64,
        fps: FpsCounter,
        /// Diagnostic overlay, toggled with the `f` key
        show_fps: bool,
    }

    impl Game {
        /// Run one scheduled frame: snapshot input, step, redraw
        fn frame(&mut self, time_ms: f64) {
            let dt = if self.last_time_ms > 0.0 {
                clamp_frame_delta(((time_ms - self.last_time_ms) / 1000.0) as f32)
            } else {
                0.0
            };
            self.last_time_ms = time_ms;
            self.fps.record_frame(time_ms);

            let scores = (self.world.player.score, self.world.opponent.score);
            let input = self.keys.snapshot();

            self.surface.clear(0.0, 0.0, self.world.width, self.world.height);
            step(&mut self.world, dt, input);
            render(&self.world, &mut self.surface);
            if self.show_fps {
                render_fps_overlay(self.fps.fps(), self.world.width, &mut self.surface);
            }

            if (self.world.player.score, self.world.opponent.score) != scores {
                log::info!(
                    "score: player {} - opponent {}",
                    self.world.player.score,
                    self.world.opponent.score
                );
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rally Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Surface size is queried once and fixed for the session
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let ctx: web_sys::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to query 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let mut surface = CanvasSurface::new(ctx);
        surface.set_fill("white");

        let game = Rc::new(RefCell::new(Game {
            world: World::new(width, height),
            surface,
            keys: Keys::default(),
            last_time_ms: 0.0,
            fps: FpsCounter::default(),
            show_fps: false,
        }));

        log::info!("Game initialized on a {width}x{height} surface");

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Rally Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down - direction keys plus the FPS overlay toggle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "f" | "F" => {
                        g.show_fps = !g.show_fps;
                        log::info!("FPS overlay: {}", g.show_fps);
                    }
                    name => {
                        if let Some(key) = GameKey::from_name(name) {
                            g.keys.set_pressed(key, true);
                        }
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = GameKey::from_name(&event.key()) {
                    game.borrow_mut().keys.set_pressed(key, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rally Pong (native) starting...");
    log::info!("The game is browser-only - build for wasm32 and serve the canvas page");

    println!("\nRunning headless simulation smoke test...");
    smoke_test_simulation();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run the simulation headless for ten seconds of game time and check the
/// world stays well-formed.
#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_simulation() {
    use rally_pong::sim::{InputSnapshot, World, step};

    let mut world = World::new(800.0, 600.0);
    for _ in 0..600 {
        step(&mut world, 1.0 / 60.0, InputSnapshot::default());

        assert!(world.player.y >= 0.0 && world.player.y <= 600.0 - world.player.height);
        assert!(world.opponent.y >= 0.0 && world.opponent.y <= 600.0 - world.opponent.height);
        assert!(world.ball.pos.y.is_finite() && world.ball.pos.x.is_finite());
    }
    println!(
        "✓ Simulation smoke test passed (player {} - opponent {})",
        world.player.score, world.opponent.score
    );
}
