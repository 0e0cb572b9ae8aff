//! Platform abstraction layer
//!
//! The simulation reaches the outside world only through these traits:
//! - Time/ticks
//! - Held-key input
//! - Sprite drawing
//! - Texture loading
//!
//! `headless` provides implementations that need no window, used by the demo
//! binary and the tests.

pub mod headless;

use std::time::Duration;

use crate::assets::{AssetError, TextureId};
use crate::sim::{Sprite, TickInput};

/// Monotonic millisecond tick source
pub trait Clock {
    /// Milliseconds since some fixed start; may wrap
    fn ticks_ms(&mut self) -> u32;

    /// Block for `duration` (used to hold the final banner on screen)
    fn sleep(&mut self, duration: Duration);
}

/// Source of per-frame input
pub trait InputSource {
    /// Drain pending events and report the keys held right now
    fn poll(&mut self) -> TickInput;
}

/// Draws sprites; the core never issues draw calls itself
pub trait Renderer {
    fn draw(&mut self, sprite: &Sprite);

    /// Finish the frame
    fn present(&mut self);
}

/// Turns asset paths into texture handles
pub trait AssetLoader {
    fn load_texture(&mut self, path: &str) -> Result<TextureId, AssetError>;
}
