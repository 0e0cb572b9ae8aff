//! Windowless platform implementations
//!
//! Deterministic stand-ins for the real platform: a clock that advances a
//! fixed step per reading, scripted input, renderers that record or log, and
//! an asset loader that hands out sequential handles.

use std::collections::VecDeque;
use std::time::Duration;

use super::{AssetLoader, Clock, InputSource, Renderer};
use crate::assets::{AssetError, TextureId};
use crate::sim::{Sprite, TickInput};

/// Clock that advances `step_ms` every time it is read
#[derive(Debug, Clone)]
pub struct SteppedClock {
    now_ms: u32,
    step_ms: u32,
    slept: Duration,
}

impl SteppedClock {
    pub fn new(step_ms: u32) -> Self {
        Self::starting_at(0, step_ms)
    }

    pub fn starting_at(now_ms: u32, step_ms: u32) -> Self {
        Self {
            now_ms,
            step_ms,
            slept: Duration::ZERO,
        }
    }

    /// Total time spent in `sleep`
    pub fn slept(&self) -> Duration {
        self.slept
    }
}

impl Clock for SteppedClock {
    fn ticks_ms(&mut self) -> u32 {
        let now = self.now_ms;
        self.now_ms = self.now_ms.wrapping_add(self.step_ms);
        now
    }

    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.now_ms = self.now_ms.wrapping_add(ms);
    }
}

/// Plays back a fixed list of frames, then repeats a fallback
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    fallback: TickInput,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            fallback: TickInput::default(),
        }
    }

    /// Hold `input` for `frames` frames
    pub fn repeat(input: TickInput, frames: usize) -> Self {
        Self::new(std::iter::repeat_n(input, frames))
    }

    /// Send quit once the script runs out
    pub fn then_quit(mut self) -> Self {
        self.fallback.quit = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.frames.pop_front().unwrap_or(self.fallback)
    }
}

/// Hands the controls to the autopilot, quitting after a frame limit
#[derive(Debug, Clone)]
pub struct AutopilotInput {
    frames_left: u64,
}

impl AutopilotInput {
    pub fn new(max_frames: u64) -> Self {
        Self {
            frames_left: max_frames,
        }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self) -> TickInput {
        self.frames_left = self.frames_left.saturating_sub(1);
        TickInput {
            autopilot: true,
            quit: self.frames_left == 0,
            ..Default::default()
        }
    }
}

/// Keeps every presented frame for inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pending: Vec<Sprite>,
    frames: Vec<Vec<Sprite>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> &[Vec<Sprite>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[Sprite]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, sprite: &Sprite) {
        self.pending.push(*sprite);
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

/// Logs frames at trace level instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    sprites_this_frame: usize,
    frames: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, sprite: &Sprite) {
        if sprite.scale.x > 0.0 && sprite.scale.y > 0.0 {
            self.sprites_this_frame += 1;
        }
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!(
            "present frame {} ({} visible sprites)",
            self.frames,
            self.sprites_this_frame
        );
        self.sprites_this_frame = 0;
    }
}

/// Assigns sequential handles without touching the filesystem
#[derive(Debug, Clone)]
pub struct HeadlessAssets {
    next_id: u32,
    loaded: Vec<String>,
    missing: Vec<String>,
}

impl Default for HeadlessAssets {
    fn default() -> Self {
        Self {
            next_id: 1,
            loaded: Vec::new(),
            missing: Vec::new(),
        }
    }
}

impl HeadlessAssets {
    /// Make loading `path` fail
    pub fn missing(mut self, path: &str) -> Self {
        self.missing.push(path.to_string());
        self
    }

    /// Paths loaded so far, in order
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }
}

impl AssetLoader for HeadlessAssets {
    fn load_texture(&mut self, path: &str) -> Result<TextureId, AssetError> {
        if self.missing.iter().any(|m| m == path) {
            log::error!("Unable to load image {path}");
            return Err(AssetError::TextureLoad {
                path: path.to_string(),
                reason: "file not found".to_string(),
            });
        }
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.loaded.push(path.to_string());
        Ok(id)
    }
}
