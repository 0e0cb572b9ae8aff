//! Outer frame loop
//!
//! Owns the world and drives it against the platform: poll input, tick,
//! render, until an outcome or a quit ends the run.

use crate::assets::{AssetError, TextureSet};
use crate::platform::{AssetLoader, Clock, InputSource, Renderer};
use crate::sim::{FrameTimer, GameEvent, Outcome, World, tick};
use crate::tuning::Tuning;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub frames: u64,
    pub fuel_remaining: u32,
    /// The input asked to quit before an outcome
    pub quit: bool,
}

/// A game session
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    tuning: Tuning,
    timer: Option<FrameTimer>,
}

impl Game {
    /// Load the textures and set up the level. Asset failures are fatal.
    pub fn new<L: AssetLoader + ?Sized>(
        tuning: Tuning,
        assets: &mut L,
    ) -> Result<Self, AssetError> {
        let textures = TextureSet::load(assets)?;
        let world = World::new(textures, &tuning);
        log::info!(
            "Level ready: {} terrain slots, pad at slot {}, {} fuel",
            world.all_terrain().len(),
            world.goal_index(),
            world.fuel.level()
        );
        Ok(Self {
            world,
            tuning,
            timer: None,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_running(&self) -> bool {
        self.world.is_running()
    }

    /// Run one full frame: input, simulation, render.
    ///
    /// The clock is read exactly once per frame.
    pub fn frame(
        &mut self,
        clock: &mut impl Clock,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> Vec<GameEvent> {
        let held = input.poll();
        let now = clock.ticks_ms();
        let dt = match self.timer.as_mut() {
            Some(timer) => timer.delta_seconds(now),
            None => {
                self.timer = Some(FrameTimer::new(now));
                0.0
            }
        };

        let events = tick(&mut self.world, &held, dt, &self.tuning);
        self.render(renderer);
        events
    }

    /// Hand every body to the renderer
    pub fn render(&self, renderer: &mut impl Renderer) {
        for sprite in self.world.sprites() {
            renderer.draw(&sprite);
        }
        renderer.present();
    }

    /// Loop until the run ends, then hold the banner on screen
    pub fn run(
        &mut self,
        clock: &mut impl Clock,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> RunSummary {
        if self.timer.is_none() {
            self.timer = Some(FrameTimer::new(clock.ticks_ms()));
        }

        while self.world.is_running() {
            for event in self.frame(clock, input, renderer) {
                if event == GameEvent::FuelExhausted {
                    log::info!("Out of fuel");
                }
            }
        }

        let summary = self.summary();
        if summary.outcome.is_terminal() {
            clock.sleep(self.tuning.end_screen());
        } else {
            log::info!("Quit after {} frames", summary.frames);
        }
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            outcome: self.world.outcome,
            frames: self.world.frame,
            fuel_remaining: self.world.fuel.level(),
            quit: self.world.quit_requested,
        }
    }
}
