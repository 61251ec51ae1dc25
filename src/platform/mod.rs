//! Platform abstraction layer
//!
//! The simulation never talks to an engine directly. Everything it needs from
//! the outside world goes through these narrow traits:
//! - `Spawner`: create/tint/destroy block entities
//! - `Motion`: ball velocity, entity placement, paddle placement
//! - `GameUi`: countdown, game-over panel, leaderboard
//! - `SoundCues`: one-shot sound effects
//! - `SceneControl`: scene reload and quit
//!
//! Storage lives in [`crate::persistence`]. `headless` provides in-process
//! implementations used by the native binary and the tests.

pub mod headless;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::highscores::RankingEntry;
use crate::persistence::RecordStore;

/// Opaque id of an engine entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityHandle(pub u32);

/// Name of a spawnable entity template (prefab)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityTemplate(pub String);

/// Linear RGBA color
pub type Rgba = [f32; 4];

/// Entity creation and removal
pub trait Spawner {
    fn instantiate(&mut self, template: &EntityTemplate, position: Vec3) -> EntityHandle;
    /// Set an entity's display color
    fn tint(&mut self, entity: EntityHandle, color: Rgba);
    fn destroy(&mut self, entity: EntityHandle);
}

/// Physics-side state the core reads and overrides
pub trait Motion {
    fn ball_velocity(&self) -> Vec3;
    fn set_ball_velocity(&mut self, velocity: Vec3);
    /// Serve the ball (defaults to a plain velocity override)
    fn launch_ball(&mut self, velocity: Vec3) {
        self.set_ball_velocity(velocity);
    }
    fn set_block_position(&mut self, entity: EntityHandle, position: Vec3);
    fn set_paddle_x(&mut self, x: f32);
}

/// The engine's world: spawning plus motion
pub trait World: Spawner + Motion {}

impl<T: Spawner + Motion + ?Sized> World for T {}

/// HUD and panels
pub trait GameUi {
    fn show_countdown(&mut self, value: u32);
    fn hide_countdown(&mut self);
    fn show_game_over(&mut self, score: u32);
    fn hide_panel(&mut self);
    fn show_rankings(&mut self, rankings: &[RankingEntry]);
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball broke a block
    BlockBreak,
    /// Ball hit the paddle
    PaddleHit,
    /// Ball served at play start
    Launch,
    /// Run ended
    GameOver,
}

/// One-shot sound playback; mixing and assets are the engine's business
pub trait SoundCues {
    fn play_one_shot(&mut self, effect: SoundEffect);
}

/// Scene and process control
pub trait SceneControl {
    fn reload_current_scene(&mut self);
    fn quit_application(&mut self);
}

/// Collaborators lent to the game loop for one call.
///
/// `ui` is optional: without it game over takes the degraded path.
/// Without `audio` the game is silent.
pub struct Services<'a> {
    pub world: &'a mut dyn World,
    pub ui: Option<&'a mut dyn GameUi>,
    pub audio: Option<&'a mut dyn SoundCues>,
    pub records: &'a mut dyn RecordStore,
    pub scene: &'a mut dyn SceneControl,
}

impl Services<'_> {
    /// Fire a sound cue if audio is attached
    pub fn play_sound(&mut self, effect: SoundEffect) {
        if let Some(audio) = self.audio.as_mut() {
            audio.play_one_shot(effect);
        }
    }
}
