//! Row Breaker - A Breakout-style arcade game with sliding block rows
//!
//! Core modules:
//! - `sim`: Game loop state machine, row layout, block field, collision reactors
//! - `highscores`: Bounded, sorted, persisted leaderboard
//! - `persistence`: Named record stores (file, memory, LocalStorage)
//! - `platform`: Engine collaborator traits and a headless engine
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use highscores::{RankingEntry, RankingStore};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Countdown before play starts (seconds)
    pub const COUNTDOWN_SECS: f32 = 3.0;
    /// Seconds between row spawns while playing
    pub const SPAWN_INTERVAL_SECS: f32 = 10.0;

    /// Row layout defaults
    pub const BLOCKS_PER_ROW_DEFAULT: u32 = 15;
    pub const MIN_BLOCKS_PER_ROW: u32 = 5;
    pub const MAX_BLOCKS_PER_ROW: u32 = 15;
    pub const BLOCK_SPACING_X: f32 = 1.1;
    pub const ROW_START: [f32; 3] = [-7.8, 0.0, 4.0];

    /// Blocks slide toward the player along -Z (units/s)
    pub const BLOCK_SLIDE_SPEED: f32 = 0.1;
    /// A block whose Z drops below this ends the run
    pub const BOUNDARY_Z: f32 = -4.5;

    /// Ball speed is held constant while playing
    pub const BALL_SPEED: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_MOVE_SPEED: f32 = 50.0;
    pub const PADDLE_X_LIMIT: f32 = 12.0;
    pub const PADDLE_HALF_WIDTH: f32 = 1.5;
}
