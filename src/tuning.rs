//! Data-driven game balance
//!
//! Loaded once at startup from an optional JSON file. Any field missing from
//! the file keeps its default.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::highscores::{MAX_RANKINGS, RANKING_RECORD};

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Phases ===
    /// Countdown length before each run (seconds)
    pub countdown_secs: f32,
    /// Time between row spawns (seconds)
    pub spawn_interval_secs: f32,

    // === Rows ===
    /// Block count for non-random rows (also anchors the row center)
    pub blocks_per_row_default: u32,
    pub min_blocks_per_row: u32,
    pub max_blocks_per_row: u32,
    /// Horizontal distance between neighbouring blocks
    pub block_spacing_x: f32,
    /// Left edge of a default-sized row
    pub row_start: Vec3,
    /// Entity template the spawner instantiates for blocks
    pub block_template: Option<String>,

    // === Blocks ===
    pub block_slide_speed: f32,
    pub boundary_z: f32,

    // === Ball / paddle ===
    pub ball_speed: f32,
    pub paddle_move_speed: f32,
    pub paddle_x_limit: f32,
    pub paddle_half_width: f32,

    // === Leaderboard ===
    pub max_rankings: usize,
    pub ranking_record: String,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            countdown_secs: COUNTDOWN_SECS,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,

            blocks_per_row_default: BLOCKS_PER_ROW_DEFAULT,
            min_blocks_per_row: MIN_BLOCKS_PER_ROW,
            max_blocks_per_row: MAX_BLOCKS_PER_ROW,
            block_spacing_x: BLOCK_SPACING_X,
            row_start: Vec3::from_array(ROW_START),
            block_template: Some("Block".to_string()),

            block_slide_speed: BLOCK_SLIDE_SPEED,
            boundary_z: BOUNDARY_Z,

            ball_speed: BALL_SPEED,
            paddle_move_speed: PADDLE_MOVE_SPEED,
            paddle_x_limit: PADDLE_X_LIMIT,
            paddle_half_width: PADDLE_HALF_WIDTH,

            max_rankings: MAX_RANKINGS,
            ranking_record: RANKING_RECORD.to_string(),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate();
        Ok(tuning)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values that would break the loop
    pub fn validate(&mut self) {
        let defaults = Self::default();

        if self.min_blocks_per_row == 0 {
            log::warn!("min_blocks_per_row must be at least 1");
            self.min_blocks_per_row = 1;
        }
        if self.min_blocks_per_row > self.max_blocks_per_row {
            log::warn!(
                "min_blocks_per_row {} > max_blocks_per_row {}, using max for both",
                self.min_blocks_per_row,
                self.max_blocks_per_row
            );
            self.min_blocks_per_row = self.max_blocks_per_row;
        }
        if self.blocks_per_row_default == 0 {
            log::warn!("blocks_per_row_default must be at least 1");
            self.blocks_per_row_default = defaults.blocks_per_row_default;
        }
        if !(self.spawn_interval_secs > 0.0) {
            log::warn!("spawn_interval_secs must be positive");
            self.spawn_interval_secs = defaults.spawn_interval_secs;
        }
        if !(self.countdown_secs >= 0.0) {
            log::warn!("countdown_secs must not be negative");
            self.countdown_secs = 0.0;
        }
        if self.max_rankings == 0 {
            log::warn!("max_rankings must be at least 1");
            self.max_rankings = defaults.max_rankings;
        }
    }
}
