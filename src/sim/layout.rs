//! Row layout
//!
//! Computes where the blocks of one row go. Rows are evenly spaced along X
//! and always centered on the midpoint of a default-sized row, so a short
//! random row sits in the middle of the court instead of hugging the left.

use glam::Vec3;
use rand::Rng;

use crate::tuning::Tuning;

/// One row to spawn
#[derive(Debug, Clone, PartialEq)]
pub struct RowSpec {
    /// Number of blocks
    pub count: u32,
    /// X distance between neighbours
    pub spacing: f32,
    /// Position of the first (leftmost) block
    pub start: Vec3,
}

impl RowSpec {
    /// Block positions, left to right
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.count).map(move |i| self.start + Vec3::X * (i as f32 * self.spacing))
    }

    /// Midpoint between the first and last block
    pub fn center_x(&self) -> f32 {
        self.start.x + self.count.saturating_sub(1) as f32 * self.spacing / 2.0
    }
}

/// Row geometry and count bounds
#[derive(Debug, Clone)]
pub struct RowLayout {
    default_count: u32,
    min_count: u32,
    max_count: u32,
    spacing: f32,
    origin: Vec3,
}

impl RowLayout {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            default_count: tuning.blocks_per_row_default,
            min_count: tuning.min_blocks_per_row,
            max_count: tuning.max_blocks_per_row.max(tuning.min_blocks_per_row),
            spacing: tuning.block_spacing_x,
            origin: tuning.row_start,
        }
    }

    /// X every row is centered on (midpoint of a default-sized row)
    pub fn reference_x(&self) -> f32 {
        self.origin.x + self.default_count.saturating_sub(1) as f32 * self.spacing / 2.0
    }

    /// Lay out a row with an explicit block count
    pub fn row_of(&self, count: u32) -> RowSpec {
        let width = count.saturating_sub(1) as f32 * self.spacing;
        let start_x = self.reference_x() - width / 2.0;
        RowSpec {
            count,
            spacing: self.spacing,
            start: Vec3::new(start_x, self.origin.y, self.origin.z),
        }
    }

    /// Default-sized row, or a uniform random count in [min, max]
    pub fn compute_row<R: Rng>(&self, randomize: bool, rng: &mut R) -> RowSpec {
        let count = if randomize {
            rng.random_range(self.min_count..=self.max_count)
        } else {
            self.default_count
        };
        self.row_of(count)
    }
}
