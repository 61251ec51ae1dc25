//! Block field
//!
//! Owns the live blocks. Blocks slide toward the player along -Z every tick;
//! the field is the authority on which blocks exist, and the only place a
//! block is removed from play.

use glam::Vec3;
use rand::Rng;

use super::layout::RowSpec;
use crate::platform::{EntityHandle, EntityTemplate, Rgba, Spawner};
use crate::tuning::Tuning;

/// A live block
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: EntityHandle,
    pub pos: Vec3,
    pub color: Rgba,
    /// Set when the engine removed the entity behind our back
    pub destroyed: bool,
}

/// Live block collection
#[derive(Debug, Clone)]
pub struct BlockField {
    template: Option<EntityTemplate>,
    slide_speed: f32,
    boundary_z: f32,
    blocks: Vec<Block>,
}

impl BlockField {
    pub fn new(template: Option<EntityTemplate>, slide_speed: f32, boundary_z: f32) -> Self {
        Self {
            template,
            slide_speed,
            boundary_z,
            blocks: Vec::new(),
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            tuning.block_template.clone().map(EntityTemplate),
            tuning.block_slide_speed,
            tuning.boundary_z,
        )
    }

    /// Instantiate one block per row position, each with a random color.
    /// Without a template nothing is spawned (logged, not fatal).
    pub fn spawn<S, R>(&mut self, row: &RowSpec, spawner: &mut S, rng: &mut R) -> usize
    where
        S: Spawner + ?Sized,
        R: Rng,
    {
        let Some(template) = &self.template else {
            log::error!("Block template is not set; row not spawned");
            return 0;
        };

        let before = self.blocks.len();
        for pos in row.positions() {
            let id = spawner.instantiate(template, pos);
            let color = random_color(rng);
            spawner.tint(id, color);
            self.blocks.push(Block {
                id,
                pos,
                color,
                destroyed: false,
            });
        }
        self.blocks.len() - before
    }

    /// Drop destroyed entries, then slide every survivor by `-slide_speed * dt` along Z
    pub fn advance_all(&mut self, dt: f32) {
        self.blocks.retain(|b| !b.destroyed);
        let step = self.slide_speed * dt;
        for block in &mut self.blocks {
            block.pos.z -= step;
        }
    }

    /// The ball broke a block: remove it now and free the entity.
    /// Returns false if the block was not live (already removed).
    pub fn on_block_destroyed<S: Spawner + ?Sized>(
        &mut self,
        id: EntityHandle,
        spawner: &mut S,
    ) -> bool {
        match self.blocks.iter().position(|b| b.id == id && !b.destroyed) {
            Some(i) => {
                self.blocks.remove(i);
                spawner.destroy(id);
                true
            }
            None => {
                log::debug!("Destroyed block {:?} was not live", id);
                false
            }
        }
    }

    /// The engine removed an entity without a ball hit; compacted on the next advance
    pub fn mark_destroyed(&mut self, id: EntityHandle) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.destroyed = true;
                true
            }
            None => false,
        }
    }

    /// First live block past the boundary, if any
    pub fn crossed_boundary(&self) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|b| !b.destroyed && b.pos.z < self.boundary_z)
    }

    /// Destroy every block (restart)
    pub fn clear<S: Spawner + ?Sized>(&mut self, spawner: &mut S) {
        for block in self.blocks.drain(..) {
            if !block.destroyed {
                spawner.destroy(block.id);
            }
        }
    }

    /// Live blocks in spawn order
    pub fn live(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| !b.destroyed)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn random_color<R: Rng>(rng: &mut R) -> Rgba {
    [rng.random(), rng.random(), rng.random(), 1.0]
}
