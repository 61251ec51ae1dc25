//! Headless engine
//!
//! Minimal in-process stand-ins for the engine collaborators. The world does
//! just enough ball kinematics (walls, paddle, blocks, loss zone) to play a
//! run without a renderer; the UI, audio and scene record what they were asked
//! to do.

use std::collections::BTreeMap;

use glam::Vec3;

use super::{
    EntityHandle, EntityTemplate, GameUi, Motion, Rgba, SceneControl, Services, SoundCues,
    SoundEffect, Spawner,
};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscores::{RankingEntry, format_game_time};
use crate::persistence::RecordStore;
use crate::sim::collision::{Collider, Contact, GameEvent};
use crate::sim::tick::{GameLoop, TickInput};
use crate::tuning::Tuning;

/// Ball radius used for contact tests
pub const BALL_RADIUS: f32 = 0.25;
/// Half extent of a block cube
pub const BLOCK_HALF_SIZE: f32 = 0.5;
/// Z of the paddle's face
pub const PADDLE_Z: f32 = -6.0;
/// Z of the far wall
pub const FAR_WALL_Z: f32 = 6.0;

/// A spawned entity
#[derive(Debug, Clone)]
pub struct HeadlessEntity {
    pub template: EntityTemplate,
    pub position: Vec3,
    pub color: Rgba,
}

/// Court geometry for the headless world
#[derive(Debug, Clone, Copy)]
pub struct Court {
    pub half_width: f32,
    pub paddle_z: f32,
    pub far_wall_z: f32,
    pub paddle_half_width: f32,
}

impl Court {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            half_width: tuning.paddle_x_limit + tuning.paddle_half_width,
            paddle_z: PADDLE_Z,
            far_wall_z: FAR_WALL_Z,
            paddle_half_width: tuning.paddle_half_width,
        }
    }
}

/// Spawner + motion in one world
#[derive(Debug, Clone)]
pub struct HeadlessWorld {
    court: Court,
    next_handle: u32,
    entities: BTreeMap<EntityHandle, HeadlessEntity>,
    ball_pos: Vec3,
    ball_vel: Vec3,
    paddle_x: f32,
    ball_lost: bool,
    /// Number of launch requests received
    pub launches: u32,
    /// Every entity ever instantiated
    pub spawned: u32,
}

impl HeadlessWorld {
    pub fn new(court: Court) -> Self {
        Self {
            court,
            next_handle: 1,
            entities: BTreeMap::new(),
            ball_pos: Self::serve_position(court, 0.0),
            ball_vel: Vec3::ZERO,
            paddle_x: 0.0,
            ball_lost: false,
            launches: 0,
            spawned: 0,
        }
    }

    fn serve_position(court: Court, paddle_x: f32) -> Vec3 {
        Vec3::new(paddle_x, 0.0, court.paddle_z + BALL_RADIUS * 2.0)
    }

    pub fn entity(&self, handle: EntityHandle) -> Option<&HeadlessEntity> {
        self.entities.get(&handle)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn ball_position(&self) -> Vec3 {
        self.ball_pos
    }

    pub fn paddle_x(&self) -> f32 {
        self.paddle_x
    }

    /// Advance ball kinematics and report contacts
    pub fn step(&mut self, dt: f32) -> Vec<Contact> {
        let mut contacts = Vec::new();
        if self.ball_vel == Vec3::ZERO {
            return contacts;
        }

        self.ball_pos += self.ball_vel * dt;

        // Side walls
        if self.ball_pos.x.abs() > self.court.half_width - BALL_RADIUS {
            self.ball_pos.x = self.ball_pos.x.clamp(
                -self.court.half_width + BALL_RADIUS,
                self.court.half_width - BALL_RADIUS,
            );
            self.ball_vel.x = -self.ball_vel.x;
        }

        // Far wall
        if self.ball_pos.z > self.court.far_wall_z - BALL_RADIUS && self.ball_vel.z > 0.0 {
            self.ball_vel.z = -self.ball_vel.z;
        }

        // Blocks: first overlap wins, ball bounces back along Z
        let reach = BLOCK_HALF_SIZE + BALL_RADIUS;
        let hit = self.entities.iter().find(|(_, e)| {
            (e.position.x - self.ball_pos.x).abs() < reach
                && (e.position.z - self.ball_pos.z).abs() < reach
        });
        if let Some((&handle, _)) = hit {
            self.ball_vel.z = -self.ball_vel.z;
            contacts.push(Contact::ball(Collider::Block(handle), self.ball_pos));
        }

        // Paddle face or loss zone
        let face = self.court.paddle_z + BALL_RADIUS;
        if !self.ball_lost && self.ball_pos.z <= face && self.ball_vel.z < 0.0 {
            let offset = self.ball_pos.x - self.paddle_x;
            if offset.abs() <= self.court.paddle_half_width + BALL_RADIUS {
                self.ball_pos.z = face;
                self.ball_vel.z = -self.ball_vel.z;
                contacts.push(Contact::ball(
                    Collider::Paddle {
                        center_x: self.paddle_x,
                    },
                    self.ball_pos,
                ));
            } else if self.ball_pos.z < self.court.paddle_z - 1.0 {
                self.ball_lost = true;
                contacts.push(Contact::ball(Collider::GameOverZone, self.ball_pos));
            }
        }

        contacts
    }
}

impl Spawner for HeadlessWorld {
    fn instantiate(&mut self, template: &EntityTemplate, position: Vec3) -> EntityHandle {
        let handle = EntityHandle(self.next_handle);
        self.next_handle += 1;
        self.spawned += 1;
        self.entities.insert(
            handle,
            HeadlessEntity {
                template: template.clone(),
                position,
                color: [1.0; 4],
            },
        );
        handle
    }

    fn tint(&mut self, entity: EntityHandle, color: Rgba) {
        if let Some(e) = self.entities.get_mut(&entity) {
            e.color = color;
        }
    }

    fn destroy(&mut self, entity: EntityHandle) {
        self.entities.remove(&entity);
    }
}

impl Motion for HeadlessWorld {
    fn ball_velocity(&self) -> Vec3 {
        self.ball_vel
    }

    fn set_ball_velocity(&mut self, velocity: Vec3) {
        self.ball_vel = velocity;
    }

    fn launch_ball(&mut self, velocity: Vec3) {
        self.launches += 1;
        self.ball_lost = false;
        self.ball_pos = Self::serve_position(self.court, self.paddle_x);
        self.ball_vel = velocity;
    }

    fn set_block_position(&mut self, entity: EntityHandle, position: Vec3) {
        if let Some(e) = self.entities.get_mut(&entity) {
            e.position = position;
        }
    }

    fn set_paddle_x(&mut self, x: f32) {
        self.paddle_x = x;
    }
}

/// UI that remembers what it shows
#[derive(Debug, Clone, Default)]
pub struct HeadlessUi {
    /// Every countdown value shown, in order
    pub countdown_values: Vec<u32>,
    pub countdown_visible: bool,
    /// Score on the game-over panel while it is visible
    pub game_over_panel: Option<u32>,
    pub rankings: Vec<RankingEntry>,
}

impl GameUi for HeadlessUi {
    fn show_countdown(&mut self, value: u32) {
        log::info!("Countdown: {}", value);
        self.countdown_values.push(value);
        self.countdown_visible = true;
    }

    fn hide_countdown(&mut self) {
        self.countdown_visible = false;
    }

    fn show_game_over(&mut self, score: u32) {
        log::info!("Game over panel: Score {}", score);
        self.game_over_panel = Some(score);
    }

    fn hide_panel(&mut self) {
        self.game_over_panel = None;
    }

    fn show_rankings(&mut self, rankings: &[RankingEntry]) {
        for entry in rankings {
            log::debug!(
                "#{} {} {}",
                entry.rank,
                format_game_time(entry.elapsed_time),
                entry.score
            );
        }
        self.rankings = rankings.to_vec();
    }
}

/// Audio that remembers every cue, in order
#[derive(Debug, Clone, Default)]
pub struct HeadlessAudio {
    pub played: Vec<SoundEffect>,
}

impl HeadlessAudio {
    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|&&e| e == effect).count()
    }
}

impl SoundCues for HeadlessAudio {
    fn play_one_shot(&mut self, effect: SoundEffect) {
        log::debug!("Sound: {:?}", effect);
        self.played.push(effect);
    }
}

/// Scene control that only counts requests
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene {
    pub reload_requests: u32,
    pub quit_requested: bool,
}

impl SceneControl for HeadlessScene {
    fn reload_current_scene(&mut self) {
        log::info!("Scene reload requested");
        self.reload_requests += 1;
    }

    fn quit_application(&mut self) {
        log::info!("Quit requested");
        self.quit_requested = true;
    }
}

/// A full game wired to the headless collaborators
pub struct HeadlessSession<R: RecordStore> {
    pub world: HeadlessWorld,
    pub ui: HeadlessUi,
    pub audio: HeadlessAudio,
    pub scene: HeadlessScene,
    pub records: R,
    game: GameLoop,
    accumulator: f32,
}

impl<R: RecordStore> HeadlessSession<R> {
    pub fn new(tuning: Tuning, seed: u64, mut records: R) -> Self {
        let mut world = HeadlessWorld::new(Court::from_tuning(&tuning));
        let mut ui = HeadlessUi::default();
        let mut audio = HeadlessAudio::default();
        let mut scene = HeadlessScene::default();
        let game = GameLoop::new(
            tuning,
            seed,
            &mut services(&mut world, &mut ui, &mut audio, &mut records, &mut scene),
        );
        Self {
            world,
            ui,
            audio,
            scene,
            records,
            game,
            accumulator: 0.0,
        }
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    /// Run as many fixed ticks as `dt` of real time covers; returns the count
    pub fn frame(&mut self, dt: f32, input: &TickInput) -> u32 {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut input = *input;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(&input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.restart = false;
            input.quit = false;
        }
        substeps
    }

    /// One fixed tick: game loop, then ball physics, then contact reactions
    pub fn step(&mut self, input: &TickInput) {
        self.game.tick(
            input,
            SIM_DT,
            &mut services(
                &mut self.world,
                &mut self.ui,
                &mut self.audio,
                &mut self.records,
                &mut self.scene,
            ),
        );
        if self.game.is_frozen() {
            return;
        }

        let contacts = self.world.step(SIM_DT);
        for contact in &contacts {
            self.game.handle_contact(
                contact,
                &mut services(
                    &mut self.world,
                    &mut self.ui,
                    &mut self.audio,
                    &mut self.records,
                    &mut self.scene,
                ),
            );
        }
    }

    /// Remove an entity outside the ball's reach and tell the loop
    pub fn remove_entity(&mut self, handle: EntityHandle) {
        self.world.destroy(handle);
        self.game.handle_event(
            GameEvent::BlockRemoved { id: handle },
            &mut services(
                &mut self.world,
                &mut self.ui,
                &mut self.audio,
                &mut self.records,
                &mut self.scene,
            ),
        );
    }

    /// Input that keeps the paddle under the ball
    pub fn autopilot(&self) -> TickInput {
        let gap = self.world.ball_position().x - self.world.paddle_x();
        TickInput {
            horizontal: (gap / self.game.tuning().paddle_half_width).clamp(-1.0, 1.0),
            ..Default::default()
        }
    }
}

fn services<'a, R: RecordStore>(
    world: &'a mut HeadlessWorld,
    ui: &'a mut HeadlessUi,
    audio: &'a mut HeadlessAudio,
    records: &'a mut R,
    scene: &'a mut HeadlessScene,
) -> Services<'a> {
    Services {
        world,
        ui: Some(ui),
        audio: Some(audio),
        records,
        scene,
    }
}
