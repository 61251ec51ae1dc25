//! Fixed timestep game loop
//!
//! Drives the countdown → active → game over → restart cycle one tick at a
//! time. The loop owns the session, the block field and the leaderboard; every
//! engine collaborator is borrowed per call through [`Services`].

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Contact, GameEvent, react};
use super::field::BlockField;
use super::layout::RowLayout;
use super::motion::{BallGovernor, PaddleGovernor};
use super::state::{GameOverCause, GamePhase, GameSession};
use crate::highscores::RankingStore;
use crate::platform::{Services, SoundEffect};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal paddle input in [-1, 1]
    pub horizontal: f32,
    /// Continue from the game-over panel
    pub restart: bool,
    /// Quit the application
    pub quit: bool,
}

/// The game loop state machine
#[derive(Debug, Clone)]
pub struct GameLoop {
    tuning: Tuning,
    session: GameSession,
    layout: RowLayout,
    field: BlockField,
    rankings: RankingStore,
    ball: BallGovernor,
    paddle: PaddleGovernor,
    rng: Pcg32,
    /// World clock: seconds of unfrozen time since creation
    clock: f32,
    /// 1.0 while the world runs, 0.0 while frozen
    time_scale: f32,
    /// Game over happened without a UI; only a scene reload recovers
    degraded: bool,
}

impl GameLoop {
    /// Enter the scene: load rankings, show them, start the countdown
    pub fn new(tuning: Tuning, seed: u64, services: &mut Services<'_>) -> Self {
        let rankings = RankingStore::load(
            &*services.records,
            tuning.max_rankings,
            &tuning.ranking_record,
        );
        if services.ui.is_none() {
            log::warn!("No UI available; game over will freeze the world without a panel");
        }
        if tuning.block_template.is_none() {
            log::error!("Block template is not set; rows will not spawn");
        }

        let mut game = Self {
            session: GameSession::new(tuning.countdown_secs),
            layout: RowLayout::from_tuning(&tuning),
            field: BlockField::from_tuning(&tuning),
            rankings,
            ball: BallGovernor::from_tuning(&tuning),
            paddle: PaddleGovernor::from_tuning(&tuning),
            rng: Pcg32::seed_from_u64(seed),
            clock: 0.0,
            time_scale: 1.0,
            degraded: false,
            tuning,
        };
        game.show_rankings(services);
        game.begin_countdown(services);
        game
    }

    /// Advance the loop by one tick of `dt` real seconds
    pub fn tick(&mut self, input: &TickInput, dt: f32, services: &mut Services<'_>) {
        if input.quit {
            services.scene.quit_application();
            return;
        }

        if input.restart && self.session.phase.is_game_over() {
            if self.degraded {
                log::warn!("No game-over panel to continue from; waiting for scene reload");
            } else {
                self.restart(services);
            }
        }

        let dt = dt * self.time_scale;
        self.clock += dt;

        match self.session.phase {
            GamePhase::Countdown { remaining } => {
                services.world.set_ball_velocity(Vec3::ZERO);
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.begin_play(services);
                } else {
                    self.session.phase = GamePhase::Countdown { remaining };
                    self.show_countdown(remaining.ceil() as u32, services);
                }
            }
            GamePhase::Active => self.tick_active(input, dt, services),
            GamePhase::GameOver => services.world.set_ball_velocity(Vec3::ZERO),
        }
    }

    fn tick_active(&mut self, input: &TickInput, dt: f32, services: &mut Services<'_>) {
        let x = self.paddle.steer(input.horizontal, dt);
        services.world.set_paddle_x(x);
        let velocity = services.world.ball_velocity();
        services.world.set_ball_velocity(self.ball.regulate(velocity));

        self.session.since_last_spawn += dt;
        if self.session.since_last_spawn >= self.tuning.spawn_interval_secs {
            self.spawn_row(true, services);
            self.session.since_last_spawn = 0.0;
        }

        self.field.advance_all(dt);
        for block in self.field.blocks() {
            services.world.set_block_position(block.id, block.pos);
        }

        if let Some((id, z)) = self.field.crossed_boundary().map(|b| (b.id, b.pos.z)) {
            log::info!("Block {:?} crossed the boundary (z={:.2})", id, z);
            self.game_over(GameOverCause::BoundaryCrossed, services);
        }
    }

    /// Feed a raw engine contact through the collision reactors
    pub fn handle_contact(
        &mut self,
        contact: &Contact,
        services: &mut Services<'_>,
    ) -> Option<GameEvent> {
        let event = react(contact)?;
        self.handle_event(event, services);
        Some(event)
    }

    /// Apply a domain event
    pub fn handle_event(&mut self, event: GameEvent, services: &mut Services<'_>) {
        match event {
            GameEvent::BlockDestroyed { id } => {
                if self.field.on_block_destroyed(id, &mut *services.world)
                    && self.session.record_break()
                {
                    log::debug!("Block {:?} broken, score {}", id, self.session.score);
                    services.play_sound(SoundEffect::BlockBreak);
                }
            }
            GameEvent::BlockRemoved { id } => {
                // Entity is already gone; compacted on the next advance
                if self.field.mark_destroyed(id) {
                    log::debug!("Block {:?} removed by the engine", id);
                }
            }
            GameEvent::BallLost => {
                self.game_over(GameOverCause::BallLost, services);
            }
            GameEvent::PaddleHit { offset_x } => {
                if self.session.phase.is_active() {
                    let velocity = services.world.ball_velocity();
                    let deflected = self
                        .ball
                        .deflect(velocity, offset_x, self.paddle.half_width());
                    services.world.set_ball_velocity(deflected);
                    services.play_sound(SoundEffect::PaddleHit);
                }
            }
        }
    }

    /// End the run. Returns false (and does nothing) unless play is active.
    pub fn game_over(&mut self, cause: GameOverCause, services: &mut Services<'_>) -> bool {
        if !self.session.phase.is_active() {
            log::debug!("Ignoring game over ({:?}): not in play", cause);
            return false;
        }

        self.session.phase = GamePhase::GameOver;
        self.session.end_time = Some(self.clock);
        self.session.cause = Some(cause);
        let elapsed = self.session.elapsed();
        let score = self.session.score;
        log::info!(
            "Game over ({:?}): score {}, time {:.3}s",
            cause,
            score,
            elapsed
        );

        self.rankings.add(elapsed, score, &mut *services.records);

        self.time_scale = 0.0;
        services.world.set_ball_velocity(Vec3::ZERO);
        services.play_sound(SoundEffect::GameOver);

        match services.ui.as_mut() {
            Some(ui) => {
                ui.show_rankings(self.rankings.entries());
                ui.show_game_over(score);
            }
            None => {
                // Degraded path: freeze and hand recovery to the scene
                log::warn!("No UI for game over; world frozen, requesting scene reload");
                self.degraded = true;
                services.scene.reload_current_scene();
            }
        }
        true
    }

    /// Start a new run from game over. Returns false outside game over.
    pub fn restart(&mut self, services: &mut Services<'_>) -> bool {
        if !self.session.phase.is_game_over() {
            log::debug!("Restart ignored: run still in progress");
            return false;
        }

        log::info!("Restarting");
        if let Some(ui) = services.ui.as_mut() {
            ui.hide_panel();
        }
        self.field.clear(&mut *services.world);
        self.paddle.reset();
        services.world.set_paddle_x(self.paddle.x());
        services.world.set_ball_velocity(Vec3::ZERO);
        self.time_scale = 1.0;
        self.degraded = false;

        self.show_rankings(services);
        self.begin_countdown(services);
        true
    }

    /// Clear the leaderboard (persisted) and refresh the display
    pub fn reset_rankings(&mut self, services: &mut Services<'_>) {
        self.rankings.reset(&mut *services.records);
        self.show_rankings(services);
    }

    fn begin_countdown(&mut self, services: &mut Services<'_>) {
        self.session = GameSession::new(self.tuning.countdown_secs);
        log::info!("Countdown started ({}s)", self.tuning.countdown_secs);
        let first = self.tuning.countdown_secs.ceil() as u32;
        if first > 0 {
            self.show_countdown(first, services);
        }
    }

    fn begin_play(&mut self, services: &mut Services<'_>) {
        if let Some(ui) = services.ui.as_mut() {
            ui.hide_countdown();
        }
        self.session.phase = GamePhase::Active;
        self.session.start_time = Some(self.clock);
        self.session.since_last_spawn = 0.0;
        log::info!("Game start");

        let velocity = self.ball.launch_velocity(&mut self.rng);
        services.world.launch_ball(velocity);
        services.play_sound(SoundEffect::Launch);
        self.spawn_row(false, services);
    }

    fn spawn_row(&mut self, randomize: bool, services: &mut Services<'_>) {
        let row = self.layout.compute_row(randomize, &mut self.rng);
        let spawned = self.field.spawn(&row, &mut *services.world, &mut self.rng);
        if spawned > 0 {
            log::info!("Spawned a row of {} blocks", spawned);
        }
    }

    fn show_countdown(&mut self, value: u32, services: &mut Services<'_>) {
        if self.session.countdown_shown == Some(value) {
            return;
        }
        self.session.countdown_shown = Some(value);
        if let Some(ui) = services.ui.as_mut() {
            ui.show_countdown(value);
        }
    }

    fn show_rankings(&self, services: &mut Services<'_>) {
        if let Some(ui) = services.ui.as_mut() {
            ui.show_rankings(self.rankings.entries());
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Gate for paddle/ball motion and boundary checks
    pub fn is_active(&self) -> bool {
        self.session.phase.is_active()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn field(&self) -> &BlockField {
        &self.field
    }

    pub fn rankings(&self) -> &RankingStore {
        &self.rankings
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// World clock (stops while frozen)
    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == 0.0
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn paddle_x(&self) -> f32 {
        self.paddle.x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::highscores::RANKING_RECORD;
    use crate::persistence::{MemoryRecords, RecordStore};
    use crate::platform::headless::{
        Court, HeadlessAudio, HeadlessScene, HeadlessUi, HeadlessWorld,
    };
    use crate::platform::{GameUi, Motion};
    use crate::sim::collision::Collider;

    struct Rig {
        world: HeadlessWorld,
        ui: HeadlessUi,
        audio: HeadlessAudio,
        scene: HeadlessScene,
        records: MemoryRecords,
        with_ui: bool,
    }

    impl Rig {
        fn new(tuning: &Tuning) -> Self {
            Self {
                world: HeadlessWorld::new(Court::from_tuning(tuning)),
                ui: HeadlessUi::default(),
                audio: HeadlessAudio::default(),
                scene: HeadlessScene::default(),
                records: MemoryRecords::new(),
                with_ui: true,
            }
        }

        fn services(&mut self) -> Services<'_> {
            let ui: Option<&mut dyn GameUi> = if self.with_ui {
                Some(&mut self.ui)
            } else {
                None
            };
            Services {
                world: &mut self.world,
                ui,
                audio: Some(&mut self.audio),
                records: &mut self.records,
                scene: &mut self.scene,
            }
        }
    }

    fn start(tuning: Tuning) -> (GameLoop, Rig) {
        let mut rig = Rig::new(&tuning);
        let game = GameLoop::new(tuning, 12345, &mut rig.services());
        (game, rig)
    }

    fn run(game: &mut GameLoop, rig: &mut Rig, input: &TickInput, secs: f32) {
        let ticks = (secs / SIM_DT).round() as usize;
        for _ in 0..ticks {
            game.tick(input, SIM_DT, &mut rig.services());
        }
    }

    fn play(tuning: Tuning) -> (GameLoop, Rig) {
        let (mut game, mut rig) = start(tuning);
        let countdown = game.tuning().countdown_secs;
        run(&mut game, &mut rig, &TickInput::default(), countdown + 0.1);
        assert!(game.is_active());
        (game, rig)
    }

    #[test]
    fn test_countdown_to_active_fires_once() {
        let (mut game, mut rig) = start(Tuning::default());
        assert!(game.phase().is_countdown());
        assert_eq!(rig.ui.countdown_values, vec![3]);

        run(&mut game, &mut rig, &TickInput::default(), 2.9);
        assert!(game.phase().is_countdown());
        assert_eq!(rig.world.launches, 0);
        assert_eq!(rig.world.spawned, 0);

        run(&mut game, &mut rig, &TickInput::default(), 0.2);
        assert!(game.is_active());
        assert_eq!(rig.ui.countdown_values, vec![3, 2, 1]);
        assert!(!rig.ui.countdown_visible);
        assert_eq!(rig.world.launches, 1);
        assert_eq!(rig.world.spawned, 15);

        run(&mut game, &mut rig, &TickInput::default(), 1.0);
        assert_eq!(rig.world.launches, 1);
        assert_eq!(rig.world.spawned, 15);
        assert!(game.session().start_time.is_some());
    }

    #[test]
    fn test_rows_spawn_on_interval() {
        let (mut game, mut rig) = play(Tuning::default());
        assert_eq!(game.field().len(), 15);

        run(&mut game, &mut rig, &TickInput::default(), 9.5);
        assert_eq!(game.field().len(), 15);

        run(&mut game, &mut rig, &TickInput::default(), 1.0);
        let added = game.field().len() - 15;
        assert!((5..=15).contains(&added), "random row of {added}");
        assert!(game.session().since_last_spawn < 1.0);
    }

    #[test]
    fn test_blocks_slide_and_sync_to_engine() {
        let (mut game, mut rig) = play(Tuning::default());
        let id = game.field().blocks()[0].id;
        let z0 = game.field().blocks()[0].pos.z;

        run(&mut game, &mut rig, &TickInput::default(), 1.0);
        let block = &game.field().blocks()[0];
        assert!(block.pos.z < z0);
        assert!((block.pos.z - (z0 - 0.1)).abs() < 0.01);
        assert_eq!(rig.world.entity(id).unwrap().position, block.pos);
    }

    #[test]
    fn test_block_hits_score_once() {
        let (mut game, mut rig) = play(Tuning::default());
        let id = game.field().blocks()[3].id;
        let contact = Contact::ball(Collider::Block(id), Vec3::ZERO);

        let event = game.handle_contact(&contact, &mut rig.services());
        assert_eq!(event, Some(GameEvent::BlockDestroyed { id }));
        assert_eq!(game.score(), 1);
        assert_eq!(game.field().len(), 14);

        game.handle_contact(&contact, &mut rig.services());
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_engine_removed_block_compacts_without_scoring() {
        let (mut game, mut rig) = play(Tuning::default());
        let ids: Vec<_> = game.field().blocks().iter().map(|b| b.id).collect();

        game.handle_event(GameEvent::BlockRemoved { id: ids[2] }, &mut rig.services());
        game.handle_event(GameEvent::BlockRemoved { id: ids[9] }, &mut rig.services());
        assert_eq!(game.field().live().count(), 13);
        assert_eq!(game.field().len(), 15);

        game.tick(&TickInput::default(), SIM_DT, &mut rig.services());
        let left: Vec<_> = game.field().blocks().iter().map(|b| b.id).collect();
        let expected: Vec<_> = ids
            .iter()
            .copied()
            .filter(|&id| id != ids[2] && id != ids[9])
            .collect();
        assert_eq!(left, expected);
        assert_eq!(game.score(), 0);
        assert_eq!(rig.audio.count(SoundEffect::BlockBreak), 0);

        // A ball hit on a removed block is not a break
        game.handle_event(GameEvent::BlockDestroyed { id: ids[2] }, &mut rig.services());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_sound_cues_follow_the_run() {
        let (mut game, mut rig) = start(Tuning::default());
        assert!(rig.audio.played.is_empty());

        run(&mut game, &mut rig, &TickInput::default(), 3.1);
        assert_eq!(rig.audio.played, vec![SoundEffect::Launch]);

        let id = game.field().blocks()[0].id;
        game.handle_event(GameEvent::BlockDestroyed { id }, &mut rig.services());
        game.handle_event(GameEvent::BlockDestroyed { id }, &mut rig.services());
        assert_eq!(rig.audio.count(SoundEffect::BlockBreak), 1);

        rig.world.set_ball_velocity(Vec3::new(0.0, 0.0, 10.0));
        game.handle_event(GameEvent::PaddleHit { offset_x: 0.5 }, &mut rig.services());
        assert_eq!(rig.audio.count(SoundEffect::PaddleHit), 1);

        game.handle_event(GameEvent::BallLost, &mut rig.services());
        game.handle_event(GameEvent::BallLost, &mut rig.services());
        assert_eq!(rig.audio.count(SoundEffect::GameOver), 1);

        // Frozen after game over: no more cues
        let late = game.field().blocks()[0].id;
        game.handle_event(GameEvent::BlockDestroyed { id: late }, &mut rig.services());
        game.handle_event(GameEvent::PaddleHit { offset_x: 0.5 }, &mut rig.services());
        assert_eq!(
            rig.audio.played,
            vec![
                SoundEffect::Launch,
                SoundEffect::BlockBreak,
                SoundEffect::PaddleHit,
                SoundEffect::GameOver,
            ]
        );
    }

    #[test]
    fn test_ball_lost_ends_run_once() {
        let (mut game, mut rig) = play(Tuning::default());
        let id = game.field().blocks()[0].id;
        game.handle_event(GameEvent::BlockDestroyed { id }, &mut rig.services());
        run(&mut game, &mut rig, &TickInput::default(), 5.0);

        game.handle_event(GameEvent::BallLost, &mut rig.services());
        assert!(game.phase().is_game_over());
        assert!(game.is_frozen());
        assert_eq!(rig.ui.game_over_panel, Some(1));
        assert_eq!(game.session().cause, Some(GameOverCause::BallLost));
        assert_eq!(game.rankings().len(), 1);
        let elapsed = game.rankings().entries()[0].elapsed_time;
        // 0.1s of play before the extra 5s
        assert!((elapsed - 5.1).abs() < 0.05, "elapsed {elapsed}");

        // Duplicate and late events change nothing
        game.handle_event(GameEvent::BallLost, &mut rig.services());
        assert!(!game.game_over(GameOverCause::BoundaryCrossed, &mut rig.services()));
        assert_eq!(game.rankings().len(), 1);
        assert_eq!(rig.ui.rankings.len(), 1);

        let saved = rig.records.read_record(RANKING_RECORD).unwrap().unwrap();
        assert!(saved.contains("\"score\":1"));
    }

    #[test]
    fn test_frozen_world_does_not_advance() {
        let (mut game, mut rig) = play(Tuning::default());
        game.handle_event(GameEvent::BallLost, &mut rig.services());
        let clock = game.clock();
        let z = game.field().blocks()[0].pos.z;

        rig.world.set_ball_velocity(Vec3::new(1.0, 0.0, 1.0));
        run(&mut game, &mut rig, &TickInput { horizontal: 1.0, ..Default::default() }, 2.0);
        assert_eq!(game.clock(), clock);
        assert_eq!(game.field().blocks()[0].pos.z, z);
        assert_eq!(rig.world.ball_velocity(), Vec3::ZERO);
        assert_eq!(game.paddle_x(), 0.0);
    }

    #[test]
    fn test_boundary_crossing_ends_run() {
        let tuning = Tuning {
            block_slide_speed: 10.0,
            ..Tuning::default()
        };
        let (mut game, mut rig) = play(tuning);
        // 8.5 units at 10/s
        run(&mut game, &mut rig, &TickInput::default(), 1.0);

        assert!(game.phase().is_game_over());
        assert_eq!(game.session().cause, Some(GameOverCause::BoundaryCrossed));
        assert_eq!(game.rankings().len(), 1);
        let elapsed = game.rankings().entries()[0].elapsed_time;
        assert!(elapsed > 0.8 && elapsed < 1.0, "elapsed {elapsed}");
    }

    #[test]
    fn test_motion_is_gated_outside_play() {
        let (mut game, mut rig) = start(Tuning::default());
        let push = TickInput {
            horizontal: 1.0,
            ..Default::default()
        };

        rig.world.set_ball_velocity(Vec3::new(0.0, 0.0, 5.0));
        run(&mut game, &mut rig, &push, 1.0);
        assert_eq!(game.paddle_x(), 0.0);
        assert_eq!(rig.world.ball_velocity(), Vec3::ZERO);

        run(&mut game, &mut rig, &push, 2.5);
        assert!(game.is_active());
        assert!(game.paddle_x() > 0.0);
        assert!((rig.world.ball_velocity().length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_hit_deflects_only_in_play() {
        let (mut game, mut rig) = play(Tuning::default());
        rig.world.set_ball_velocity(Vec3::new(0.0, 0.0, 10.0));
        game.handle_event(GameEvent::PaddleHit { offset_x: 1.5 }, &mut rig.services());
        let v = rig.world.ball_velocity();
        assert!(v.x > 0.0);
        assert!((v.length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_restart_resets_everything() {
        let (mut game, mut rig) = play(Tuning::default());
        for i in 0..3 {
            let id = game.field().blocks()[i].id;
            game.handle_event(GameEvent::BlockDestroyed { id }, &mut rig.services());
        }
        assert_eq!(game.score(), 3);
        run(&mut game, &mut rig, &TickInput::default(), 10.5);
        game.handle_event(GameEvent::BallLost, &mut rig.services());

        // Restart is only honoured from game over
        assert!(game.phase().is_game_over());
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        game.tick(&restart, SIM_DT, &mut rig.services());

        assert!(game.phase().is_countdown());
        assert_eq!(game.score(), 0);
        assert_eq!(game.session().since_last_spawn, 0.0);
        assert_eq!(game.session().start_time, None);
        assert!(game.field().is_empty());
        assert_eq!(rig.world.entity_count(), 0);
        assert!(!game.is_frozen());
        assert_eq!(rig.ui.game_over_panel, None);
        assert_eq!(rig.ui.countdown_values.last(), Some(&3));
        assert_eq!(game.rankings().len(), 1);

        // A second run counts down and launches again
        run(&mut game, &mut rig, &TickInput::default(), 3.1);
        assert!(game.is_active());
        assert_eq!(rig.world.launches, 2);
        assert!(!game.restart(&mut rig.services()));
    }

    #[test]
    fn test_missing_ui_degrades_to_frozen_world() {
        let tuning = Tuning::default();
        let mut rig = Rig::new(&tuning);
        rig.with_ui = false;
        let mut game = GameLoop::new(tuning, 1, &mut rig.services());
        run(&mut game, &mut rig, &TickInput::default(), 3.1);
        assert!(game.is_active());

        game.handle_event(GameEvent::BallLost, &mut rig.services());
        assert!(game.is_frozen());
        assert!(game.is_degraded());
        assert_eq!(rig.scene.reload_requests, 1);
        assert_eq!(game.rankings().len(), 1);

        // No panel, so the continue input cannot restart
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        game.tick(&restart, SIM_DT, &mut rig.services());
        assert!(game.phase().is_game_over());
    }

    #[test]
    fn test_missing_template_still_plays() {
        let tuning = Tuning {
            block_template: None,
            ..Tuning::default()
        };
        let (game, rig) = play(tuning);
        assert!(game.field().is_empty());
        assert_eq!(rig.world.launches, 1);
        assert_eq!(rig.world.entity_count(), 0);
    }

    #[test]
    fn test_quit_input() {
        let (mut game, mut rig) = start(Tuning::default());
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        game.tick(&quit, SIM_DT, &mut rig.services());
        assert!(rig.scene.quit_requested);
    }

    #[test]
    fn test_reset_rankings_clears_display_and_record() {
        let (mut game, mut rig) = play(Tuning::default());
        game.handle_event(GameEvent::BallLost, &mut rig.services());
        assert_eq!(rig.ui.rankings.len(), 1);

        game.reset_rankings(&mut rig.services());
        assert!(game.rankings().is_empty());
        assert!(rig.ui.rankings.is_empty());
        let saved = rig.records.read_record(RANKING_RECORD).unwrap().unwrap();
        assert_eq!(saved, r#"{"rankings":[]}"#);
    }

    #[test]
    fn test_rankings_loaded_and_shown_on_entry() {
        let tuning = Tuning::default();
        let mut rig = Rig::new(&tuning);
        rig.records
            .write_record(
                RANKING_RECORD,
                r#"{"rankings":[{"elapsedTime":12.0,"score":4,"rank":1}]}"#,
            )
            .unwrap();
        let game = GameLoop::new(tuning, 9, &mut rig.services());
        assert_eq!(game.rankings().top_score(), Some(4));
        assert_eq!(rig.ui.rankings.len(), 1);
    }
}
