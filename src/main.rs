//! Row Breaker entry point
//!
//! Native: plays one headless run with the paddle on autopilot and prints the
//! leaderboard. Web: exposes a frame-driven game backed by LocalStorage.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use row_breaker::Tuning;
    use row_breaker::persistence::LocalStorageRecords;
    use row_breaker::platform::headless::HeadlessSession;
    use row_breaker::sim::{GamePhase, TickInput};

    /// Game instance driven by the page's animation frames
    #[wasm_bindgen]
    pub struct WebGame {
        session: HeadlessSession<LocalStorageRecords>,
    }

    #[wasm_bindgen]
    impl WebGame {
        #[wasm_bindgen(constructor)]
        pub fn new() -> WebGame {
            let seed: u64 = rand::random();
            log::info!("New game (seed {})", seed);
            WebGame {
                session: HeadlessSession::new(Tuning::default(), seed, LocalStorageRecords::new()),
            }
        }

        /// Advance by `dt` seconds of real time
        pub fn frame(&mut self, dt: f32, horizontal: f32, restart: bool) {
            let input = TickInput {
                horizontal,
                restart,
                quit: false,
            };
            self.session.frame(dt, &input);
        }

        pub fn score(&self) -> u32 {
            self.session.game().score()
        }

        pub fn phase(&self) -> String {
            match self.session.game().phase() {
                GamePhase::Countdown { .. } => "countdown".into(),
                GamePhase::Active => "active".into(),
                GamePhase::GameOver => "game_over".into(),
            }
        }

        /// Countdown value currently on screen (0 when hidden)
        pub fn countdown(&self) -> u32 {
            let ui = &self.session.ui;
            match ui.countdown_values.last() {
                Some(&value) if ui.countdown_visible => value,
                _ => 0,
            }
        }

        pub fn rankings_json(&self) -> String {
            serde_json::to_string(self.session.game().rankings().entries()).unwrap_or_default()
        }
    }

    impl Default for WebGame {
        fn default() -> Self {
            Self::new()
        }
    }

    pub fn init() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }
        log::info!("Row Breaker starting...");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::init();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use row_breaker::Tuning;
    use row_breaker::highscores::format_game_time;
    use row_breaker::persistence::{FileRecords, MemoryRecords, RecordStore};
    use row_breaker::platform::headless::HeadlessSession;

    /// Directory for persisted records
    pub const DATA_DIR_VAR: &str = "ROW_BREAKER_DATA";
    const DEFAULT_DATA_DIR: &str = "data";
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Ten minutes of frames
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    pub fn run() {
        let tuning = match std::env::args().nth(1) {
            Some(path) => Tuning::load(Path::new(&path)),
            None => Tuning::default(),
        };

        let data_dir =
            std::env::var(DATA_DIR_VAR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        match FileRecords::new(&data_dir) {
            Ok(records) => play(tuning, records),
            Err(e) => {
                log::error!("Cannot use data dir {}: {}; rankings will not persist", data_dir, e);
                play(tuning, MemoryRecords::new());
            }
        }
    }

    fn play<R: RecordStore>(tuning: Tuning, records: R) {
        let seed: u64 = rand::random();
        log::info!("Seed {}", seed);
        let mut session = HeadlessSession::new(tuning, seed, records);

        let mut frames = 0;
        while !session.game().phase().is_game_over() && frames < MAX_FRAMES {
            let input = session.autopilot();
            session.frame(FRAME_DT, &input);
            frames += 1;
        }

        let game = session.game();
        if game.phase().is_game_over() {
            println!(
                "Game over: {} blocks in {}",
                game.score(),
                format_game_time(game.session().elapsed())
            );
        } else {
            println!("Stopped after {} frames (score {})", frames, game.score());
        }

        println!("\nRank  Time       Score");
        for entry in game.rankings().entries() {
            println!(
                "{:>4}  {}  {:>5}",
                entry.rank,
                format_game_time(entry.elapsed_time),
                entry.score
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Row Breaker (native) starting...");
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
