//! Game session state
//!
//! One `GameSession` per run. Restart replaces it wholesale, so nothing
//! (score, timers, timestamps) carries over between runs.

use serde::{Deserialize, Serialize};

/// Current phase of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Counting down before play; `remaining` in seconds
    Countdown { remaining: f32 },
    /// Ball in play, rows spawning
    Active,
    /// Run ended, world frozen
    GameOver,
}

impl GamePhase {
    pub fn is_active(&self) -> bool {
        matches!(self, GamePhase::Active)
    }

    pub fn is_countdown(&self) -> bool {
        matches!(self, GamePhase::Countdown { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// A block slid past the boundary
    BoundaryCrossed,
    /// The ball fell past the paddle
    BallLost,
}

/// State of a single run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    /// Seconds since the last row spawn
    pub since_last_spawn: f32,
    /// Blocks broken this run
    pub score: u32,
    /// World time when play started
    pub start_time: Option<f32>,
    /// World time when the run ended
    pub end_time: Option<f32>,
    /// Last countdown value sent to the UI
    pub countdown_shown: Option<u32>,
    pub cause: Option<GameOverCause>,
}

impl GameSession {
    /// Fresh session, counting down from `countdown_secs`
    pub fn new(countdown_secs: f32) -> Self {
        Self {
            phase: GamePhase::Countdown {
                remaining: countdown_secs,
            },
            since_last_spawn: 0.0,
            score: 0,
            start_time: None,
            end_time: None,
            countdown_shown: None,
            cause: None,
        }
    }

    /// Run length in seconds (0 until the run has both started and ended)
    pub fn elapsed(&self) -> f32 {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => (end - start).max(0.0),
            _ => 0.0,
        }
    }

    /// Count a broken block. Only scores while active.
    pub fn record_break(&mut self) -> bool {
        if self.phase.is_active() {
            self.score += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_counts_down() {
        let session = GameSession::new(3.0);
        assert_eq!(session.phase, GamePhase::Countdown { remaining: 3.0 });
        assert_eq!(session.score, 0);
        assert_eq!(session.elapsed(), 0.0);
    }

    #[test]
    fn test_score_only_moves_while_active() {
        let mut session = GameSession::new(3.0);
        assert!(!session.record_break());
        session.phase = GamePhase::Active;
        assert!(session.record_break());
        assert!(session.record_break());
        session.phase = GamePhase::GameOver;
        assert!(!session.record_break());
        assert_eq!(session.score, 2);
    }

    #[test]
    fn test_elapsed() {
        let mut session = GameSession::new(3.0);
        session.start_time = Some(3.0);
        session.end_time = Some(45.5);
        assert_eq!(session.elapsed(), 42.5);
    }
}
