//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No engine access except through `platform` traits

pub mod collision;
pub mod field;
pub mod layout;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{BALL_TAG, Collider, Contact, GameEvent, react};
pub use field::{Block, BlockField};
pub use layout::{RowLayout, RowSpec};
pub use motion::{BallGovernor, PaddleGovernor};
pub use state::{GameOverCause, GamePhase, GameSession};
pub use tick::{GameLoop, TickInput};
