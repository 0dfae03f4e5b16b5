//! Core engine types: players, roster, RNG, configuration, errors.
//!
//! These are game-agnostic building blocks. Games describe themselves
//! through `GameConfig` rather than modifying the core.

pub mod player;
pub mod roster;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{rank_by_score, Player, PlayerId};
pub use roster::{RoleCursor, Roster};
pub use rng::{SessionRng, SessionRngState};
pub use config::{EndCondition, GameConfig, ResetPolicy, RoundSettings, TurnMode, TurnsPerRound};
pub use error::EngineError;
