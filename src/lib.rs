//! # party-engine
//!
//! A turn-based round engine for pass-the-phone party games.
//!
//! ## Design Principles
//!
//! 1. **One State Machine**: Truth or Dare, Charades, trivia and voting games
//!    all run on the same phase cycle. Games differ only in their
//!    `GameConfig` and content catalog.
//!
//! 2. **Events In, Snapshots Out**: The presentation layer dispatches
//!    `Event`s and renders `RoundSnapshot`s. It never mutates state.
//!
//! 3. **Deterministic**: Every shuffle comes from a seeded `SessionRng`, and
//!    timers advance on `Tick` events rather than reading a clock.
//!
//! ## Modules
//!
//! - `core`: Players, roster, RNG, configuration, errors
//! - `content`: Content items, catalogs and the no-repeat pool
//! - `timer`: Tick-driven countdowns and the phase-scoped timer slot
//! - `rules`: Phases, events, scoring policies and the `RoundEngine`
//! - `games`: Preset configurations

pub mod core;
pub mod content;
pub mod timer;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EndCondition, EngineError, GameConfig, Player, PlayerId, ResetPolicy, Roster, RoundSettings,
    SessionRng, TurnMode, TurnsPerRound,
};

pub use crate::content::{catalog_from_json, ContentId, ContentItem, ContentPool, DrawPolicy};

pub use crate::timer::{Countdown, TimerHandle, TimerSignal, TimerSlot};

pub use crate::rules::{
    Award, Event, Phase, RoundEngine, RoundSnapshot, ScoringPolicy, Selection, TiePolicy,
    Transition, Vote,
};
