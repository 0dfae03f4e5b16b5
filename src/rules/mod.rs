//! Round rules: phases, events, scoring and the engine that ties them.
//!
//! ```text
//! SETUP -> CONFIG -> HANDOFF -> [COUNTDOWN] -> PROMPT -> RESOLUTION
//!                       ^                                   |
//!                       +------------- next turn -----------+
//!                                                           v
//!                              SETUP <- reset <- GAME_OVER
//! ```

pub mod phase;
pub mod event;
pub mod scoring;
pub mod state;
pub mod snapshot;
pub mod engine;

pub use phase::Phase;
pub use event::{Event, EventRecord, Selection, Vote};
pub use scoring::{majority, tally, Award, ScoringPolicy, TiePolicy, TurnResult};
pub use state::RoundState;
pub use snapshot::RoundSnapshot;
pub use engine::{RoundEngine, Transition};
