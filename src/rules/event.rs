//! Events dispatched into the round engine.
//!
//! The presentation layer turns every button press (and every timer tick)
//! into an [`Event`]. Events that don't apply to the current phase are
//! ignored, so a late or duplicated tap can't corrupt the session.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::{PlayerId, RoundSettings};
use crate::timer::TimerHandle;

/// A pick made during a turn: a player (winner, vote target) or an option
/// index (answer, yes/no).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    Player(PlayerId),
    Choice(usize),
}

/// One player's vote in a majority-vote round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    pub voter: PlayerId,
    pub choice: Selection,
}

impl Vote {
    #[must_use]
    pub fn new(voter: PlayerId, choice: Selection) -> Self {
        Self { voter, choice }
    }
}

/// Input to [`RoundEngine::dispatch`](super::RoundEngine::dispatch).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Leave setup for the config screen.
    Configure,
    /// Start play with the chosen settings.
    StartGame(RoundSettings),
    /// "I'm ready": draw and reveal the next item.
    Reveal,
    /// Pick a winner or an answer.
    Select(Selection),
    /// Cast a vote.
    Vote(Vote),
    /// The actor succeeded ("got it", correct guess).
    GotIt,
    /// Pass on the current item.
    Skip,
    /// End the prompt without further input.
    Done,
    /// Time's up, reported by the presentation layer.
    Timeout,
    /// One second elapsed on the engine-owned timer.
    Tick,
    /// A specific countdown ran out.
    Expire(TimerHandle),
    /// Continue past the resolution screen.
    Next,
    /// Play again.
    Reset,
    /// A player leaves the table.
    RemovePlayer(PlayerId),
}

/// One applied event, kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub turn: u32,
    pub round: u32,
    pub from: Phase,
    pub to: Phase,
    pub event: Event,
}
