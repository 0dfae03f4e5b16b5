//! Round state: the engine's working memory for one session.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{Selection, Vote};
use super::phase::Phase;
use crate::content::ContentItem;
use crate::core::{PlayerId, RoleCursor, RoundSettings};

/// Mutable session state, owned by exactly one [`RoundEngine`](super::RoundEngine).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,

    /// Completed rounds. Starts at 0, only increases until reset.
    pub round_number: u32,

    /// Rounds in this game (pool size for deck-bounded games).
    pub total_rounds: u32,

    /// Completed turns.
    pub turn_number: u32,

    /// Turns completed in the current round.
    pub turn_in_round: u32,

    /// Acting/reading player.
    pub actor: RoleCursor,

    /// Judge, when the game has one.
    pub judge: RoleCursor,

    /// Item on screen, `None` before the first draw.
    pub current_content: Option<ContentItem>,

    /// Winner/answer picked this turn. Cleared on every entry into prompt.
    pub pending_selection: Option<Selection>,

    /// Votes cast this turn.
    pub votes: SmallVec<[Vote; 8]>,

    /// Points the actor has earned this turn, not yet on the roster.
    pub pending_points: u32,

    /// Settings chosen at game start.
    pub settings: RoundSettings,
}

impl RoundState {
    #[must_use]
    pub fn new(settings: RoundSettings, total_rounds: u32) -> Self {
        Self {
            total_rounds,
            settings,
            ..Self::default()
        }
    }

    /// Drop everything scoped to a single turn.
    pub(crate) fn clear_turn(&mut self) {
        self.pending_selection = None;
        self.votes.clear();
        self.pending_points = 0;
    }

    #[must_use]
    pub fn has_voted(&self, voter: PlayerId) -> bool {
        self.votes.iter().any(|v| v.voter == voter)
    }

    /// Forget a departed player's vote, and any pick naming them.
    pub(crate) fn forget_player(&mut self, id: PlayerId) {
        self.votes
            .retain(|v| v.voter != id && v.choice != Selection::Player(id));
        if self.pending_selection == Some(Selection::Player(id)) {
            self.pending_selection = None;
        }
    }
}
