//! Read-only view handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::event::{Selection, Vote};
use super::phase::Phase;
use crate::content::ContentItem;
use crate::core::{rank_by_score, Player, PlayerId};

/// Everything a screen needs to render the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub round_number: u32,
    pub total_rounds: u32,
    pub turn_number: u32,

    /// Hidden (`None`) while the pre-reveal countdown runs.
    pub current_content: Option<ContentItem>,

    /// Players in seat order.
    pub roster: Vec<Player>,

    pub pending_selection: Option<Selection>,
    pub actor: Option<PlayerId>,
    pub judge: Option<PlayerId>,
    pub votes: Vec<Vote>,
    pub pending_points: u32,
    pub timer_remaining: Option<u32>,
}

impl RoundSnapshot {
    /// Players sorted by score, highest first. Ties keep seat order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&Player> {
        rank_by_score(&self.roster)
    }

    /// Score of one player, if seated.
    #[must_use]
    pub fn score_of(&self, id: PlayerId) -> Option<u32> {
        self.roster.iter().find(|p| p.id == id).map(Player::score)
    }
}
