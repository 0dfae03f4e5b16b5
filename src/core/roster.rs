//! Ordered player roster and rotating role cursors.
//!
//! ## Roster
//!
//! Seat order is insertion order. Scores only change through
//! [`Roster::award_point`], which can only add.
//!
//! ## RoleCursor
//!
//! Each rotating role (actor, judge) is an independent index into the same
//! roster. Cursors are repaired on removal so they never point past the end.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::{rank_by_score, Player, PlayerId};

/// Ordered list of players with cumulative scores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u32,
    locked: bool,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from display names, in seat order.
    pub fn with_names<I, S>(names: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add(name)?;
        }
        Ok(roster)
    }

    /// Append a player with score 0.
    ///
    /// Rejects blank names. Existing cursors are unaffected since the new
    /// player always lands at the end.
    pub fn add(&mut self, name: impl Into<String>) -> Result<PlayerId, EngineError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidName);
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.players.push(Player::new(id, trimmed));
        Ok(id)
    }

    /// Remove a player, returning the seat they occupied.
    ///
    /// Callers holding [`RoleCursor`]s must pass the seat to
    /// [`RoleCursor::on_removed`].
    pub fn remove(&mut self, id: PlayerId) -> Result<(usize, Player), EngineError> {
        let seat = self.position(id).ok_or(EngineError::UnknownPlayer(id))?;
        let player = self.players.remove(seat);
        Ok((seat, player))
    }

    /// Rename a player. Rejected once the roster is locked for play.
    pub fn rename(&mut self, id: PlayerId, name: impl Into<String>) -> Result<(), EngineError> {
        if self.locked {
            return Err(EngineError::RosterLocked);
        }
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidName);
        }
        let player = self.get_mut(id).ok_or(EngineError::UnknownPlayer(id))?;
        player.name = trimmed.to_string();
        Ok(())
    }

    /// Add `delta` to a player's score, returning the new total.
    pub fn award_point(&mut self, id: PlayerId, delta: u32) -> Result<u32, EngineError> {
        let player = self.get_mut(id).ok_or(EngineError::UnknownPlayer(id))?;
        player.add_score(delta);
        Ok(player.score())
    }

    /// Next seat in round-robin order.
    #[must_use]
    pub fn rotate(&self, current: usize) -> usize {
        if self.players.is_empty() {
            0
        } else {
            (current + 1) % self.players.len()
        }
    }

    /// Players sorted by score, highest first. Ties keep seat order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&Player> {
        rank_by_score(&self.players)
    }

    /// Reset every score to 0, keeping names and seat order.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.clear_score();
        }
    }

    /// Remove every player. Ids keep increasing.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Get the player in a seat.
    #[must_use]
    pub fn at(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Seat of a player.
    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Check if a player is seated.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate player IDs in seat order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    /// Players as a slice, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

/// Index of a rotating role (actor, judge) into a roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCursor {
    seat: usize,
}

impl RoleCursor {
    /// Cursor starting at a seat.
    #[must_use]
    pub const fn at(seat: usize) -> Self {
        Self { seat }
    }

    /// Current seat.
    #[must_use]
    pub const fn seat(self) -> usize {
        self.seat
    }

    /// Advance one seat, wrapping.
    pub fn advance(&mut self, roster: &Roster) {
        self.seat = roster.rotate(self.seat);
    }

    /// Repair after the player in `removed_seat` left.
    ///
    /// Removal at or before the cursor steps it back one seat (wrapping), so
    /// the next advance lands on the removed player's successor.
    pub fn on_removed(&mut self, removed_seat: usize, new_len: usize) {
        if new_len == 0 {
            self.seat = 0;
            return;
        }
        if removed_seat <= self.seat {
            self.seat = if self.seat == 0 { new_len - 1 } else { self.seat - 1 };
        }
        if self.seat >= new_len {
            self.seat = new_len - 1;
        }
    }

    /// The player under the cursor.
    #[must_use]
    pub fn player(self, roster: &Roster) -> Option<PlayerId> {
        roster.at(self.seat).map(|p| p.id)
    }
}
