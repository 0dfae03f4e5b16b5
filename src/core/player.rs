//! Player identification and per-player score.
//!
//! ## PlayerId
//!
//! Stable identifier allocated by the roster. Ids are never reused within a
//! roster, so a removed player's id can't be confused with a later one.
//!
//! ## Player
//!
//! A participant: display name plus cumulative score. The score is a `u32`,
//! so it can't go negative, and only the roster's scoring path mutates it.

use serde::{Deserialize, Serialize};

/// Stable player identifier, unique within a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier.
    pub id: PlayerId,

    /// Display name. Fixed once play starts.
    pub name: String,

    /// Cumulative score for this session.
    score: u32,
}

impl Player {
    /// Create a new player with score 0.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn add_score(&mut self, delta: u32) {
        self.score = self.score.saturating_add(delta);
    }

    pub(crate) fn clear_score(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.score)
    }
}

/// Players ordered by score, highest first. Ties keep their input order.
#[must_use]
pub fn rank_by_score<'a, I>(players: I) -> Vec<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut board: Vec<&Player> = players.into_iter().collect();
    // sort_by is stable
    board.sort_by(|a, b| b.score().cmp(&a.score()));
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_score_keeps_tie_order() {
        let mut players: Vec<Player> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u32), *name))
            .collect();
        players[1].add_score(2);
        players[2].add_score(1);
        players[3].add_score(2);

        let names: Vec<&str> = rank_by_score(&players).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Player 7");
    }

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new(PlayerId::new(0), "Ada");
        assert_eq!(player.score(), 0);
        assert_eq!(player.name, "Ada");
    }

    #[test]
    fn test_score_saturates() {
        let mut player = Player::new(PlayerId::new(0), "Ada");
        player.add_score(u32::MAX);
        player.add_score(5);
        assert_eq!(player.score(), u32::MAX);

        player.clear_score();
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_display() {
        let mut player = Player::new(PlayerId::new(1), "Bo");
        player.add_score(3);
        assert_eq!(format!("{}", player), "Bo(3)");
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(2), "Cy");
        player.add_score(4);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
