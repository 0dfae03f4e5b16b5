//! Game configuration types.
//!
//! Each game supplies a `GameConfig` describing its shape:
//! - Who is active each turn (actor, optional judge)
//! - How a turn resolves (`ScoringPolicy`)
//! - When the game ends (`EndCondition`, optional target score)
//! - Which optional phases exist (handoff, countdown, turn timer)
//!
//! The engine never hardcodes a particular game. `RoundSettings` carry the
//! choices the players make per session (round count, packs).

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::roster::Roster;
use crate::content::DrawPolicy;
use crate::rules::ScoringPolicy;

/// What bounds the length of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCondition {
    /// A fixed number of rounds, chosen per session.
    #[default]
    Rounds,
    /// One full pass through the filtered content pool.
    DeckExhausted,
}

/// How much content a single turn consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnMode {
    /// One item per turn. Any resolving action ends the turn.
    #[default]
    SingleItem,
    /// Keep drawing until time runs out (Charades, Heads Up).
    Burst,
}

/// How many turns make up a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnsPerRound {
    /// A round is a single turn.
    #[default]
    One,
    /// Every seated player takes one turn per round.
    EachPlayer,
}

/// What "play again" does with the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Keep names and seat order, zero the scores.
    #[default]
    KeepRoster,
    /// Drop every player; setup starts from scratch.
    ClearRoster,
}

/// Complete description of one game's round structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Human-readable name (for logs).
    pub name: String,

    /// Minimum roster size before setup can be left.
    pub min_players: usize,

    /// Rounds played when the session doesn't choose.
    pub default_rounds: u32,

    pub end: EndCondition,

    /// End early once any player reaches this score.
    pub target_score: Option<u32>,

    pub scoring: ScoringPolicy,

    /// Points granted per award.
    pub points_per_award: u32,

    /// Insert a pass-the-device phase before each reveal.
    pub handoff: bool,

    /// Seconds of countdown between reveal and visible content.
    pub countdown_secs: Option<u32>,

    /// Seconds a prompt stays open before timing out.
    pub turn_secs: Option<u32>,

    pub turn_mode: TurnMode,

    pub turns_per_round: TurnsPerRound,

    /// Track a judge role rotating once per round.
    pub judge: bool,

    pub draw_policy: DrawPolicy,

    /// Starting requires at least one pack to be picked.
    pub requires_pack: bool,

    pub on_reset: ResetPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            min_players: 2,
            default_rounds: 10,
            end: EndCondition::Rounds,
            target_score: None,
            scoring: ScoringPolicy::None,
            points_per_award: 1,
            handoff: true,
            countdown_secs: None,
            turn_secs: None,
            turn_mode: TurnMode::SingleItem,
            turns_per_round: TurnsPerRound::One,
            judge: false,
            draw_policy: DrawPolicy::Shuffled,
            requires_pack: false,
            on_reset: ResetPolicy::KeepRoster,
        }
    }
}

impl GameConfig {
    /// Create a config with defaults and a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, EngineError> {
        Ok(toml::from_str(source)?)
    }

    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    #[must_use]
    pub fn with_default_rounds(mut self, rounds: u32) -> Self {
        self.default_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: EndCondition) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = Some(target);
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_points_per_award(mut self, points: u32) -> Self {
        self.points_per_award = points;
        self
    }

    #[must_use]
    pub fn with_handoff(mut self, handoff: bool) -> Self {
        self.handoff = handoff;
        self
    }

    #[must_use]
    pub fn with_countdown(mut self, secs: u32) -> Self {
        self.countdown_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn with_turn_timer(mut self, secs: u32) -> Self {
        self.turn_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn with_turn_mode(mut self, mode: TurnMode) -> Self {
        self.turn_mode = mode;
        self
    }

    #[must_use]
    pub fn with_turns_per_round(mut self, turns: TurnsPerRound) -> Self {
        self.turns_per_round = turns;
        self
    }

    #[must_use]
    pub fn with_judge(mut self) -> Self {
        self.judge = true;
        self
    }

    #[must_use]
    pub fn with_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }

    #[must_use]
    pub fn requiring_pack(mut self) -> Self {
        self.requires_pack = true;
        self
    }

    #[must_use]
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.on_reset = policy;
        self
    }

    /// Check the roster meets the minimum size.
    pub fn check_roster(&self, roster: &Roster) -> Result<(), EngineError> {
        let required = self.min_players.max(1);
        if roster.len() < required {
            return Err(EngineError::RosterTooSmall {
                required,
                actual: roster.len(),
            });
        }
        Ok(())
    }

    /// Check per-session choices against this config.
    pub fn check_settings(&self, settings: &RoundSettings) -> Result<(), EngineError> {
        if self.end == EndCondition::Rounds && self.rounds_for(settings) == 0 {
            return Err(EngineError::ZeroRounds);
        }
        if self.requires_pack && settings.packs.is_empty() {
            return Err(EngineError::NoPackSelected);
        }
        Ok(())
    }

    /// Round count for a session under `EndCondition::Rounds`.
    #[must_use]
    pub fn rounds_for(&self, settings: &RoundSettings) -> u32 {
        settings.rounds.unwrap_or(self.default_rounds)
    }
}

/// Choices made in the config phase of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSettings {
    /// Round count. `None` uses the game's default.
    pub rounds: Option<u32>,

    /// Selected packs/categories. Empty means the whole catalog.
    pub packs: Vec<String>,
}

impl RoundSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    #[must_use]
    pub fn with_pack(mut self, pack: impl Into<String>) -> Self {
        self.packs.push(pack.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::TiePolicy;

    #[test]
    fn test_builder() {
        let config = GameConfig::new("Charades")
            .with_min_players(2)
            .with_countdown(5)
            .with_turn_timer(60)
            .with_turn_mode(TurnMode::Burst)
            .with_scoring(ScoringPolicy::SelfScore);

        assert_eq!(config.name, "Charades");
        assert_eq!(config.countdown_secs, Some(5));
        assert_eq!(config.turn_secs, Some(60));
        assert_eq!(config.turn_mode, TurnMode::Burst);
        assert!(config.handoff);
        assert!(!config.judge);
    }

    #[test]
    fn test_check_roster() {
        let config = GameConfig::new("Paranoia").with_min_players(3);
        let roster = Roster::with_names(["A", "B"]).unwrap();

        match config.check_roster(&roster) {
            Err(EngineError::RosterTooSmall { required, actual }) => {
                assert_eq!(required, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected: {:?}", other),
        }

        let roster = Roster::with_names(["A", "B", "C"]).unwrap();
        assert!(config.check_roster(&roster).is_ok());
    }

    #[test]
    fn test_zero_min_players_still_needs_one() {
        let config = GameConfig::new("Solo").with_min_players(0);
        assert!(config.check_roster(&Roster::new()).is_err());
    }

    #[test]
    fn test_check_settings() {
        let config = GameConfig::new("Trivia").requiring_pack();

        assert!(matches!(
            config.check_settings(&RoundSettings::new().with_rounds(0).with_pack("science")),
            Err(EngineError::ZeroRounds)
        ));
        assert!(matches!(
            config.check_settings(&RoundSettings::new().with_rounds(5)),
            Err(EngineError::NoPackSelected)
        ));
        assert!(config
            .check_settings(&RoundSettings::new().with_pack("science"))
            .is_ok());
    }

    #[test]
    fn test_deck_bounded_ignores_rounds() {
        let config = GameConfig::new("Never Have I Ever").with_end(EndCondition::DeckExhausted);
        assert!(config.check_settings(&RoundSettings::new().with_rounds(0)).is_ok());
    }

    #[test]
    fn test_rounds_default() {
        let config = GameConfig::new("X").with_default_rounds(7);
        assert_eq!(config.rounds_for(&RoundSettings::new()), 7);
        assert_eq!(config.rounds_for(&RoundSettings::new().with_rounds(3)), 3);
    }

    #[test]
    fn test_from_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            name = "Most Likely To"
            min_players = 3
            default_rounds = 5
            handoff = false

            [scoring.majority_vote]
            tie = "all_tied_score"
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "Most Likely To");
        assert_eq!(config.min_players, 3);
        assert_eq!(config.default_rounds, 5);
        assert!(!config.handoff);
        assert_eq!(
            config.scoring,
            ScoringPolicy::MajorityVote { tie: TiePolicy::AllTiedScore }
        );
        // Unspecified keys keep defaults
        assert_eq!(config.points_per_award, 1);
        assert_eq!(config.on_reset, ResetPolicy::KeepRoster);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = GameConfig::from_toml_str("min_players = \"many\"").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }
}
