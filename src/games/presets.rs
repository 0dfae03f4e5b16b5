//! Preset configurations for common party games.

use crate::core::{EndCondition, GameConfig, TurnMode, TurnsPerRound};
use crate::rules::{ScoringPolicy, TiePolicy};

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: &[&str] = &[
    "truth_or_dare",
    "charades",
    "most_likely_to",
    "trivia",
    "judge_picks",
    "pig_race",
];

/// Look up a preset by its snake_case name.
#[must_use]
pub fn by_name(name: &str) -> Option<GameConfig> {
    let config = match name {
        "truth_or_dare" => truth_or_dare(),
        "charades" => charades(),
        "most_likely_to" => most_likely_to(),
        "trivia" => trivia(),
        "judge_picks" => judge_picks(),
        "pig_race" => pig_race(),
        _ => return None,
    };
    Some(config)
}

/// Pass the phone, read a truth or a dare, move on. Nobody scores.
#[must_use]
pub fn truth_or_dare() -> GameConfig {
    GameConfig::new("Truth or Dare").with_default_rounds(20)
}

/// Act out as many phrases as possible before time runs out.
#[must_use]
pub fn charades() -> GameConfig {
    GameConfig::new("Charades")
        .with_scoring(ScoringPolicy::SelfScore)
        .with_turn_mode(TurnMode::Burst)
        .with_turns_per_round(TurnsPerRound::EachPlayer)
        .with_countdown(3)
        .with_turn_timer(60)
        .with_default_rounds(3)
}

/// Everyone votes on who fits the prompt; the majority scores.
///
/// Played on one shared screen, so there's no handoff.
#[must_use]
pub fn most_likely_to() -> GameConfig {
    GameConfig::new("Most Likely To")
        .with_min_players(3)
        .with_handoff(false)
        .with_scoring(ScoringPolicy::MajorityVote {
            tie: TiePolicy::NoOneScores,
        })
}

/// Answer questions from the chosen packs until the deck runs out.
#[must_use]
pub fn trivia() -> GameConfig {
    GameConfig::new("Trivia")
        .with_scoring(ScoringPolicy::SelfScore)
        .with_end(EndCondition::DeckExhausted)
        .with_turn_timer(20)
        .requiring_pack()
}

/// A rotating judge reads the prompt and picks the best answer.
#[must_use]
pub fn judge_picks() -> GameConfig {
    GameConfig::new("Judge Picks")
        .with_min_players(3)
        .with_judge()
        .with_scoring(ScoringPolicy::SingleWinner)
        .with_target_score(5)
        .with_default_rounds(30)
}

/// Bank points each turn; first to the target wins.
#[must_use]
pub fn pig_race() -> GameConfig {
    GameConfig::new("Pig Race")
        .with_scoring(ScoringPolicy::SelfScore)
        .with_turn_mode(TurnMode::Burst)
        .with_turns_per_round(TurnsPerRound::EachPlayer)
        .with_target_score(20)
        .with_default_rounds(50)
}
