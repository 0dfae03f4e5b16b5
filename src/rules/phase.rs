//! Round phases.

use serde::{Deserialize, Serialize};

/// Where a game session is in its lifecycle.
///
/// ```text
/// Setup -> Config -> Handoff -> [Countdown] -> Prompt -> Resolution -+-> Handoff | Prompt
///                                                                    +-> GameOver -> Setup
/// ```
///
/// `Countdown` is a sub-state of the prompt: content has been drawn but is
/// not visible yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Roster entry.
    #[default]
    Setup,
    /// Round count and pack selection.
    Config,
    /// Pass the device to the next player.
    Handoff,
    /// Pre-reveal countdown.
    Countdown,
    /// Content shown, awaiting resolution.
    Prompt,
    /// Scoring/voting outcome on screen.
    Resolution,
    /// Terminal until reset.
    GameOver,
}

impl Phase {
    /// Check if this phase is part of active play.
    #[must_use]
    pub fn in_play(self) -> bool {
        matches!(
            self,
            Phase::Handoff | Phase::Countdown | Phase::Prompt | Phase::Resolution
        )
    }

    /// Check if content is visible to players in this phase.
    #[must_use]
    pub fn shows_content(self) -> bool {
        matches!(self, Phase::Prompt | Phase::Resolution)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Config => "config",
            Phase::Handoff => "handoff",
            Phase::Countdown => "countdown",
            Phase::Prompt => "prompt",
            Phase::Resolution => "resolution",
            Phase::GameOver => "game_over",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
