//! Engine error type.
//!
//! Every variant is a configuration or setup problem. Events arriving
//! during play never produce an error; an event that doesn't apply to the
//! current phase is ignored instead.

use crate::content::ContentId;

use super::player::PlayerId;

/// Rejected configuration, roster edit, or catalog.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("need at least {required} players, have {actual}")]
    RosterTooSmall { required: usize, actual: usize },

    #[error("round count must be at least 1")]
    ZeroRounds,

    #[error("select at least one pack")]
    NoPackSelected,

    #[error("content catalog is empty")]
    EmptyCatalog,

    #[error("player names are fixed once play starts")]
    RosterLocked,

    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("player name must not be blank")]
    InvalidName,

    #[error("duplicate content id: {0}")]
    DuplicateContentId(ContentId),

    #[error("invalid catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("invalid game config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::RosterTooSmall { required: 3, actual: 1 };
        assert_eq!(err.to_string(), "need at least 3 players, have 1");

        let err = EngineError::UnknownPlayer(PlayerId::new(4));
        assert_eq!(err.to_string(), "unknown player: Player 4");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: EngineError = json_err.into();
        assert!(matches!(err, EngineError::CatalogParse(_)));
    }
}
