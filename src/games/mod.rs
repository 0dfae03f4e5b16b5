//! Ready-made game configurations.
//!
//! Every game is just a [`GameConfig`](crate::core::GameConfig) plus a
//! catalog. The presets below cover the round shapes the engine was built
//! for; new games compose their own config the same way.

pub mod presets;

pub use presets::{
    by_name, charades, judge_picks, most_likely_to, pig_race, trivia, truth_or_dare, PRESET_NAMES,
};
