//! Scoring policies applied when a turn resolves.
//!
//! Three shapes recur across party games:
//! - **Single winner**: one nominated player gets the award
//! - **Majority vote**: everyone who voted with the majority gets the award
//! - **Self score**: the actor accumulates points during the prompt
//!
//! plus `None` for games that only advance (Truth or Dare).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{Selection, Vote};
use crate::core::PlayerId;

/// What happens when the top vote count is shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Nobody scores ("everyone drinks").
    #[default]
    NoOneScores,
    /// Every voter who picked any tied choice scores.
    AllTiedScore,
}

/// How a resolved turn turns into points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// No scoring; resolution just advances.
    #[default]
    None,
    /// The selected player receives the award.
    SingleWinner,
    /// Voters matching the modal choice receive the award.
    MajorityVote {
        #[serde(default)]
        tie: TiePolicy,
    },
    /// The actor's points earned during the prompt are flushed.
    SelfScore,
}

/// Points granted to one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub player: PlayerId,
    pub points: u32,
}

/// Everything a policy needs to settle one turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnResult<'a> {
    pub actor: Option<PlayerId>,
    pub selection: Option<Selection>,
    pub votes: &'a [Vote],
    pub pending_points: u32,
    pub points_per_award: u32,
}

impl ScoringPolicy {
    /// Awards earned by a resolved turn.
    #[must_use]
    pub fn settle(self, turn: &TurnResult<'_>) -> Vec<Award> {
        match self {
            ScoringPolicy::None => Vec::new(),
            ScoringPolicy::SingleWinner => match turn.selection {
                Some(Selection::Player(player)) => vec![Award {
                    player,
                    points: turn.points_per_award,
                }],
                _ => Vec::new(),
            },
            ScoringPolicy::MajorityVote { tie } => {
                let winning = majority(turn.votes, tie);
                turn.votes
                    .iter()
                    .filter(|v| winning.contains(&v.choice))
                    .map(|v| Award {
                        player: v.voter,
                        points: turn.points_per_award,
                    })
                    .collect()
            }
            ScoringPolicy::SelfScore => match turn.actor {
                Some(player) if turn.pending_points > 0 => vec![Award {
                    player,
                    points: turn.pending_points,
                }],
                _ => Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn uses_votes(self) -> bool {
        matches!(self, ScoringPolicy::MajorityVote { .. })
    }
}

/// Vote counts per choice, in order of first appearance.
#[must_use]
pub fn tally(votes: &[Vote]) -> Vec<(Selection, usize)> {
    let mut counts: FxHashMap<Selection, usize> = FxHashMap::default();
    let mut order = Vec::new();
    for vote in votes {
        let count = counts.entry(vote.choice).or_insert(0);
        if *count == 0 {
            order.push(vote.choice);
        }
        *count += 1;
    }
    order.into_iter().map(|c| (c, counts[&c])).collect()
}

/// The winning choice(s) under `tie`. Empty when nobody voted or a tie
/// scores nobody.
#[must_use]
pub fn majority(votes: &[Vote], tie: TiePolicy) -> SmallVec<[Selection; 2]> {
    let counts = tally(votes);
    let Some(top) = counts.iter().map(|(_, n)| *n).max() else {
        return SmallVec::new();
    };

    let leaders: SmallVec<[Selection; 2]> = counts
        .into_iter()
        .filter(|(_, n)| *n == top)
        .map(|(c, _)| c)
        .collect();

    if leaders.len() > 1 && tie == TiePolicy::NoOneScores {
        SmallVec::new()
    } else {
        leaders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YES: Selection = Selection::Choice(0);
    const NO: Selection = Selection::Choice(1);

    fn votes(choices: &[Selection]) -> Vec<Vote> {
        choices
            .iter()
            .enumerate()
            .map(|(i, c)| Vote::new(PlayerId::new(i as u32), *c))
            .collect()
    }

    fn turn(votes: &[Vote]) -> TurnResult<'_> {
        TurnResult {
            actor: None,
            selection: None,
            votes,
            pending_points: 0,
            points_per_award: 1,
        }
    }

    #[test]
    fn test_majority_yes() {
        let votes = votes(&[YES, YES, NO, YES]);
        let policy = ScoringPolicy::MajorityVote { tie: TiePolicy::NoOneScores };
        let awards = policy.settle(&turn(&votes));

        let winners: Vec<_> = awards.iter().map(|a| a.player.raw()).collect();
        assert_eq!(winners, vec![0, 1, 3]);
        assert!(awards.iter().all(|a| a.points == 1));
    }

    #[test]
    fn test_tie_no_one_scores() {
        let votes = votes(&[YES, NO, YES, NO]);
        assert!(majority(&votes, TiePolicy::NoOneScores).is_empty());

        let policy = ScoringPolicy::MajorityVote { tie: TiePolicy::NoOneScores };
        assert!(policy.settle(&turn(&votes)).is_empty());
    }

    #[test]
    fn test_tie_all_tied_score() {
        let votes = votes(&[YES, NO, YES, NO, Selection::Choice(2)]);
        let leaders = majority(&votes, TiePolicy::AllTiedScore);
        assert_eq!(leaders.as_slice(), &[YES, NO]);

        let policy = ScoringPolicy::MajorityVote { tie: TiePolicy::AllTiedScore };
        assert_eq!(policy.settle(&turn(&votes)).len(), 4);
    }

    #[test]
    fn test_no_votes() {
        assert!(majority(&[], TiePolicy::AllTiedScore).is_empty());
    }

    #[test]
    fn test_tally_order() {
        let votes = votes(&[NO, YES, NO]);
        assert_eq!(tally(&votes), vec![(NO, 2), (YES, 1)]);
    }

    #[test]
    fn test_single_winner() {
        let mut t = turn(&[]);
        assert!(ScoringPolicy::SingleWinner.settle(&t).is_empty());

        t.selection = Some(Selection::Player(PlayerId::new(2)));
        t.points_per_award = 3;
        assert_eq!(
            ScoringPolicy::SingleWinner.settle(&t),
            vec![Award { player: PlayerId::new(2), points: 3 }]
        );

        t.selection = Some(Selection::Choice(0));
        assert!(ScoringPolicy::SingleWinner.settle(&t).is_empty());
    }

    #[test]
    fn test_self_score() {
        let mut t = turn(&[]);
        t.actor = Some(PlayerId::new(1));
        assert!(ScoringPolicy::SelfScore.settle(&t).is_empty());

        t.pending_points = 4;
        assert_eq!(
            ScoringPolicy::SelfScore.settle(&t),
            vec![Award { player: PlayerId::new(1), points: 4 }]
        );
    }

    #[test]
    fn test_none_never_awards() {
        let votes = votes(&[YES]);
        let mut t = turn(&votes);
        t.selection = Some(Selection::Player(PlayerId::new(0)));
        t.pending_points = 5;
        assert!(ScoringPolicy::None.settle(&t).is_empty());
    }
}
