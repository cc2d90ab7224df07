use serde::{Deserialize, Serialize};

use crate::{Seat, Team};

/// What happened to a completed trick.
///
/// Returned by `score_trick` so a caller can render the outcome; the engine
/// itself never announces anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSummary {
    pub winner: Seat,
    pub team: Team,
    /// Trick tally after this trick, indexed by [`Team::index`].
    pub tricks_won: [u8; 2],
}

/// How a round ended, from the winning team's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// The lone caller took all five tricks.
    MarchAlone,
    /// The calling team took all five tricks.
    March,
    /// The calling team took three or four tricks.
    Single,
    /// The defenders took three or more tricks, denying the contract.
    Euchre,
}

impl RoundResult {
    /// The euchre point table.
    pub fn points(self) -> u32 {
        match self {
            RoundResult::MarchAlone => 4,
            RoundResult::March => 2,
            RoundResult::Single => 1,
            RoundResult::Euchre => 2,
        }
    }
}

/// What happened to a completed round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub winning_team: Team,
    pub result: RoundResult,
    /// Points awarded to `winning_team`, per [`RoundResult::points`].
    pub points: u32,
    /// Final trick tally of the round, indexed by [`Team::index`].
    pub tricks_won: [u8; 2],
    pub next_dealer: Seat,
}

pub(crate) fn round_result(
    caller_team: Team,
    winning_team: Team,
    winning_tricks: u8,
    alone: bool,
) -> RoundResult {
    if winning_team != caller_team {
        RoundResult::Euchre
    } else if winning_tricks == 5 {
        if alone {
            RoundResult::MarchAlone
        } else {
            RoundResult::March
        }
    } else {
        RoundResult::Single
    }
}
