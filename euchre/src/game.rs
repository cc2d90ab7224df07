use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::scoring::round_result;
use crate::{
    Card, ContractState, IllegalPlay, Player, Round, RoundNotComplete, RoundSummary, Seat,
    SetupError, Suit, Team, TrickNotComplete, TrickSummary, SEATS,
};

/// Points a team needs to win the match.
pub const WINNING_SCORE: u32 = 10;

/// A full match: four fixed players, one live round at a time, and the
/// running team score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    players: [Player; 4],
    round_counter: u32,
    round: Round,
    score: [u32; 2],
}

impl Game {
    /// Seats the four named players in order and deals the first round, with
    /// the player at seat 0 dealing.
    pub fn new(names: Vec<String>, rng: &mut StdRng) -> Result<Game, SetupError> {
        if names.len() != 4 {
            return Err(SetupError::WrongPlayerCount { count: names.len() });
        }
        let mut names = names.into_iter();
        let players = SEATS.map(|seat| Player {
            name: names.next().unwrap(), // Can't fail, length was checked above
            seat,
        });
        Ok(Game {
            players,
            round_counter: 0,
            round: Round::new(Seat::new(0), rng),
            score: [0, 0],
        })
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Number of completed rounds.
    pub fn round_counter(&self) -> u32 {
        self.round_counter
    }

    /// Match score, indexed by [`Team::index`].
    pub fn score(&self) -> [u32; 2] {
        self.score
    }

    /// The first team to reach [`WINNING_SCORE`], if any.
    pub fn winner(&self) -> Option<Team> {
        self.first_to(WINNING_SCORE)
    }

    /// The first team at or past `target` points, for matches played to a
    /// score other than the standard one.
    pub fn first_to(&self, target: u32) -> Option<Team> {
        if self.score[Team::A.index()] >= target {
            Some(Team::A)
        } else if self.score[Team::B.index()] >= target {
            Some(Team::B)
        } else {
            None
        }
    }

    /// See [`Round::declare_trump`].
    pub fn declare_trump(
        &mut self,
        trump: Suit,
        caller: Seat,
        alone: bool,
    ) -> Result<(), IllegalPlay> {
        self.round.declare_trump(trump, caller, alone)
    }

    /// See [`Round::play_card`].
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<(), IllegalPlay> {
        self.round.play_card(seat, card)
    }

    /// See [`Round::legal_plays`].
    pub fn legal_plays(&self, seat: Seat) -> Vec<Card> {
        self.round.legal_plays(seat)
    }

    /// See [`Round::trick_winner`].
    pub fn trick_winner(&self) -> Result<Seat, TrickNotComplete> {
        self.round.trick_winner()
    }

    /// See [`Round::score_trick`].
    pub fn score_trick(&mut self, winner: Seat) -> TrickSummary {
        self.round.score_trick(winner)
    }

    /// Scores a finished round, applies the points, and deals the next round
    /// with the dealer rotated one seat to the left.
    pub fn score_round(&mut self, rng: &mut StdRng) -> Result<RoundSummary, RoundNotComplete> {
        let tricks_completed = self.round.trick_counter();
        let ContractState::Declared(contract) = self.round.contract() else {
            return Err(RoundNotComplete { tricks_completed });
        };
        if tricks_completed < 5 {
            return Err(RoundNotComplete { tricks_completed });
        }

        let tricks_won = self.round.tricks_won();
        // Five tricks split between two teams cannot tie
        let winning_team = if tricks_won[0] > tricks_won[1] {
            Team::A
        } else {
            Team::B
        };
        let result = round_result(
            contract.caller.team(),
            winning_team,
            tricks_won[winning_team.index()],
            contract.alone,
        );
        let points = result.points();
        self.score[winning_team.index()] += points;
        self.round_counter += 1;
        let next_dealer = self.round.dealer().next();
        self.round = Round::new(next_dealer, rng);
        Ok(RoundSummary {
            winning_team,
            result,
            points,
            tricks_won,
            next_dealer,
        })
    }

    #[cfg(test)]
    pub(crate) fn install_round(&mut self, round: Round) {
        self.round = round;
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::SeedableRng;

    use super::*;
    use crate::{card, RoundResult};

    fn test_names() -> Vec<String> {
        ["Ada", "Ben", "Cleo", "Dot"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    // Plays the whole round with the first legal card each time. Turn order
    // is a caller concern, so the test loop provides it: first lead is left
    // of the dealer, later tricks are led by the previous winner.
    fn play_out_round(game: &mut Game, trump: Suit, caller: Seat, alone: bool) {
        game.declare_trump(trump, caller, alone).unwrap();
        let out = game.round().out_seat();
        let mut leader = game.round().dealer().next();
        if Some(leader) == out {
            leader = leader.next();
        }
        for _ in 0..5 {
            let mut seat = leader;
            for _ in 0..4 {
                if Some(seat) != out {
                    let card = game.legal_plays(seat)[0];
                    game.play_card(seat, card).unwrap();
                }
                seat = seat.next();
            }
            let winner = game.trick_winner().unwrap();
            game.score_trick(winner);
            leader = winner;
        }
    }

    // Trump will be spades; seat 0 holds the five strongest trump cards and
    // wins every trick it leads. Three cards stay undealt, as in a real deal.
    fn stacked_round() -> Round {
        let hands = [
            vec![card!("J♠"), card!("J♣"), card!("A♠"), card!("K♠"), card!("Q♠")],
            vec![card!("A♥"), card!("K♥"), card!("Q♥"), card!("J♥"), card!("T♥")],
            vec![card!("9♠"), card!("A♦"), card!("K♦"), card!("Q♦"), card!("J♦")],
            vec![card!("9♥"), card!("A♣"), card!("K♣"), card!("Q♣"), card!("T♣")],
        ];
        Round::from_parts(hands, card!("T♠"), Seat::new(0))
    }

    fn play_trick(game: &mut Game, plays: &[(u8, &str)]) -> TrickSummary {
        for &(seat, code) in plays {
            let card: Card = code.parse().expect("bad card code in test");
            game.play_card(Seat::new(seat), card).unwrap();
        }
        let winner = game.trick_winner().unwrap();
        game.score_trick(winner)
    }

    #[test]
    fn exactly_four_players_are_required() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Game::new(vec!["Ada".into(), "Ben".into()], &mut rng).unwrap_err();
        assert_eq!(err, SetupError::WrongPlayerCount { count: 2 });
        assert!(Game::new(test_names(), &mut rng).is_ok());
    }

    #[test]
    fn round_cannot_be_scored_early() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(test_names(), &mut rng).unwrap();
        let err = game.score_round(&mut rng).unwrap_err();
        assert_eq!(err, RoundNotComplete { tricks_completed: 0 });
    }

    #[test]
    fn defenders_taking_the_round_is_a_euchre() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(test_names(), &mut rng).unwrap();
        game.install_round(stacked_round());
        // Seat 1 (team B) calls spades, but team A holds all the trump.
        game.declare_trump(Suit::Spade, Seat::new(1), false).unwrap();

        play_trick(&mut game, &[(1, "A♥"), (2, "9♠"), (3, "9♥"), (0, "Q♠")]);
        play_trick(&mut game, &[(0, "J♠"), (1, "T♥"), (2, "A♦"), (3, "A♣")]);
        play_trick(&mut game, &[(0, "J♣"), (1, "K♥"), (2, "K♦"), (3, "K♣")]);
        play_trick(&mut game, &[(0, "A♠"), (1, "Q♥"), (2, "Q♦"), (3, "Q♣")]);
        let last = play_trick(&mut game, &[(0, "K♠"), (1, "J♥"), (2, "J♦"), (3, "T♣")]);
        assert_eq!(last.tricks_won, [5, 0]);

        let summary = game.score_round(&mut rng).unwrap();
        assert_eq!(summary.winning_team, Team::A);
        assert_eq!(summary.result, RoundResult::Euchre);
        assert_eq!(summary.points, 2);
        assert_eq!(game.score(), [2, 0]);
        assert_eq!(game.round_counter(), 1);
        // Dealer rotates one seat to the left for the fresh round
        assert_eq!(summary.next_dealer, Seat::new(1));
        assert_eq!(game.round().dealer(), Seat::new(1));
        assert_eq!(game.round().trick_counter(), 0);

        // Two points win a match played to two, but not a standard one
        assert_eq!(game.first_to(2), Some(Team::A));
        assert_eq!(game.first_to(3), None);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn lone_march_scores_four_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(test_names(), &mut rng).unwrap();
        game.install_round(stacked_round());
        // Seat 0 calls spades alone; seat 2 sits out all five tricks.
        game.declare_trump(Suit::Spade, Seat::new(0), true).unwrap();
        assert_eq!(game.round().out_seat(), Some(Seat::new(2)));

        play_trick(&mut game, &[(0, "J♠"), (1, "A♥"), (3, "A♣")]);
        play_trick(&mut game, &[(0, "J♣"), (1, "K♥"), (3, "K♣")]);
        play_trick(&mut game, &[(0, "A♠"), (1, "Q♥"), (3, "Q♣")]);
        play_trick(&mut game, &[(0, "K♠"), (1, "J♥"), (3, "T♣")]);
        play_trick(&mut game, &[(0, "Q♠"), (1, "T♥"), (3, "9♥")]);

        let summary = game.score_round(&mut rng).unwrap();
        assert_eq!(summary.result, RoundResult::MarchAlone);
        assert_eq!(summary.points, 4);
        assert_eq!(game.score(), [4, 0]);
    }

    #[test]
    fn calling_team_with_three_tricks_scores_one_point() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(test_names(), &mut rng).unwrap();
        let hands = [
            vec![card!("J♠"), card!("J♣"), card!("A♠"), card!("9♥"), card!("9♦")],
            vec![card!("K♠"), card!("Q♠"), card!("A♥"), card!("K♥"), card!("Q♥")],
            vec![card!("9♠"), card!("T♠"), card!("A♦"), card!("K♦"), card!("Q♦")],
            vec![card!("A♣"), card!("K♣"), card!("Q♣"), card!("T♥"), card!("T♦")],
        ];
        game.install_round(Round::from_parts(hands, card!("9♣"), Seat::new(0)));
        game.declare_trump(Suit::Spade, Seat::new(0), false).unwrap();

        play_trick(&mut game, &[(0, "J♠"), (1, "K♠"), (2, "9♠"), (3, "A♣")]);
        play_trick(&mut game, &[(0, "J♣"), (1, "Q♠"), (2, "T♠"), (3, "K♣")]);
        play_trick(&mut game, &[(0, "A♠"), (1, "A♥"), (2, "A♦"), (3, "Q♣")]);
        play_trick(&mut game, &[(0, "9♥"), (1, "K♥"), (2, "K♦"), (3, "T♥")]);
        let last = play_trick(&mut game, &[(1, "Q♥"), (2, "Q♦"), (3, "T♦"), (0, "9♦")]);
        assert_eq!(last.tricks_won, [3, 2]);

        let summary = game.score_round(&mut rng).unwrap();
        assert_eq!(summary.result, RoundResult::Single);
        assert_eq!(summary.points, 1);
        // Defenders get nothing for their two tricks
        assert_eq!(game.score(), [1, 0]);
    }

    quickcheck! {
        fn every_scored_round_is_worth_one_two_or_four_points(
            seed: u64,
            trump: Suit,
            caller: Seat,
            alone: bool
        ) -> bool {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new(test_names(), &mut rng).unwrap();
            play_out_round(&mut game, trump, caller, alone);

            let dealer_before = game.round().dealer();
            let summary = game.score_round(&mut rng).unwrap();

            let points_ok = [1, 2, 4].contains(&summary.points)
                && summary.points == summary.result.points();
            let euchred = summary.winning_team != caller.team();
            let euchre_ok = euchred == (summary.result == RoundResult::Euchre);
            let tally_ok = summary.tricks_won[0] + summary.tricks_won[1] == 5;
            let rotation_ok = game.round().dealer() == dealer_before.next()
                && game.round_counter() == 1
                && game.score()[summary.winning_team.index()] == summary.points;
            points_ok && euchre_ok && tally_ok && rotation_ok
        }
    }
}
