use euchre::{Game, Team};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::recording::Recorder;
use crate::strategy::Strategy;

/// The outcome of one full game, played to the agreed winning score.
pub struct GameResult {
    pub winning_team: Team,
    pub rounds_played: u32,
    pub final_score: [u32; 2],
}

/// Plays one game to completion, every seat driven by its strategy.
///
/// The engine leaves turn order to its caller, so this loop provides it:
/// the seat left of the dealer bids and leads the first trick, and each
/// trick's winner leads the next one.
///
/// Returns an error if a strategy produces an illegal move; with strategies
/// restricted to `legal_plays` that indicates a bug, not a bad player.
pub fn play_game(
    rng: &mut StdRng,
    names: Vec<String>,
    strategies: &mut [Box<dyn Strategy>; 4],
    recorder: &mut Option<Recorder>,
    points_to_win: u32,
) -> anyhow::Result<GameResult> {
    let mut game = Game::new(names, rng)?;

    loop {
        let caller = game.round().dealer().next();
        let kitty = game.round().kitty();
        let (trump, alone) = strategies[caller.index()].call_trump(kitty);
        game.declare_trump(trump, caller, alone)?;
        trace!(?trump, %caller, alone, "trump declared");

        let out = game.round().out_seat();
        let mut leader = game.round().dealer().next();
        if Some(leader) == out {
            leader = leader.next();
        }
        for _ in 0..5 {
            let mut seat = leader;
            for _ in 0..4 {
                if Some(seat) != out {
                    let legal = game.legal_plays(seat);
                    let card = strategies[seat.index()].choose_play(&legal);
                    game.play_card(seat, card)?;
                    trace!(%seat, %card, "card played");
                }
                seat = seat.next();
            }
            let winner = game.trick_winner()?;
            let summary = game.score_trick(winner);
            trace!(winner = %summary.winner, tally = ?summary.tricks_won, "trick taken");
            leader = winner;
        }

        let summary = game.score_round(rng)?;
        debug!(
            team = %summary.winning_team,
            result = ?summary.result,
            points = summary.points,
            "round scored"
        );
        if let Some(rec) = recorder {
            rec.store_round(&summary);
        }

        if let Some(winning_team) = game.first_to(points_to_win) {
            if let Some(rec) = recorder {
                rec.write_game_recording(game.score())?;
            }
            return Ok(GameResult {
                winning_team,
                rounds_played: game.round_counter(),
                final_score: game.score(),
            });
        }
    }
}
