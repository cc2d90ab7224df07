use euchre::{Card, Suit};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Decides one seat's moves.
///
/// The engine validates everything a strategy returns, so a buggy strategy
/// surfaces as an `IllegalPlay` instead of corrupting the game.
pub trait Strategy {
    /// Called when this seat gets to name trump. Returns the suit and
    /// whether to go alone.
    fn call_trump(&mut self, kitty: Card) -> (Suit, bool);

    /// Picks one of the plays the engine currently allows. `legal` is never
    /// empty when this is called.
    fn choose_play(&mut self, legal: &[Card]) -> Card;
}

/// Plays uniformly random legal moves; calls the kitty's suit most of the
/// time and occasionally goes alone.
pub struct RandomStrategy {
    pub rng: StdRng,
}

impl Strategy for RandomStrategy {
    fn call_trump(&mut self, kitty: Card) -> (Suit, bool) {
        let trump = if self.rng.gen_bool(0.75) {
            kitty.suit
        } else {
            *[Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club]
                .choose(&mut self.rng)
                .unwrap()
        };
        let alone = self.rng.gen_bool(0.1);
        (trump, alone)
    }

    fn choose_play(&mut self, legal: &[Card]) -> Card {
        *legal.choose(&mut self.rng).unwrap()
    }
}
