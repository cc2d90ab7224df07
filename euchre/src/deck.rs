use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Card, FULL_DECK};

/// The 24 euchre cards in a canonical order.
pub fn standard_deck() -> Vec<Card> {
    Vec::from(FULL_DECK)
}

/// Shuffles a deck in place.
pub fn shuffle_deck(deck: &mut [Card], rng: &mut StdRng) {
    deck.shuffle(rng);
}

/// Deals four 5-card hands plus the kitty card, consuming the deck.
///
/// Cards come off the back of the deck, one per seat per pass, for five
/// passes. The next card after that is turned up as the kitty.
///
/// Panics if the deck holds fewer than 21 cards.
pub fn deal(mut deck: Vec<Card>) -> ([Vec<Card>; 4], Card) {
    assert!(
        deck.len() >= 21,
        "cannot deal from a deck of {} cards",
        deck.len()
    );
    let mut hands: [Vec<Card>; 4] = Default::default();
    for _ in 0..5 {
        for hand in hands.iter_mut() {
            hand.push(deck.pop().unwrap()); // Can't fail, length was checked above
        }
    }
    let kitty = deck.pop().unwrap();
    (hands, kitty)
}
