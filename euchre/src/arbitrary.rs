use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Card, Rank, Round, Seat, Suit};

impl quickcheck::Arbitrary for Suit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club])
            .unwrap()
    }
}

impl quickcheck::Arbitrary for Rank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ])
        .unwrap()
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}

impl quickcheck::Arbitrary for Seat {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&crate::SEATS).unwrap()
    }
}

/// A freshly dealt round with a random dealer, still awaiting a trump call.
#[derive(Clone, Debug)]
pub struct DealtRound(pub Round);

impl quickcheck::Arbitrary for DealtRound {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        DealtRound(Round::new(Seat::arbitrary(g), &mut rng))
    }
}

/// Four pairwise distinct cards, one full trick's worth.
#[derive(Clone, Debug)]
pub struct FourDistinctCards(pub [Card; 4]);

impl quickcheck::Arbitrary for FourDistinctCards {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut cards = Vec::with_capacity(4);
        while cards.len() < 4 {
            let card = Card::arbitrary(g);
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
        FourDistinctCards(cards.try_into().unwrap())
    }
}
