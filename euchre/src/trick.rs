use serde::{Deserialize, Serialize};

use crate::{Card, Seat, Suit, TrickNotComplete, SEATS};

/// What a single seat has contributed to a trick so far.
///
/// A seat whose partner plays alone is [`Out`](SeatEntry::Out) for the whole
/// round; that is a different state than simply not having played yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatEntry {
    Out,
    Pending,
    Played(Card),
}

impl SeatEntry {
    pub fn card(self) -> Option<Card> {
        match self {
            SeatEntry::Played(card) => Some(card),
            _ => None,
        }
    }
}

/// One pass around the table: up to four cards, one per live seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trick {
    entries: [SeatEntry; 4],
    led: Option<Card>,
}

impl Trick {
    /// Creates an empty trick. `out` marks the seat sitting out this round,
    /// if any.
    pub fn new(out: Option<Seat>) -> Self {
        let mut entries = [SeatEntry::Pending; 4];
        if let Some(seat) = out {
            entries[seat.index()] = SeatEntry::Out;
        }
        Trick { entries, led: None }
    }

    pub fn entry(&self, seat: Seat) -> SeatEntry {
        self.entries[seat.index()]
    }

    /// The first card played this trick, which defines the suit to follow.
    pub fn led(&self) -> Option<Card> {
        self.led
    }

    /// Number of cards on the table.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.card().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.led.is_none()
    }

    /// A trick is complete once every seat that is not sitting out has played.
    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| !matches!(entry, SeatEntry::Pending))
    }

    /// Records a card for a seat. The caller is responsible for validating
    /// the play first.
    pub(crate) fn record(&mut self, seat: Seat, card: Card) {
        debug_assert!(matches!(self.entry(seat), SeatEntry::Pending));
        if self.led.is_none() {
            self.led = Some(card);
        }
        self.entries[seat.index()] = SeatEntry::Played(card);
    }

    /// Determines which seat won a completed trick under `trump`.
    ///
    /// Scans the seats in turn order, keeping the best card seen so far.
    /// A trump card displaces any non-trump best; among cards of the same
    /// effective suit, strictly higher power wins. An off-suit card never
    /// displaces the best, whatever its rank.
    pub fn winner(&self, trump: Suit) -> Result<Seat, TrickNotComplete> {
        if !self.is_complete() {
            let waiting_on = SEATS
                .iter()
                .copied()
                .filter(|&seat| matches!(self.entry(seat), SeatEntry::Pending))
                .collect();
            return Err(TrickNotComplete { waiting_on });
        }

        let mut best: Option<(Seat, Card)> = None;
        for seat in SEATS {
            let Some(card) = self.entry(seat).card() else {
                continue;
            };
            let beats_best = match best {
                None => true,
                Some((_, best_card)) => {
                    if card.is_trump(trump) && !best_card.is_trump(trump) {
                        true
                    } else {
                        card.same_suit_as(best_card, trump)
                            && card.power(trump) > best_card.power(trump)
                    }
                }
            };
            if beats_best {
                best = Some((seat, card));
            }
        }
        // Can't fail: a complete trick holds at least three cards
        Ok(best.unwrap().0)
    }
}
