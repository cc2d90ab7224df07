use crate::{Card, Rank, Suit};

// Trump-aware ranking. Everything here is a pure function of (card, trump);
// play validation and trick resolution are built on these.
impl Card {
    /// The jack of the trump suit, the highest card in play.
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    /// The jack of the suit sharing trump's color, second-highest in play.
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.same_color_partner()
    }

    /// Whether this card counts as trump. The left bower does, despite its
    /// printed suit.
    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump || self.is_left_bower(trump)
    }

    /// The suit this card belongs to for follow-suit purposes: trump for the
    /// left bower, the printed suit for every other card.
    pub fn effective_suit(self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }

    pub fn same_suit_as(self, other: Card, trump: Suit) -> bool {
        self.effective_suit(trump) == other.effective_suit(trump)
    }

    /// Ordinal strength of this card under `trump`: right bower 8, left
    /// bower 7, then A 6, K 5, Q 4, J 3, 10 2, 9 1.
    ///
    /// Only meaningful between cards of the same effective suit. Whether a
    /// trump card beats a plain one is decided by [`is_trump`](Self::is_trump),
    /// never by comparing powers across suits.
    pub fn power(self, trump: Suit) -> u8 {
        if self.is_right_bower(trump) {
            8
        } else if self.is_left_bower(trump) {
            7
        } else {
            match self.rank {
                Rank::Ace => 6,
                Rank::King => 5,
                Rank::Queen => 4,
                // A jack of the trump color never reaches this branch
                Rank::Jack => 3,
                Rank::Ten => 2,
                Rank::Nine => 1,
            }
        }
    }
}
