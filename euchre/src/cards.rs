use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card in a 24-card euchre deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♠")]
    Spade,
    #[serde(rename = "♣")]
    Club,
}

/// The rank of a [card](Card). A euchre deck only contains nine and up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

/// The color of a [suit](Suit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// The clubs and spades.
    Black,
    /// The diamonds and hearts.
    Red,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }

    /// The other suit of the same color, e.g. hearts for diamonds.
    ///
    /// The jack of this suit is the left bower when `self` is trump.
    pub fn same_color_partner(self) -> Suit {
        match self {
            Suit::Diamond => Suit::Heart,
            Suit::Heart => Suit::Diamond,
            Suit::Spade => Suit::Club,
            Suit::Club => Suit::Spade,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unicode_char())
    }
}

impl Card {
    /// Render this card as a Unicode playing cards character
    pub fn unicode_char(&self) -> char {
        // https://en.wikipedia.org/wiki/Playing_Cards_(Unicode_block)
        let row = match self.suit {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Diamond => 2,
            Suit::Club => 3,
        };
        let col = match self.rank {
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 13,
            Rank::King => 14,
            Rank::Ace => 1,
        };
        let codepoint = 0x1F0A0 + 16 * row + col;
        char::from_u32(codepoint).unwrap()
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug)]
pub enum CardFromStrErr {
    TooFewChars,
    TooManyChars,
    InvalidRank,
    InvalidSuit,
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let rank_char = chars.next().ok_or(CardFromStrErr::TooFewChars)?;
        let suit_char = chars.next().ok_or(CardFromStrErr::TooFewChars)?;
        if chars.next().is_some() {
            return Err(CardFromStrErr::TooManyChars);
        }
        let rank = match rank_char {
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        let suit = match suit_char {
            '♦' => Suit::Diamond,
            '♥' => Suit::Heart,
            '♠' => Suit::Spade,
            '♣' => Suit::Club,
            _ => return Err(CardFromStrErr::InvalidSuit),
        };
        Ok(Card { rank, suit })
    }
}

/// Shorthand for creating cards from a two-character string.
///
/// The first character is the [rank](Rank) (note: 10 is `T`), the second is
/// the [suit](Suit) as a unicode character (♦, ♥, ♠, or ♣).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use euchre::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("T♥"),
///     Card { rank: Rank::Ten, suit: Suit::Heart }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

pub static FULL_DECK: [Card; 24] = [
    Card {
        suit: Suit::Diamond,
        rank: Rank::Nine,
    },
    Card {
        suit: Suit::Diamond,
        rank: Rank::Ten,
    },
    Card {
        suit: Suit::Diamond,
        rank: Rank::Jack,
    },
    Card {
        suit: Suit::Diamond,
        rank: Rank::Queen,
    },
    Card {
        suit: Suit::Diamond,
        rank: Rank::King,
    },
    Card {
        suit: Suit::Diamond,
        rank: Rank::Ace,
    },
    Card {
        suit: Suit::Heart,
        rank: Rank::Nine,
    },
    Card {
        suit: Suit::Heart,
        rank: Rank::Ten,
    },
    Card {
        suit: Suit::Heart,
        rank: Rank::Jack,
    },
    Card {
        suit: Suit::Heart,
        rank: Rank::Queen,
    },
    Card {
        suit: Suit::Heart,
        rank: Rank::King,
    },
    Card {
        suit: Suit::Heart,
        rank: Rank::Ace,
    },
    Card {
        suit: Suit::Spade,
        rank: Rank::Nine,
    },
    Card {
        suit: Suit::Spade,
        rank: Rank::Ten,
    },
    Card {
        suit: Suit::Spade,
        rank: Rank::Jack,
    },
    Card {
        suit: Suit::Spade,
        rank: Rank::Queen,
    },
    Card {
        suit: Suit::Spade,
        rank: Rank::King,
    },
    Card {
        suit: Suit::Spade,
        rank: Rank::Ace,
    },
    Card {
        suit: Suit::Club,
        rank: Rank::Nine,
    },
    Card {
        suit: Suit::Club,
        rank: Rank::Ten,
    },
    Card {
        suit: Suit::Club,
        rank: Rank::Jack,
    },
    Card {
        suit: Suit::Club,
        rank: Rank::Queen,
    },
    Card {
        suit: Suit::Club,
        rank: Rank::King,
    },
    Card {
        suit: Suit::Club,
        rank: Rank::Ace,
    },
];
