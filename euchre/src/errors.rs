use crate::{Card, Seat, Suit};

/// The error type for [`Game::new`](crate::Game::new).
#[derive(Debug, PartialEq, Eq)]
pub enum SetupError {
    WrongPlayerCount { count: usize },
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::WrongPlayerCount { count } => {
                write!(f, "A game needs exactly 4 players, but {} were given", count)
            }
        }
    }
}

/// The error type for declaring trump or playing a single card.
///
/// Every variant is a caller sequencing or input mistake; the round state is
/// untouched when one is returned.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPlay {
    TrumpNotDeclared,
    TrumpAlreadyDeclared { trump: Suit },
    SittingOut { seat: Seat },
    SeatAlreadyPlayed { seat: Seat },
    CardNotInHand { card: Card },
    MustFollowSuit { led: Suit },
}

impl std::error::Error for IllegalPlay {}

impl std::fmt::Display for IllegalPlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlay::TrumpNotDeclared => {
                write!(f, "No card can be played before trump is declared")
            }
            IllegalPlay::TrumpAlreadyDeclared { trump } => {
                write!(f, "Trump was already declared ({:?}) this round", trump)
            }
            IllegalPlay::SittingOut { seat } => {
                write!(f, "{} is sitting out while their partner plays alone", seat)
            }
            IllegalPlay::SeatAlreadyPlayed { seat } => {
                write!(f, "{} already played a card this trick", seat)
            }
            IllegalPlay::CardNotInHand { card } => {
                write!(f, "The player's hand does not contain {}", card)
            }
            IllegalPlay::MustFollowSuit { led } => {
                write!(f, "Player holds a card of the led suit ({:?}) and must follow it", led)
            }
        }
    }
}

/// The error type for resolving a trick before every live seat has played.
#[derive(Debug, PartialEq, Eq)]
pub struct TrickNotComplete {
    /// The seats that still owe a card, in turn order.
    pub waiting_on: Vec<Seat>,
}

impl std::error::Error for TrickNotComplete {}

impl std::fmt::Display for TrickNotComplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trick is not complete, still waiting on {} seat(s)", self.waiting_on.len())
    }
}

/// The error type for scoring a round before all five tricks are recorded.
#[derive(Debug, PartialEq, Eq)]
pub struct RoundNotComplete {
    pub tricks_completed: u8,
}

impl std::error::Error for RoundNotComplete {}

impl std::fmt::Display for RoundNotComplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round cannot be scored after only {} of 5 tricks",
            self.tricks_completed
        )
    }
}
