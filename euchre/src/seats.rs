use serde::{Deserialize, Serialize};

/// One of the four positions at the table, identified by an index in 0..=3.
///
/// Turn order is ascending index, wrapping around after seat 3. Seats 0 and 2
/// form [team A](Team::A), seats 1 and 3 [team B](Team::B).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(u8);

/// All four seats, in turn order.
pub static SEATS: [Seat; 4] = [Seat(0), Seat(1), Seat(2), Seat(3)];

impl Seat {
    /// Creates a seat from its index.
    ///
    /// Panics if `index` is not in 0..=3.
    pub fn new(index: u8) -> Self {
        assert!(index < 4, "seat index out of range: {}", index);
        Seat(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, which plays next in turn order.
    pub fn next(self) -> Seat {
        Seat((self.0 + 1) % 4)
    }

    /// The seat directly across the table.
    pub fn partner(self) -> Seat {
        Seat((self.0 + 2) % 4)
    }

    pub fn team(self) -> Team {
        if self.0 % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// One of the two partnerships: seats {0, 2} are team A, seats {1, 3} team B.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Position of this team in the 2-element score and trick tallies.
    pub fn index(self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "team A"),
            Team::B => write!(f, "team B"),
        }
    }
}

/// A participant in a game, fixed to one seat for the game's duration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub seat: Seat,
}
