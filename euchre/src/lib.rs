pub use cards::*;
pub use deck::*;
pub use errors::*;
pub use game::*;
pub use round::*;
pub use scoring::*;
pub use seats::*;
pub use trick::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod deck;
mod errors;
mod game;
mod ranking;
mod round;
mod scoring;
mod seats;
mod trick;
