mod game;
mod recording;
mod strategy;
pub use game::*;
pub use recording::*;
pub use strategy::*;
