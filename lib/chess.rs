mod area;
mod board;
mod cell;
mod dimensions;
mod r#move;
mod movement;
mod outcome;
mod player;
mod position;
mod rank;
mod square;

pub use area::*;
pub use board::*;
pub use cell::*;
pub use dimensions::*;
pub use movement::*;
pub use outcome::*;
pub use player::*;
pub use position::*;
pub use r#move::*;
pub use rank::*;
pub use square::*;
