pub use self::{board_size::*, cell::*, coord::*, direction::*, grid::*};

pub(crate) mod board_size;
pub(crate) mod cell;
pub(crate) mod coord;
pub(crate) mod direction;
pub(crate) mod grid;
