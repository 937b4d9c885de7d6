//! Game rules and state management.
//!
//! This module builds the rules of the game on top of the [`core`](crate::core)
//! grid:
//!
//! - [`BoardState`] - Grid occupancy, turn order, win/draw bookkeeping
//! - Win detection - [`Grid::check_win`](crate::Grid::check_win),
//!   [`Grid::check_line`](crate::Grid::check_line) and
//!   [`Grid::check_draw`](crate::Grid::check_draw)
//! - [`ClawState`] - Claw position and drop phase
//! - [`GameSession`] - Owns a board and a claw and drives the drop cycle
//! - [`Snapshot`] - Serializable view of a session for renderers
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] (or [`reset`](GameSession::reset) an existing one)
//! 2. Move the claw over a column
//! 3. Start the drop; the front end animates the falling piece
//! 4. Complete the drop; the piece lands and the turn passes
//! 5. Repeat until a player lines up four pieces or the cube is full
//!
//! # Example
//!
//! ```
//! use cube4_engine::{BoardSize, GameSession, MoveDirection};
//!
//! let mut session = GameSession::new(BoardSize::DEFAULT);
//!
//! session.move_claw(MoveDirection::Left);
//! let preview = session.initiate_drop().unwrap();
//! assert_eq!(preview.row, 0);
//!
//! // ...animate the piece down to `preview.row`...
//!
//! let result = session.complete_drop().unwrap();
//! if result.game_over() {
//!     println!("{}", result.status);
//! }
//! ```

pub use self::{board_state::*, claw::*, game_session::*, snapshot::*, win_detector::*};

mod board_state;
mod claw;
mod game_session;
mod snapshot;
mod win_detector;
