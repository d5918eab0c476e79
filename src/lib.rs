//! Pure tic-tac-toe minimax engine.
//!
//! This crate is the decision-making core of a tic-tac-toe program: given
//! a board, it derives whose turn it is, enumerates legal moves, detects
//! terminal positions, and selects the optimal move by exhaustive
//! game-tree search. It has no UI, no I/O, and no state beyond the board
//! values passed through it; every operation is a pure function.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{minimax, Board, Player, Position};
//!
//! let board = Board::new();
//! assert_eq!(board.to_move(), Player::X);
//!
//! // The opening position is a draw with best play; ties are broken in
//! // row-major order, so the engine opens in the top-left corner.
//! assert_eq!(minimax(&board), Some(Position::TopLeft));
//! ```
//!
//! A presentation layer drives a game by alternating `minimax` (or user
//! input) with [`Board::apply`], and reading [`Board::is_terminal`] /
//! [`Board::winner`] to report the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod rules;
mod search;
mod types;

pub use action::{Action, InvalidAction};
pub use position::Position;
pub use search::{max_value, min_value, minimax};
pub use types::{Board, Player, Square};
