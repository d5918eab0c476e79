//! First-class action types for tic-tac-toe.
//!
//! An [`Action`] is a raw (row, col) coordinate pair as supplied by an
//! external caller. It is deliberately unvalidated: bounds and occupancy
//! are checked by [`Board::apply`](crate::Board::apply), which rejects bad
//! actions with a typed [`InvalidAction`] carrying the offending
//! coordinates.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A move request: place the current mover's mark at (row, col).
///
/// Coordinates are signed so that out-of-range input (including negative
/// coordinates) can be represented and rejected rather than silently
/// clamped or wrapped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
)]
pub struct Action {
    row: i8,
    col: i8,
}

impl Action {
    /// Creates a new action targeting (row, col).
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The targeted row.
    pub fn row(&self) -> i8 {
        self.row
    }

    /// The targeted column.
    pub fn col(&self) -> i8 {
        self.col
    }

    /// Resolves the action to an on-board position.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAction::OutOfBounds`] when either coordinate falls
    /// outside [0, 2].
    pub fn position(self) -> Result<Position, InvalidAction> {
        Position::from_coords(self.row, self.col)
            .ok_or(InvalidAction::OutOfBounds(self.row, self.col))
    }
}

impl From<Position> for Action {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row() as i8,
            col: pos.col() as i8,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying an action to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({_0}, {_1}) are outside the board")]
    OutOfBounds(i8, i8),

    /// The square at the position is already occupied.
    #[display("Square ({_0}, {_1}) is already occupied")]
    SquareOccupied(i8, i8),
}

impl std::error::Error for InvalidAction {}
