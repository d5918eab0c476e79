//! Game rules: derived board queries and the move transition.
//!
//! Everything here is a pure function of the board value. The mover is
//! not stored anywhere; it is recomputed from mark counts, so any
//! well-formed board is self-describing.

use crate::action::{Action, InvalidAction};
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines, in scan order: rows, columns, main diagonal,
/// anti-diagonal. [`Board::winner`] returns the first matching line, which
/// only matters on degenerate hand-built boards where several lines
/// complete for different players at once.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

impl Board {
    /// Returns the player whose turn it is.
    ///
    /// X moves first, so the mover is X exactly when both players have
    /// placed the same number of marks. Defined (and deterministic) on
    /// terminal boards too, though the result is meaningless there.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns all positions where a mark can legally be placed.
    ///
    /// The returned order is row-major, (0,0) through (2,2). The search
    /// relies on this order for its tie-break contract.
    pub fn legal_actions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Checks for a winner on the board.
    ///
    /// Scans the lines in [`LINES`] order and returns the owner of the
    /// first complete one, or `None` when no line is complete.
    pub fn winner(&self) -> Option<Player> {
        for [a, b, c] in LINES {
            let sq = self.get(a);
            if sq != Square::Empty && sq == self.get(b) && sq == self.get(c) {
                return match sq {
                    Square::Occupied(player) => Some(player),
                    Square::Empty => None,
                };
            }
        }

        None
    }

    /// Checks if the board is full (all squares occupied).
    pub fn is_full(&self) -> bool {
        self.squares().iter().all(|&s| s != Square::Empty)
    }

    /// Returns true when no further play is possible.
    ///
    /// A winner and a full board are independently sufficient: a board can
    /// be terminal with empty squares remaining (someone won) or with no
    /// winner at all (a draw).
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Scores a terminal board: +1 if X won, -1 if O won, 0 for a draw.
    ///
    /// Callers must only invoke this on terminal boards; on a board still
    /// in play it returns 0, which has no meaning as a game value.
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Applies an action, returning the resulting board.
    ///
    /// The mark placed is the current mover's. The input board is never
    /// mutated; the result is a fresh value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAction::OutOfBounds`] when the coordinates fall
    /// outside the grid, and [`InvalidAction::SquareOccupied`] when the
    /// targeted square is not empty.
    #[instrument(skip_all)]
    pub fn apply(&self, action: impl Into<Action>) -> Result<Board, InvalidAction> {
        let action: Action = action.into();
        tracing::trace!(%action, mover = ?self.to_move(), "applying action");
        let pos = action.position()?;

        if !self.is_empty(pos) {
            return Err(InvalidAction::SquareOccupied(action.row(), action.col()));
        }

        let mut next = self.clone();
        next.set(pos, Square::Occupied(self.to_move()));
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_empty_board_x_to_move() {
        assert_eq!(Board::new().to_move(), Player::X);
    }

    #[test]
    fn test_mover_alternates_with_counts() {
        let board = board_from(&[(Position::Center, Player::X)]);
        assert_eq!(board.to_move(), Player::O);

        let board = board_from(&[
            (Position::Center, Player::X),
            (Position::TopLeft, Player::O),
        ]);
        assert_eq!(board.to_move(), Player::X);
    }

    #[test]
    fn test_winner_each_line() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&p| (p, Player::O)).collect();
            let board = board_from(&marks);
            assert_eq!(board.winner(), Some(Player::O), "line {line:?}");
            assert!(board.is_terminal());
        }
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::new();
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_winner_scan_order_top_row_first() {
        // Unreachable through legal play: both the top and bottom rows are
        // complete, for different players. The scan visits rows top to
        // bottom, so X (top row) is reported.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_winner_scan_order_left_column_first() {
        // No row is complete; columns 0 (O) and 2 (X) both are. The scan
        // visits columns left to right, so O is reported.
        let board = board_from(&[
            (Position::TopLeft, Player::O),
            (Position::MiddleLeft, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_full_board_draw_is_terminal() {
        // X O X / X O O / O X X - no line for either player.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_utility_signs() {
        let x_wins = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        assert_eq!(x_wins.utility(), 1);

        let o_wins = board_from(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
        ]);
        assert_eq!(o_wins.utility(), -1);
    }

    #[test]
    fn test_legal_actions_row_major() {
        let board = board_from(&[(Position::TopCenter, Player::X)]);
        let actions = board.legal_actions();
        assert_eq!(actions.len(), 8);
        assert_eq!(actions[0], Position::TopLeft);
        assert_eq!(actions[1], Position::TopRight);
        assert_eq!(*actions.last().unwrap(), Position::BottomRight);
    }
}
