//! Full-width minimax search over the game tree.
//!
//! The search is plain depth-first minimax: no pruning, no transposition
//! table, no move ordering. The tree is small enough (at most 9 plies,
//! bounded by board fill) that exhaustive evaluation is instant, and the
//! simplicity buys a strong behavioral guarantee: the move returned by
//! [`minimax`] depends only on the board and the fixed row-major
//! enumeration order, never on evaluation shortcuts.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// Value of a board for the maximizing player (X).
///
/// Terminal boards score as their [utility](crate::Board::utility);
/// otherwise the value is the maximum over all children of the minimizing
/// player's reply value.
pub fn max_value(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut v = i8::MIN;
    for pos in board.legal_actions() {
        let child = board
            .apply(pos)
            .expect("legal actions are always applicable");
        v = v.max(min_value(&child));
    }
    v
}

/// Value of a board for the minimizing player (O).
///
/// Mirror image of [`max_value`].
pub fn min_value(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut v = i8::MAX;
    for pos in board.legal_actions() {
        let child = board
            .apply(pos)
            .expect("legal actions are always applicable");
        v = v.min(max_value(&child));
    }
    v
}

/// Returns the optimal move for the current mover, or `None` on a
/// terminal board.
///
/// X maximizes and O minimizes the game value (+1 X wins, -1 O wins,
/// 0 draw). Candidate moves are tried in row-major order and the choice
/// is only replaced on a strict improvement, so among equally good moves
/// the first one in [`Position::ALL`] order is kept. That tie-break is
/// part of the contract: `minimax` on a given board always returns the
/// same move.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Position> {
    if board.is_terminal() {
        return None;
    }

    let mover = board.to_move();
    let mut best = match mover {
        Player::X => i8::MIN,
        Player::O => i8::MAX,
    };
    let mut choice = None;

    for pos in board.legal_actions() {
        let child = board
            .apply(pos)
            .expect("legal actions are always applicable");
        let value = match mover {
            Player::X => min_value(&child),
            Player::O => max_value(&child),
        };
        let improves = match mover {
            Player::X => value > best,
            Player::O => value < best,
        };
        if improves {
            best = value;
            choice = Some(pos);
        }
    }

    tracing::debug!(?mover, ?choice, value = best, "selected move");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn board_from(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let x_won = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        assert_eq!(minimax(&x_won), None);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        // Two marks each, so X is to move; the top row is open on the
        // right and X completes it.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(minimax(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_value_of_won_board() {
        let o_won = board_from(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
        ]);
        assert_eq!(max_value(&o_won), -1);
        assert_eq!(min_value(&o_won), -1);
    }
}
