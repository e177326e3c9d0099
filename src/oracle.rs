use crate::Outcome;
use crate::board::{BOARD_SIZE, Board, Cell, Player};
use crate::error::Result;

/// Score of a win found at the root. Every extra ply costs one point, so
/// faster wins score higher in absolute value.
pub const WIN_SCORE: i32 = 10;

/// Scores `board` under optimal play by both sides.
///
/// Positive scores are forced X wins (`10 - depth`), negative scores forced
/// O wins (`-10 + depth`) and `0` is a forced draw. `x_to_move` selects the
/// maximizing side for the first ply.
///
/// The search is an exhaustive minimax without pruning. It places and
/// retracts marks on `board` while recursing, and the board is left exactly
/// as it was passed in once this returns. Piece counts are not validated.
pub fn evaluate(board: &mut Board, x_to_move: bool) -> i32 {
    minimax(board, 0, x_to_move)
}

/// Same as [`evaluate`] but for a raw oracle-encoded cell slice.
///
/// Wrong lengths and values outside `{-1, 0, 1}` are rejected instead of
/// being searched.
pub fn evaluate_cells(cells: &[i8], x_to_move: bool) -> Result<i32> {
    let mut board = Board::from_oracle(cells)?;
    Ok(evaluate(&mut board, x_to_move))
}

/// Infers the side to move from the piece counts and returns the forced
/// outcome of `board`.
pub fn solve(board: &Board) -> Outcome {
    let mut scratch = *board;
    let score = evaluate(&mut scratch, board.next_player().is_maximizer());
    Outcome::from_score(score)
}

fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if board.has_line(Player::X) {
        return WIN_SCORE - depth;
    }
    if board.has_line(Player::O) {
        return -WIN_SCORE + depth;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { Player::X } else { Player::O };
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    for index in 0..BOARD_SIZE {
        if board.cell(index) != Cell::Empty {
            continue;
        }

        board.place(index, mover);
        let score = minimax(board, depth + 1, !maximizing);
        board.clear(index);

        best_score = if maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }
    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn board(external: [u8; 9]) -> Board {
        Board::from_external(&external).unwrap()
    }

    #[test]
    fn empty_board_is_a_draw() {
        // arrange
        let mut board = Board::new();

        // act
        let score = evaluate(&mut board, true);

        // assert
        assert_eq!(score, 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn completed_x_line_scores_at_depth_zero() {
        let mut board = board([1, 1, 1, 0, 0, 3, 3, 3, 3]);
        assert_eq!(evaluate(&mut board, false), 10);
        assert_eq!(evaluate(&mut board, true), 10);
    }

    #[test]
    fn completed_o_line_scores_negative() {
        let mut board = board([0, 0, 0, 1, 1, 3, 1, 3, 3]);
        assert_eq!(evaluate(&mut board, true), -10);
    }

    #[test]
    fn full_board_without_line_is_zero() {
        // X O X
        // X O O
        // O X X
        let mut board = board([1, 0, 1, 1, 0, 0, 0, 1, 1]);
        assert!(board.is_full());
        assert_eq!(evaluate(&mut board, true), 0);
        assert_eq!(evaluate(&mut board, false), 0);
    }

    #[test]
    fn faster_wins_score_higher() {
        // X to move and wins at 2 right away.
        let mut immediate = board([1, 1, 3, 0, 0, 3, 3, 3, 3]);
        // X to move, no immediate win, but 6 forks the 0-3-6 and 2-4-6 lines.
        let mut fork = board([1, 0, 3, 3, 1, 3, 3, 3, 0]);

        let immediate_score = evaluate(&mut immediate, true);
        let fork_score = evaluate(&mut fork, true);

        assert_eq!(immediate_score, 9);
        assert_eq!(fork_score, 7);
        assert!(immediate_score > fork_score);
    }

    #[test]
    fn o_wins_are_mirrored() {
        // O to move and wins at 5 right away.
        let mut board = board([1, 1, 3, 0, 0, 3, 1, 3, 3]);
        assert_eq!(evaluate(&mut board, false), -9);
    }

    #[test]
    fn o_must_block_or_lose() {
        // X at 0 and 1, O at 3, O to move.
        let start = board([1, 1, 3, 0, 3, 3, 3, 3, 3]);
        assert_eq!(start.next_player(), Player::O);

        // act
        let mut searched = start;
        let score = evaluate(&mut searched, false);

        // assert
        assert_eq!(searched, start);
        // Every move but the block at 2 lets X complete the top row next ply.
        for index in start.empty_cells() {
            let mut child = start;
            child.place(index, Player::O);
            let child_score = evaluate(&mut child, true);
            if index == 2 {
                // X then forks with 4 (1-4-7 and 0-4-8).
                assert_eq!(child_score, 7);
            } else {
                assert_eq!(child_score, 9);
            }
        }
        assert_eq!(score, 6);
        assert_eq!(Outcome::from_score(score), Outcome::XWin);
        assert_eq!(solve(&start), Outcome::XWin);
    }

    #[test]
    fn board_is_restored_after_search() {
        let positions = [
            [3, 3, 3, 3, 3, 3, 3, 3, 3],
            [1, 3, 3, 3, 0, 3, 3, 3, 3],
            [1, 0, 1, 3, 0, 3, 3, 3, 3],
            [1, 1, 1, 0, 0, 3, 3, 3, 3],
        ];
        for external in positions {
            let original = board(external);
            let mut searched = original;
            evaluate(&mut searched, original.next_player().is_maximizer());
            assert_eq!(searched.to_external(), external);
        }
    }

    #[test]
    fn evaluate_cells_fails_fast_on_malformed_input() {
        assert!(matches!(
            evaluate_cells(&[0; 10], true),
            Err(Error::InvalidBoardLength { .. })
        ));
        assert!(matches!(
            evaluate_cells(&[0, 0, 0, 0, 3, 0, 0, 0, 0], true),
            Err(Error::InvalidCellValue { position: 4, .. })
        ));
        assert_eq!(evaluate_cells(&[1, 1, 0, -1, -1, 0, 0, 0, 0], true).unwrap(), 9);
    }

    #[test]
    fn solve_infers_side_to_move() {
        // Two O marks against two X marks: X to move and wins at 2.
        let board = board([1, 1, 3, 0, 0, 3, 3, 3, 3]);
        assert_eq!(solve(&board), Outcome::XWin);
        assert_eq!(solve(&Board::new()), Outcome::Tie);
    }
}
