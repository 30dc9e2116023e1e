//! Rule and bot properties checked over every possible 3x3 filling.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::rules::LINES;
use tictactoe_core::{Board, Cell, Mark, Position, check_win, decide, is_draw, is_full, select_move};

/// All 3^9 assignments of Empty/X/O, legal in play or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut board = Board::new();
        for pos in Position::ALL {
            match n % 3 {
                1 => board.mark(pos, Mark::X),
                2 => board.mark(pos, Mark::O),
                _ => {}
            }
            n /= 3;
        }
        board
    })
}

fn has_uniform_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Cell::Occupied(mark)))
}

#[test]
fn test_check_win_iff_uniform_line() {
    for board in all_boards() {
        for mark in [Mark::X, Mark::O] {
            let result = check_win(&board, mark);
            assert_eq!(
                result.has_winner(),
                has_uniform_line(&board, mark),
                "{mark} on\n{}",
                board.display()
            );
            if let Some(line) = result.winning_line() {
                for pos in line.cells() {
                    assert_eq!(board.get(pos), Cell::Occupied(mark));
                }
            }
        }
    }
}

#[test]
fn test_check_win_is_idempotent() {
    for board in all_boards() {
        let before = board;
        let first = check_win(&board, Mark::X);
        let second = check_win(&board, Mark::X);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}

#[test]
fn test_full_iff_no_empty_cell() {
    for board in all_boards() {
        let any_empty = board.cells().contains(&Cell::Empty);
        assert_eq!(is_full(&board), !any_empty);
        assert_eq!(board.is_full(), !any_empty);
        if is_full(&board) && !has_uniform_line(&board, Mark::X) {
            assert!(is_draw(&board, Mark::X));
        }
    }
}

#[test]
fn test_bot_only_picks_empty_cells_and_leaves_board_alone() {
    let mut rng = StdRng::seed_from_u64(11);
    for board in all_boards() {
        let before = board;
        match select_move(&board, Mark::O, Mark::X, &mut rng) {
            Some(pos) => {
                assert!(board.is_available(pos));
                assert!(pos.row() < 3 && pos.col() < 3);
            }
            None => assert!(board.is_full()),
        }
        assert_eq!(board, before);
    }
}

#[test]
fn test_bot_never_misses_a_block() {
    let mut rng = StdRng::seed_from_u64(5);
    for board in all_boards() {
        let threat = board
            .empty_positions()
            .into_iter()
            .find(|pos| check_win(&board.with_mark(*pos, Mark::X), Mark::X).has_winner());
        if let Some(expected) = threat {
            let decision = decide(&board, Mark::O, Mark::X, &mut rng).expect("free cell exists");
            assert_eq!(*decision.position(), expected);
        }
    }
}

#[test]
fn test_blocks_two_in_top_row() {
    let mut board = Board::new();
    board.mark(Position::TopLeft, Mark::X);
    board.mark(Position::TopCenter, Mark::X);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&board, Mark::O, Mark::X, &mut rng),
        Position::from_row_col(0, 2)
    );
}

#[test]
fn test_diagonal_win_scenario() {
    let mut board = Board::new();
    board.mark(Position::Center, Mark::O);
    board.mark(Position::TopLeft, Mark::O);
    board.mark(Position::TopRight, Mark::X);
    // Any seed: the win rule fires before anything random.
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            select_move(&board, Mark::O, Mark::X, &mut rng),
            Position::from_row_col(2, 2)
        );
    }
}
