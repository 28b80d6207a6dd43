use std::thread;

use oxo::{
    best_cell, evaluate_all_moves, play, solve, Board, Orientation, Outcome, Position,
    ILLEGAL_MOVE_SCORE,
};

const S: i32 = ILLEGAL_MOVE_SCORE;

fn position_from(marks: &[u8]) -> Position {
    Position::new(Board::from_marks(marks).expect("valid board"))
}

fn scores_for(marks: &[u8], misere: bool) -> [i32; 9] {
    solve(marks, misere).expect("valid board")
}

#[test]
fn empty_board_normal_is_all_draws() {
    assert_eq!(scores_for(&[0; 9], false), [0; 9]);
}

#[test]
fn empty_board_misere_only_center_draws() {
    let scores = scores_for(&[0; 9], true);
    assert_eq!(scores[4], 0, "center opening holds the draw");
    for (cell, &value) in scores.iter().enumerate() {
        if cell != 4 {
            assert!(value < 0, "cell {cell} should lose for X, got {value}");
        }
    }
}

#[test]
fn empty_board_symmetry_classes() {
    for misere in [false, true] {
        let scores = scores_for(&[0; 9], misere);
        for corner in [2usize, 6, 8] {
            assert_eq!(scores[corner], scores[0], "corners must agree (misere={misere})");
        }
        for edge in [3usize, 5, 7] {
            assert_eq!(scores[edge], scores[1], "edges must agree (misere={misere})");
        }
        assert!(
            scores[4] >= scores[1],
            "center must be at least as good as an edge (misere={misere})"
        );
    }
}

#[test]
fn win_in_one_outscores_everything() {
    // X X . / O O . / . . .  X to move: 2 wins now, 5 only defends, the rest lose.
    assert_eq!(
        scores_for(&[1, 1, 0, 2, 2, 0, 0, 0, 0], false),
        [S, S, 5, S, S, 0, -4, -4, -4]
    );
}

#[test]
fn o_best_move_is_the_block() {
    // X X . / O . . / . . .  O to move: everything except the block loses at once.
    let scores = scores_for(&[1, 1, 0, 2, 0, 0, 0, 0, 0], false);
    assert_eq!(scores, [S, S, 3, S, 5, 5, 5, 5, 5]);

    let position = position_from(&[1, 1, 0, 2, 0, 0, 0, 0, 0]);
    let evals = evaluate_all_moves(&position, Orientation::Normal);
    assert_eq!(best_cell(&evals, position.to_move()), Some(2));
}

#[test]
fn both_diagonals_are_winning_moves() {
    // X O X / O X O / . . .  cells 6 and 8 complete the diagonals; 7 still wins, slower.
    assert_eq!(
        scores_for(&[1, 2, 1, 2, 1, 2, 0, 0, 0], false),
        [S, S, S, S, S, S, 3, 1, 3]
    );
}

#[test]
fn o_takes_the_immediate_win() {
    // X X . / O O . / X . .  O to move: cell 5 completes the middle row.
    assert_eq!(
        scores_for(&[1, 1, 0, 2, 2, 0, 1, 0, 0], false),
        [S, S, 0, S, S, -4, S, 3, 3]
    );
}

#[test]
fn full_board_is_all_sentinels() {
    assert_eq!(scores_for(&[1, 2, 1, 1, 2, 2, 2, 1, 1], false), [S; 9]);
}

#[test]
fn decided_board_scores_through_the_standing_line() {
    // X X X / O O . / . . .  already won; empty cells still evaluate, through the row.
    assert_eq!(
        scores_for(&[1, 1, 1, 2, 2, 0, 0, 0, 0], false),
        [S, S, S, S, S, 4, 4, 4, 4]
    );
    assert_eq!(
        scores_for(&[1, 1, 1, 2, 2, 0, 0, 0, 0], true),
        [S, S, S, S, S, -4, -4, -4, -4]
    );
}

#[test]
fn sentinels_ignore_orientation() {
    let normal = scores_for(&[1, 1, 0, 2, 2, 0, 0, 0, 0], false);
    let misere = scores_for(&[1, 1, 0, 2, 2, 0, 0, 0, 0], true);
    for cell in [0usize, 1, 3, 4] {
        assert_eq!(normal[cell], S);
        assert_eq!(misere[cell], S);
    }
}

#[test]
fn rotating_the_board_rotates_the_scores() {
    // 90 degrees clockwise: new (r, c) takes old (2 - c, r).
    fn rot90<T: Copy + Default>(a: &[T; 9]) -> [T; 9] {
        let mut out = [T::default(); 9];
        for r in 0..3usize {
            for c in 0..3usize {
                out[r * 3 + c] = a[(2 - c) * 3 + r];
            }
        }
        out
    }

    let marks = [1u8, 1, 0, 2, 2, 0, 0, 0, 0];
    let base = scores_for(&marks, false);
    let rotated = scores_for(&rot90(&marks), false);
    assert_eq!(rotated, rot90(&base));
}

#[test]
fn evaluation_is_idempotent() {
    let marks = [1u8, 0, 0, 0, 2, 0, 0, 0, 0];
    assert_eq!(scores_for(&marks, false), scores_for(&marks, false));
    assert_eq!(scores_for(&marks, true), scores_for(&marks, true));
}

#[test]
fn solve_rejects_malformed_input() {
    assert!(solve(&[0; 8], false).is_err(), "short board");
    assert!(solve(&[0; 10], false).is_err(), "long board");
    assert!(
        solve(&[0, 0, 0, 0, 3, 0, 0, 0, 0], false).is_err(),
        "mark out of range"
    );
}

#[test]
fn perfect_play_from_empty_is_a_draw() {
    let mut position = Position::empty();
    let mut plies = 0;
    while !position.is_terminal() {
        let evals = evaluate_all_moves(&position, Orientation::Normal);
        let cell = best_cell(&evals, position.to_move()).expect("open position has a move");
        position = play(&position, cell).expect("legal move");
        plies += 1;
    }
    assert_eq!(plies, 9, "perfect play fills the board");
    assert_eq!(position.outcome(), Outcome::Draw);
}

#[test]
fn concurrent_evaluations_agree() {
    let handles: Vec<_> = (0..2)
        .map(|_| thread::spawn(|| solve(&[1, 1, 0, 2, 2, 0, 0, 0, 0], false)))
        .collect();
    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.join().expect("thread").expect("valid board"));
    }
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], [S, S, 5, S, S, 0, -4, -4, -4]);
}
