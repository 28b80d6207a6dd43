use clap::Parser;
use serde::Serialize;

use oxo::{
    best_cell, idx_to_rc, rc_to_idx, Board, MoveScore, Orientation, Outcome, Player, Position,
    Solver,
};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Tic-tac-toe perfect-play move evaluator")]
struct Args {
    /// Board as 9 marks row-major from the top-left: 0 empty, 1 X, 2 O
    #[arg(long)]
    board: String,

    /// Mirror the scoring: three in a row loses
    #[arg(long)]
    misere: bool,

    /// Emit a single JSON object instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    board: [u8; 9],
    to_move: Player,
    move_count: u8,
    outcome: Outcome,
    misere: bool,
    key: u32,
    scores: [i32; 9],
    best_cell: Option<u8>,
}

fn parse_board(s: &str) -> Result<Board, String> {
    let mut marks: Vec<u8> = Vec::with_capacity(9);
    for ch in s.trim().chars() {
        match ch.to_digit(10) {
            Some(d) => marks.push(d as u8),
            None => {
                return Err(format!(
                    "Invalid board character '{ch}', expected digits 0-2"
                ))
            }
        }
    }
    Board::from_marks(&marks)
}

fn mark_char(cell: Option<Player>) -> char {
    match cell {
        None => '.',
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
    }
}

fn print_report(position: &Position, evals: &[MoveScore; 9], misere: bool) {
    println!("Board:");
    for r in 0..3u8 {
        let mut cells = Vec::with_capacity(3);
        for c in 0..3u8 {
            if let Some(idx) = rc_to_idx(r, c) {
                cells.push(mark_char(position.board.get(idx)).to_string());
            }
        }
        println!("  {}", cells.join(" | "));
        if r < 2 {
            println!("  {}", "-".repeat(9));
        }
    }

    println!("Scores{}:", if misere { " (misere)" } else { "" });
    for r in 0..3u8 {
        let mut cells = Vec::with_capacity(3);
        for c in 0..3u8 {
            if let Some(idx) = rc_to_idx(r, c) {
                cells.push(match evals[idx as usize] {
                    MoveScore::Score(v) => format!("{v:>4}"),
                    MoveScore::Illegal => "   .".to_string(),
                });
            }
        }
        println!("  {}", cells.join(" |"));
        if r < 2 {
            println!("  {}", "-".repeat(16));
        }
    }

    match position.outcome() {
        Outcome::Undecided => {
            let mover = position.to_move();
            println!("{mover:?} to move ({} played)", position.move_count());
            if let Some(cell) = best_cell(evals, mover) {
                let (r, c) = idx_to_rc(cell);
                println!("Best cell for {mover:?}: {cell} (row {r}, col {c})");
            }
        }
        Outcome::Draw => println!("Game over: draw"),
        Outcome::Win(p) => println!("Game over: {p:?} has three in a row"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let board = parse_board(&args.board).map_err(|e| format!("Board parse error: {e}"))?;
    let position = Position::new(board);

    let mut solver = Solver::new(Orientation::from_misere(args.misere));
    let evals = solver.evaluate_all_moves(&position);
    let best = best_cell(&evals, position.to_move());

    if args.json {
        let mut scores = [0i32; 9];
        for (slot, eval) in scores.iter_mut().zip(evals.iter()) {
            *slot = eval.raw();
        }
        let report = Report {
            board: position.board.marks(),
            to_move: position.to_move(),
            move_count: position.move_count(),
            outcome: position.outcome(),
            misere: args.misere,
            key: position.key(),
            scores,
            best_cell: best,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print_report(&position, &evals, args.misere);
    }

    Ok(())
}
