//! Interactive console driver: the computer plays Black through the
//! alpha-beta searcher, the human plays White.
//!
//! All input validation happens here; the board only ever sees coordinates
//! already present in its own legal-move list.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reversi::{Board, Cell, Player, Rules};
use reversi_engines::best_move;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    fn depth(self) -> u32 {
        match self {
            Level::Easy => 1,
            Level::Medium => 3,
            Level::Hard => 5,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "reversi",
    version,
    about = "Play the four-direction disc-flipping game against a minimax opponent"
)]
struct Cli {
    /// Difficulty preset for the computer opponent
    #[arg(long, value_enum, default_value_t = Level::Medium)]
    level: Level,

    /// Scan all eight directions (canonical rules) instead of four
    #[arg(long)]
    eight_way: bool,

    /// Limit each side to this many discs
    #[arg(long)]
    discs: Option<u8>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let rules = if cli.eight_way {
        Rules::EightWay
    } else {
        Rules::Orthogonal
    };
    let mut board = Board::with_rules(rules);
    if let Some(per_side) = cli.discs {
        board = board.with_budget(per_side);
    }
    let depth = cli.level.depth();

    println!("Welcome! Computer is Black, you are White.");
    render(&board);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !board.is_terminal() {
        match board.side_to_move() {
            Player::White => {
                let moves = board.legal_moves();
                if moves.is_empty() {
                    println!("You can't make any move, so your turn is skipped.");
                    board.pass_turn();
                    continue;
                }
                let (row, col) = prompt_move(&mut lines, &moves)?;
                board
                    .apply_move(row, col)
                    .context("prompted move was rejected by the board")?;
            }
            Player::Black => match best_move(&board, depth) {
                Some((row, col)) => {
                    debug!(row, col, depth, "computer move");
                    println!("Computer plays ({row}, {col}).");
                    board
                        .apply_move(row, col)
                        .context("search returned an illegal move")?;
                }
                None => {
                    println!("Computer can't make any move, so it's your turn now.");
                    board.pass_turn();
                }
            },
        }
        render(&board);
    }

    declare_winner(&board);
    Ok(())
}

/// Keep prompting until the pair of numbers names a legal move.
fn prompt_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    moves: &[(usize, usize)],
) -> Result<(usize, usize)> {
    println!("Valid moves: {moves:?}");
    loop {
        let row = prompt_number(lines, "Enter row: ")?;
        let col = prompt_number(lines, "Enter col: ")?;
        if moves.contains(&(row, col)) {
            return Ok((row, col));
        }
        println!();
        println!("Invalid move");
        println!("Valid moves: {moves:?}");
    }
}

/// Keep prompting until the line parses as a number in [0,7].
fn prompt_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<usize> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let line = lines.next().context("input closed")??;
        match line.trim().parse::<usize>() {
            Ok(n) if n < 8 => return Ok(n),
            _ => println!("Please enter a number between 0 and 7."),
        }
    }
}

fn render(board: &Board) {
    println!("  0 1 2 3 4 5 6 7");
    for row in 0..8 {
        print!("{row} ");
        for col in 0..8 {
            let glyph = match board.cell(row, col) {
                Cell::Empty => '.',
                Cell::Black => 'B',
                Cell::White => 'W',
            };
            print!("{glyph} ");
        }
        println!();
    }
    if let (Some(black), Some(white)) = (
        board.budget_remaining(Player::Black),
        board.budget_remaining(Player::White),
    ) {
        println!("Discs left - Computer: {black}, You: {white}");
    }
}

fn declare_winner(board: &Board) {
    let (black, white) = board.disc_counts();
    println!("You: {white}, Computer: {black}");
    if black < white {
        println!("Congrats, you won!");
    } else if black > white {
        println!("You lost!");
    } else {
        println!("It's a tie!");
    }
}
