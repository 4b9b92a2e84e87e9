//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Every explored branch runs on an independently cloned [`Board`], so no
//! call frame ever observes another frame's mutations and the live game is
//! never touched. Children are visited in the board's row-major move order
//! and the running best is only replaced on strict improvement, which makes
//! the earliest-enumerated move the winner among equals.
//!
//! Leaves are always scored from the root maximizer's perspective, so the
//! minimizing plies genuinely minimize the root side's disc differential.

use reversi::{Board, Player};

/// Disc-count differential from `perspective`'s point of view.
///
/// Bounded by ±64, so `i32::MIN`/`i32::MAX` are safe search sentinels.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let (black, white) = board.disc_counts();
    match perspective {
        Player::Black => i32::from(black) - i32::from(white),
        Player::White => i32::from(white) - i32::from(black),
    }
}

/// Best move for the side to move, or `None` when it must pass.
///
/// `None` is a normal outcome, not an error: the caller passes the turn.
/// A depth of 0 is treated as depth 1.
pub fn best_move(board: &Board, depth: u32) -> Option<(usize, usize)> {
    let (_, chosen) = search(board, depth);
    chosen
}

/// Run the full search, returning the root score alongside the chosen move.
///
/// The score is the disc differential the side to move can force within
/// `depth` plies, assuming the opponent minimizes it.
pub fn search(board: &Board, depth: u32) -> (i32, Option<(usize, usize)>) {
    let root = board.side_to_move();
    alpha_beta(board, root, depth.max(1), i32::MIN, i32::MAX, true)
}

fn alpha_beta(
    node: &Board,
    root: Player,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> (i32, Option<(usize, usize)>) {
    if depth == 0 || node.is_terminal() {
        return (evaluate(node, root), None);
    }

    let moves = node.legal_moves();
    if moves.is_empty() {
        // Stuck side: score the position as it stands.
        return (evaluate(node, root), None);
    }

    let mut chosen = None;

    if maximizing {
        let mut best = i32::MIN;

        for (row, col) in moves {
            let mut child = node.clone();
            if child.apply_move(row, col).is_err() {
                continue;
            }

            let (score, _) = alpha_beta(&child, root, depth - 1, alpha, beta, false);
            if score > best {
                best = score;
                chosen = Some((row, col));
            }

            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }

        (best, chosen)
    } else {
        let mut best = i32::MAX;

        for (row, col) in moves {
            let mut child = node.clone();
            if child.apply_move(row, col).is_err() {
                continue;
            }

            let (score, _) = alpha_beta(&child, root, depth - 1, alpha, beta, true);
            if score < best {
                best = score;
                chosen = Some((row, col));
            }

            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }

        (best, chosen)
    }
}
