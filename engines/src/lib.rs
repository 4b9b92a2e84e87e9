//! Adversarial search for the reversi game core.
//!
//! The single engine here is a depth-bounded minimax with alpha-beta
//! pruning that drives [`reversi::Board`] through every legal continuation
//! and scores frontier positions with the plain disc-count differential.
//!
//! The engine exports `best_move(board, depth) -> Option<(row, col)>`;
//! `None` means the side to move must pass.

pub mod minimax;

pub use minimax::{best_move, evaluate, search};
