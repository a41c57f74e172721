mod board;
pub mod valuation;

pub use board::{Board, Cell, Move, Player};
