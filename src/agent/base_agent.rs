use crate::reversi::{Move, Player};

/// A player keeping its own copy of the game.
pub trait Agent {
    fn player(&self) -> Player;

    /// the opponent played `move_`, which may be [`Move::NONE`] for a pass
    fn inform_move(&mut self, move_: Move);

    /// pick a move for our side and play it on our board; [`Move::NONE`] if there is none
    fn get_move(&mut self) -> Move;
}
