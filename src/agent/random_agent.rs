use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::Agent;
use crate::reversi::{Board, Move, Player};

/// picks uniformly among the legal moves
pub struct RandomAgent {
    board: Board,
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player: Player) -> Self {
        RandomAgent {
            board: Board::new(),
            player,
            rng: StdRng::from_entropy(),
        }
    }

    #[allow(dead_code)]
    pub fn with_seed(player: Player, seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            ..RandomAgent::new(player)
        }
    }
}

impl Agent for RandomAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn inform_move(&mut self, move_: Move) {
        self.board.apply_move(!self.player, move_);
    }

    fn get_move(&mut self) -> Move {
        let move_ = self
            .board
            .legal_moves(self.player)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::NONE);

        self.board.apply_move(self.player, move_);

        move_
    }
}

/*====================================================================================================================*/
