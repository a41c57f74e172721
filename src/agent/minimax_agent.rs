use log::{debug, info};

use crate::agent::Agent;
use crate::minimax::Searcher;
use crate::reversi::{Board, Move, Player};

/// Owns the authoritative board of one game and searches it with a fixed-depth [`Searcher`].
///
/// A new game means a new agent; nothing carries over between games.
pub struct MinimaxAgent {
    board: Board,
    searcher: Searcher,
}

impl MinimaxAgent {
    pub fn new(player: Player, depth: u32) -> Self {
        info!("New game as {player}, search depth {depth}");

        MinimaxAgent {
            board: Board::new(),
            searcher: Searcher::new(player, depth),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn depth(&self) -> u32 {
        self.searcher.max_depth()
    }
}

impl Agent for MinimaxAgent {
    fn player(&self) -> Player {
        self.searcher.player()
    }

    fn inform_move(&mut self, move_: Move) {
        let opponent = !self.player();

        if move_ == Move::NONE {
            debug!("{opponent} passed");
            return;
        }

        // illegal moves leave the board as it is
        if self.board.apply_move(opponent, move_) == 0 {
            info!("Ignoring move {move_:?} by {opponent}, not legal here");
        }
    }

    fn get_move(&mut self) -> Move {
        let move_ = self.searcher.choose_move(&self.board);

        // no-op for Move::NONE
        self.board.apply_move(self.player(), move_);

        move_
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::MinimaxAgent;
    use crate::agent::Agent;
    use crate::minimax::Searcher;
    use crate::reversi::{Board, Move, Player};

    #[test]
    fn test_new_game() {
        let agent = MinimaxAgent::new(Player::Black, 3);

        assert_eq!(agent.player(), Player::Black);
        assert_eq!(agent.depth(), 3);
        assert_eq!(agent.board(), &Board::new());
    }

    #[test]
    fn test_get_move_applies_move() {
        let mut agent = MinimaxAgent::new(Player::White, 2);

        let expected = Searcher::new(Player::White, 2).choose_move(&Board::new());
        let move_ = agent.get_move();

        assert_eq!(move_, expected);

        let mut board = Board::new();
        board.apply_move(Player::White, move_);
        assert_eq!(agent.board(), &board);
    }

    #[test]
    fn test_inform_move() {
        let mut agent = MinimaxAgent::new(Player::Black, 2);

        agent.inform_move(Move::new(2, 3));

        let mut board = Board::new();
        board.apply_move(Player::White, Move::new(2, 3));
        assert_eq!(agent.board(), &board);

        // occupied now, ignored
        agent.inform_move(Move::new(2, 3));
        // pass, ignored
        agent.inform_move(Move::NONE);
        assert_eq!(agent.board(), &board);

        let reply = agent.get_move();
        assert!(board.is_legal(Player::Black, reply));
    }
}
