use std::time::Instant;

use log::debug;

use crate::reversi::valuation::{evaluate, Score, ValuationFn};
use crate::reversi::{Board, Move, Player};

/*====================================================================================================================*/

/// Fixed-depth minimax search with alpha-beta pruning for one side.
///
/// The terminal check looks at the mobility of `player` at every level, also where the opponent is to move. A level
/// whose side to move has no legal move returns its initial bound (`Score::MIN` when maximising, `Score::MAX` when
/// minimising) instead of an evaluation.
#[derive(Clone)]
pub struct Searcher {
    player: Player,
    max_depth: u32,

    valuation_fn: ValuationFn,

    alpha_beta_prune: bool,

    total_nodes_visited: u64,
}

impl Searcher {
    pub fn new(player: Player, max_depth: u32) -> Self {
        Searcher {
            player,
            max_depth,
            valuation_fn: evaluate,
            alpha_beta_prune: true,
            total_nodes_visited: 0,
        }
    }

    #[allow(dead_code)]
    pub fn with_valuation(self, valuation_fn: ValuationFn) -> Self {
        Searcher { valuation_fn, ..self }
    }

    /// plain minimax, visits every node
    #[cfg(test)]
    pub fn without_pruning(self) -> Self {
        Searcher {
            alpha_beta_prune: false,
            ..self
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    #[cfg(test)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// nodes visited by the last search
    pub fn nodes_visited(&self) -> u64 {
        self.total_nodes_visited
    }

    /// Best move for the configured side, [`Move::NONE`] if it has none.
    ///
    /// Root moves are tried in row-major order and a later move only replaces the current best with a strictly higher
    /// score, so the first of equally scored moves is kept.
    pub fn choose_move(&mut self, board: &Board) -> Move {
        let start_t = Instant::now();

        let mut best_score = Score::MIN;
        let mut best_move = Move::NONE;

        for (move_, score) in self.root_scores(board) {
            if score > best_score {
                best_score = score;
                best_move = move_;
            }
        }

        debug!(
            "{} searched {} nodes to depth {} in {:?}, best move {:?} with score {}",
            self.player,
            self.nodes_visited(),
            self.max_depth,
            start_t.elapsed(),
            best_move,
            best_score,
        );

        best_move
    }

    /// Score of every legal root move of the configured side, in row-major order.
    ///
    /// Each move is searched with a full window, the reply level being the opponent's.
    pub fn root_scores(&mut self, board: &Board) -> Vec<(Move, Score)> {
        self.total_nodes_visited = 0;

        board
            .legal_moves(self.player)
            .into_iter()
            .map(|move_| {
                let mut board_after_move = board.clone();
                board_after_move.apply_move(self.player, move_);

                let score = self.minimax(&board_after_move, self.max_depth, Score::MIN, Score::MAX, false);

                (move_, score)
            })
            .collect()
    }

    pub fn minimax(&mut self, board: &Board, depth: u32, alpha: Score, beta: Score, maximising: bool) -> Score {
        self.total_nodes_visited += 1;

        if depth == 0 || !board.has_legal_move(self.player) {
            return (self.valuation_fn)(board, self.player);
        }

        let mut alpha = alpha;
        let mut beta = beta;

        if maximising {
            let mut max_value = Score::MIN;

            for move_ in Board::all_moves() {
                if !board.is_legal(self.player, move_) {
                    continue;
                }

                let mut board_after_move = board.clone();
                board_after_move.apply_move(self.player, move_);

                let value = self.minimax(&board_after_move, depth - 1, alpha, beta, false);

                max_value = max_value.max(value);
                alpha = alpha.max(value);

                if self.alpha_beta_prune && beta <= alpha {
                    break;
                }
            }

            max_value
        } else {
            let opponent = !self.player;
            let mut min_value = Score::MAX;

            for move_ in Board::all_moves() {
                if !board.is_legal(opponent, move_) {
                    continue;
                }

                let mut board_after_move = board.clone();
                board_after_move.apply_move(opponent, move_);

                let value = self.minimax(&board_after_move, depth - 1, alpha, beta, true);

                min_value = min_value.min(value);
                beta = beta.min(value);

                if self.alpha_beta_prune && beta <= alpha {
                    break;
                }
            }

            min_value
        }
    }
}

/*====================================================================================================================*/
