use rand::seq::SliceRandom;
use rand::Rng;

use crate::reversi::{Board, Player};

/// Play `num_moves` random plies from `board`, White first. A side without a move passes, which counts as a ply.
pub fn advance_random(board: &mut Board, num_moves: usize, rng: &mut impl Rng) {
    let mut current_player = Player::White;

    for _ in 0..num_moves {
        if board.is_game_over() {
            break;
        }

        if let Some(&move_) = board.legal_moves(current_player).choose(rng) {
            board.apply_move(current_player, move_);
        }

        current_player = !current_player;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::advance_random;
    use crate::reversi::{Board, Player};

    #[test]
    fn test_advance_random() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::new();

        advance_random(&mut board, 10, &mut rng);

        let discs = board.disc_count(Player::White) + board.disc_count(Player::Black);
        assert!(discs > 4 && discs <= 14);

        let mut again = Board::new();
        advance_random(&mut again, 10, &mut StdRng::seed_from_u64(5));
        assert_eq!(board, again);
    }
}
