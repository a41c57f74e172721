use crate::reversi::{Board, Cell, Player};

pub type Score = i32;

pub type ValuationFn = fn(&Board, Player) -> Score;

const CORNER_VALUE: Score = 10;
const CORNER_NEIGHBOUR_PENALTY: Score = -10;

// each corner with the up to 3 cells touching it
const CORNERS: [((i32, i32), [(i32, i32); 3]); 4] = [
    ((0, 0), [(0, 1), (1, 0), (1, 1)]),
    ((0, 7), [(0, 6), (1, 7), (1, 6)]),
    ((7, 0), [(7, 1), (6, 0), (6, 1)]),
    ((7, 7), [(7, 6), (6, 7), (6, 6)]),
];

/*====================================================================================================================*/

/// Static evaluation of `board` from the perspective of `player`, higher is better.
///
/// Sum of
/// - corners: +10 for each corner held by `player`, -10 for each held by the opponent
/// - corner neighbours: -10 for each corner not held by `player` that has one of `player`'s discs next to it
/// - discs: +1 per own disc, -1 per opponent disc
/// - frontier: for each empty cell, -1 per own neighbour and +1 per opponent neighbour
pub fn evaluate(board: &Board, player: Player) -> Score {
    corner_score(board, player)
        + corner_neighbour_score(board, player)
        + disc_score(board, player)
        + frontier_score(board, player)
}

pub fn corner_score(board: &Board, player: Player) -> Score {
    let own = Cell::from(player);
    let their = Cell::from(!player);

    CORNERS
        .iter()
        .map(|&((row, col), _)| match board.cell(row, col) {
            cell if cell == own => CORNER_VALUE,
            cell if cell == their => -CORNER_VALUE,
            _ => 0,
        })
        .sum()
}

pub fn corner_neighbour_score(board: &Board, player: Player) -> Score {
    let own = Cell::from(player);

    CORNERS
        .iter()
        .filter(|&&((row, col), neighbours)| {
            board.cell(row, col) != own && neighbours.iter().any(|&(r, c)| board.cell(r, c) == own)
        })
        .map(|_| CORNER_NEIGHBOUR_PENALTY)
        .sum()
}

pub fn disc_score(board: &Board, player: Player) -> Score {
    board.disc_count(player) as Score - board.disc_count(!player) as Score
}

/// discs bordering empty cells count against their owner
pub fn frontier_score(board: &Board, player: Player) -> Score {
    let own = Cell::from(player);
    let their = Cell::from(!player);

    let mut counter = 0;

    for empty in Board::all_moves().filter(|m| board.cell(m.row, m.col) == Cell::Empty) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                // off-board neighbours read as empty, the centre cell is empty itself
                match board.cell(empty.row + dr, empty.col + dc) {
                    cell if cell == own => counter -= 1,
                    cell if cell == their => counter += 1,
                    _ => {}
                }
            }
        }
    }

    counter
}

/*====================================================================================================================*/
