use std::fmt::{Debug, Display};

pub const SIZE: i32 = 8;

const DIRECTIONS: [(i32, i32); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

// flip the player, i.e. White -> Black and Black -> White
impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

/*====================================================================================================================*/

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// reported when the side to move has no legal move
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Move { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (0..SIZE).contains(&self.row) && (0..SIZE).contains(&self.col)
    }

    fn step(&self, (dr, dc): (i32, i32)) -> Move {
        Move::new(self.row + dr, self.col + dc)
    }
}

// wire form, "row col"
impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {})", self.row, self.col)
    }
}

/*====================================================================================================================*/

/// 8x8 grid of discs
///
/// Cells only change through [`Board::apply_move`], so every position is reachable from the standard start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE as usize]; SIZE as usize],
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE as usize]; SIZE as usize];

        cells[3][3] = Cell::Black;
        cells[4][4] = Cell::Black;
        cells[3][4] = Cell::White;
        cells[4][3] = Cell::White;

        Board { cells }
    }

    /// Build a board from 8 rows of `.`, `W` and `B`. Bypasses move application, so only for tests.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; 8]) -> Self {
        let mut cells = [[Cell::Empty; SIZE as usize]; SIZE as usize];

        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), SIZE as usize, "row {row} has wrong length: \"{line}\"");

            for (col, c) in line.chars().enumerate() {
                cells[row][col] = match c {
                    '.' => Cell::Empty,
                    'W' => Cell::White,
                    'B' => Cell::Black,
                    c => panic!("Unknown cell character {c}"),
                };
            }
        }

        Board { cells }
    }

    /// Cell at (row, col); off-board coordinates read as empty.
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        if (0..SIZE).contains(&row) && (0..SIZE).contains(&col) {
            self.cells[row as usize][col as usize]
        } else {
            Cell::Empty
        }
    }

    fn at(&self, move_: Move) -> Cell {
        self.cell(move_.row, move_.col)
    }

    fn set(&mut self, move_: Move, cell: Cell) {
        self.cells[move_.row as usize][move_.col as usize] = cell;
    }

    pub fn is_legal(&self, player: Player, move_: Move) -> bool {
        if !move_.in_bounds() || self.at(move_) != Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&direction| self.can_flip(player, move_, direction))
    }

    /// The neighbour in `direction` is an opponent disc, and the run of opponent discs starting there is closed off
    /// by one of `player`'s discs before hitting an empty cell or the edge. False for off-board moves.
    pub fn can_flip(&self, player: Player, move_: Move, direction: (i32, i32)) -> bool {
        if !move_.in_bounds() {
            return false;
        }

        let own = Cell::from(player);
        let their = Cell::from(!player);

        let mut pos = move_.step(direction);

        if !pos.in_bounds() || self.at(pos) != their {
            return false;
        }

        loop {
            pos = pos.step(direction);

            if !pos.in_bounds() {
                return false;
            }

            match self.at(pos) {
                Cell::Empty => return false,
                cell if cell == own => return true,
                _ => {}
            }
        }
    }

    /// Place a disc for `player` and flip every bracketed run.
    ///
    /// Illegal moves (out of range, occupied, nothing to flip) are ignored and leave the board untouched.
    /// Returns the number of flipped discs, which is zero exactly when the move was ignored.
    pub fn apply_move(&mut self, player: Player, move_: Move) -> u32 {
        if !self.is_legal(player, move_) {
            return 0;
        }

        let own = Cell::from(player);
        let their = Cell::from(!player);

        self.set(move_, own);

        let mut flipped = 0;

        for direction in DIRECTIONS {
            if !self.can_flip(player, move_, direction) {
                continue;
            }

            let mut pos = move_.step(direction);

            while self.at(pos) == their {
                self.set(pos, own);
                flipped += 1;
                pos = pos.step(direction);
            }
        }

        flipped
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        Self::all_moves().any(|move_| self.is_legal(player, move_))
    }

    /// legal moves of `player` in row-major order
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        Self::all_moves().filter(|&move_| self.is_legal(player, move_)).collect()
    }

    /// all 64 coordinates in row-major order
    pub fn all_moves() -> impl Iterator<Item = Move> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
    }

    pub fn disc_count(&self, player: Player) -> u32 {
        let own = Cell::from(player);

        self.cells.iter().flatten().filter(|&&cell| cell == own).count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// neither side can place a disc anymore
    pub fn is_game_over(&self) -> bool {
        self.is_full() || (!self.has_legal_move(Player::White) && !self.has_legal_move(Player::Black))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..SIZE {
            write!(f, " {col}")?;
        }

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "\n{row}")?;

            for cell in cells {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::White => 'W',
                    Cell::Black => 'B',
                };
                write!(f, " {c}")?;
            }
        }

        Ok(())
    }
}

/*====================================================================================================================*/
