use crate::error::{Encoding, Error, Result};
use std::fmt;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// The 8 three-in-a-row lines: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The content of a single cell.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Oracle encoding: `0` = empty, `1` = X, `-1` = O.
    pub const fn to_oracle(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => -1,
        }
    }

    /// External (network) encoding: `3` = empty, `1` = X, `0` = O.
    pub const fn to_external(self) -> u8 {
        match self {
            Cell::Empty => 3,
            Cell::X => 1,
            Cell::O => 0,
        }
    }

    pub const fn from_oracle(value: i8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            -1 => Some(Cell::O),
            _ => None,
        }
    }

    pub const fn from_external(value: u8) -> Option<Cell> {
        match value {
            3 => Some(Cell::Empty),
            1 => Some(Cell::X),
            0 => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any.
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// One of the two sides. X always moves first and is the maximizing player.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub const fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::X)
    }
}

/// A tic-tac-toe position.
///
/// Cells are stored row-major, index 0 is the top-left corner and 8 the
/// bottom-right one. The board carries no turn field: whose move it is gets
/// derived from the piece counts by [`Board::next_player`].
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Parses a board in oracle encoding, rejecting wrong lengths and values.
    pub fn from_oracle(values: &[i8]) -> Result<Self> {
        check_length(values.len())?;
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (position, &value) in values.iter().enumerate() {
            cells[position] = Cell::from_oracle(value).ok_or(Error::InvalidCellValue {
                value: value.into(),
                position,
                encoding: Encoding::Oracle,
            })?;
        }
        Ok(Self { cells })
    }

    /// Parses a board in external encoding, rejecting wrong lengths and values.
    pub fn from_external(values: &[u8]) -> Result<Self> {
        check_length(values.len())?;
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (position, &value) in values.iter().enumerate() {
            cells[position] = Cell::from_external(value).ok_or(Error::InvalidCellValue {
                value: value.into(),
                position,
                encoding: Encoding::External,
            })?;
        }
        Ok(Self { cells })
    }

    pub fn to_oracle(&self) -> [i8; BOARD_SIZE] {
        self.cells.map(Cell::to_oracle)
    }

    pub fn to_external(&self) -> [u8; BOARD_SIZE] {
        self.cells.map(Cell::to_external)
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Puts `player`'s mark on `index`, overwriting whatever was there.
    pub fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = player.mark();
    }

    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the owner of the first completed line, scanning rows, columns
    /// and then diagonals.
    pub fn winner(&self) -> Option<Player> {
        WIN_LINES.iter().find_map(|&[a, b, c]| {
            let first = self.cells[a];
            if first != Cell::Empty && first == self.cells[b] && first == self.cells[c] {
                first.player()
            } else {
                None
            }
        })
    }

    /// Whether `player` owns at least one completed line.
    pub fn has_line(&self, player: Player) -> bool {
        let mark = player.mark();
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == mark))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|cell| **cell == mark).count()
    }

    /// Infers the side to move: X when both sides have the same number of
    /// marks, O otherwise.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

/// Converts a board from oracle encoding to external encoding.
pub fn oracle_to_external(values: &[i8]) -> Result<[u8; BOARD_SIZE]> {
    Board::from_oracle(values).map(|board| board.to_external())
}

/// Converts a board from external encoding to oracle encoding.
pub fn external_to_oracle(values: &[u8]) -> Result<[i8; BOARD_SIZE]> {
    Board::from_external(values).map(|board| board.to_oracle())
}

fn check_length(got: usize) -> Result<()> {
    if got != BOARD_SIZE {
        return Err(Error::InvalidBoardLength {
            expected: BOARD_SIZE,
            got,
        });
    }
    Ok(())
}
