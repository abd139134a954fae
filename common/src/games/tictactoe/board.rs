use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::{CELL_COUNT, Mark};

/// Rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidLength { found: usize },
    InvalidCell { index: usize, found: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidLength { found } => {
                write!(f, "Board must have exactly {} cells, got {}", CELL_COUNT, found)
            }
            BoardError::InvalidCell { index, found } => {
                write!(f, "Invalid cell '{}' at index {}", found, index)
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: &[Mark]) -> Result<Self, BoardError> {
        let cells: [Mark; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidLength { found: cells.len() })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Copy of this board with `mark` written at `index`.
    /// `index` must be below `CELL_COUNT`; anything else panics.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        debug_assert!(index < CELL_COUNT, "cell index {} out of bounds", index);
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl From<[Mark; CELL_COUNT]> for Board {
    fn from(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(BoardError::InvalidLength { found: chars.len() });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, &c) in chars.iter().enumerate() {
            cells[index] = Mark::from_char(c).ok_or(BoardError::InvalidCell { index, found: c })?;
        }
        Ok(Self { cells })
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.is_empty_at(index)
}
