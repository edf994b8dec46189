//! The 3×3 board and its text format.

use super::{Cell, Mark, MoveError, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major (0-8). The free-cell count is cached and
/// recomputed on every mutation, so it always equals the number of empty
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Cell; CELLS]", into = "[Cell; CELLS]")]
pub struct Board {
    cells: [Cell; CELLS],
    free_cells: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
            free_cells: CELLS,
        }
    }

    /// Creates a board from raw cells.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        let mut board = Self {
            cells,
            free_cells: 0,
        };
        board.recount();
        board
    }

    /// Gets the cell at a board index, or `None` if out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a named position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Number of empty cells.
    pub fn free_cells(&self) -> usize {
        self.free_cells
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.free_cells == 0
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + use<> {
        let cells = self.cells;
        (0..CELLS).filter(move |&i| cells[i].is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        let wanted = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == wanted).count()
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::Occupied`] and leaves
    /// the board untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cell(index) {
            None => Err(MoveError::OutOfRange(index)),
            Some(Cell::Empty) => {
                self.put(index, mark);
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied(index)),
        }
    }

    /// Copy of this board with `mark` at `index`.
    ///
    /// The caller guarantees `index` is an empty cell in range.
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        debug_assert!(self.is_empty(index), "cell {index} is not free");
        self.put(index, mark);
        self
    }

    /// Copy of this board with Cross and Nought exchanged.
    pub fn swapped(&self) -> Self {
        let mut cells = self.cells;
        for cell in &mut cells {
            *cell = cell.swapped();
        }
        Self {
            cells,
            free_cells: self.free_cells,
        }
    }

    /// Side to move if the game started with Cross and alternated.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::Cross) <= self.count(Mark::Nought) {
            Mark::Cross
        } else {
            Mark::Nought
        }
    }

    pub(crate) fn put(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::from(mark);
        self.recount();
    }

    fn recount(&mut self) {
        self.free_cells = self.cells.iter().filter(|c| c.is_empty()).count();
    }

    #[cfg(test)]
    pub(crate) fn corrupt_free_cells(&mut self, free_cells: usize) {
        self.free_cells = free_cells;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; CELLS]> for Board {
    fn from(cells: [Cell; CELLS]) -> Self {
        Self::from_cells(cells)
    }
}

impl From<Board> for [Cell; CELLS] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Renders three rows like `X|O|.` separated by newlines.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.cells[row * 3 + col].symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected symbol {:?} at cell {}", symbol, cell)]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Cell index it would have filled.
        cell: usize,
    },

    /// The text did not describe exactly 9 cells.
    #[display("Expected 9 cells, found {}", found)]
    WrongLength {
        /// Number of cells read.
        found: usize,
    },
}

impl std::error::Error for ParseBoardError {}

/// Parses 9 cell symbols in row-major order.
///
/// `X`/`x` is Cross, `O`/`o`/`0` is Nought, `.`/`-`/`_` is empty.
/// Whitespace, `|` and `/` are ignored, so the [`Display`](std::fmt::Display)
/// output parses back.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut found = 0;

        for symbol in s.chars() {
            let cell = match symbol {
                'X' | 'x' => Cell::Cross,
                'O' | 'o' | '0' => Cell::Nought,
                '.' | '-' | '_' => Cell::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return Err(ParseBoardError::InvalidSymbol { symbol, cell: found }),
            };
            if found < CELLS {
                cells[found] = cell;
            }
            found += 1;
        }

        if found != CELLS {
            return Err(ParseBoardError::WrongLength { found });
        }

        Ok(Self::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_free() {
        let board = Board::new();
        assert_eq!(board.free_cells(), 9);
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_updates_free_cells() {
        let mut board = Board::new();
        board.place(4, Mark::Cross).unwrap();
        board.place(0, Mark::Nought).unwrap();
        assert_eq!(board.free_cells(), 7);
        assert_eq!(board.get(Position::Center), Cell::Cross);
        assert_eq!(board.get(Position::TopLeft), Cell::Nought);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.place(4, Mark::Cross).unwrap();
        assert_eq!(board.place(4, Mark::Nought), Err(MoveError::Occupied(4)));
        assert_eq!(board.place(9, Mark::Nought), Err(MoveError::OutOfRange(9)));
        assert_eq!(board.free_cells(), 8);
        assert_eq!(board.get(Position::Center), Cell::Cross);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let child = board.with_mark(3, Mark::Cross);
        assert_eq!(board.free_cells(), 9);
        assert_eq!(child.free_cells(), 8);
        assert!(board.is_empty(3));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cell 4 is not free")]
    fn test_with_mark_refuses_occupied_cell() {
        let board = Board::new().with_mark(4, Mark::Cross);
        let _ = board.with_mark(4, Mark::Nought);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. / .X. / ..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n.|X|.\n.|.|O");
        assert_eq!(board.free_cells(), 5);
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::InvalidSymbol { symbol: '?', cell: 2 })
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 2 })
        );
    }

    #[test]
    fn test_swapped_exchanges_marks() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.swapped().to_string(), "O|X|.\n.|.|.\n.|.|.");
    }

    #[test]
    fn test_deserialize_recounts_free_cells() {
        let board: Board = serde_json::from_str(r#"["Cross","Empty","Empty","Empty","Nought","Empty","Empty","Empty","Empty"]"#).unwrap();
        assert_eq!(board.free_cells(), 7);
    }
}
