//! The Super Nim board: a square grid of cells that may hold chips.

use crate::types::{Axis, Cell, Line};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Glyph rendered for an occupied cell.
const CHIP: char = '•';

/// Errors that can occur when constructing a board.
///
/// These are configuration errors: no valid board exists for the inputs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The board must have at least one row and column.
    #[display("Board size must be positive")]
    ZeroSize,

    /// The board has more cells than can be allocated.
    #[display("A {size}x{size} board is too large")]
    TooLarge {
        /// Requested board dimension.
        size: usize,
    },

    /// Serialized cells do not fill a square board.
    #[display("A {size}x{size} board cannot hold {cells} cells")]
    CellCountMismatch {
        /// Board dimension.
        size: usize,
        /// Number of cells supplied.
        cells: usize,
    },

    /// More chips were requested than the board has cells.
    #[display("Cannot place {chips} chips on a board with {capacity} cells")]
    TooManyChips {
        /// Requested chip count.
        chips: usize,
        /// Number of cells on the board.
        capacity: usize,
    },

    /// A chip coordinate lies outside the board.
    #[display("Cell ({row}, {column}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Row of the offending coordinate.
        row: usize,
        /// Column of the offending coordinate.
        column: usize,
        /// Board dimension.
        size: usize,
    },
}

impl std::error::Error for BoardError {}

/// Square Super Nim board, stored row-major.
///
/// The number of occupied cells never grows after construction: the only
/// mutations are [`Board::clear_row`] and [`Board::clear_column`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr { size, cells } = repr;
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(BoardError::CellCountMismatch {
                size,
                cells: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }
}

impl Board {
    /// Creates a board with `chips` chips at distinct, uniformly random cells.
    ///
    /// Positions are sampled without replacement from all `size * size`
    /// cells using the supplied random source.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroSize`] for a zero-sized board and
    /// [`BoardError::TooManyChips`] when `chips` exceeds the cell count.
    #[instrument(skip(rng))]
    pub fn random<R: Rng + ?Sized>(size: usize, chips: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::empty(size)?;
        let capacity = board.cells.len();
        if chips > capacity {
            return Err(BoardError::TooManyChips { chips, capacity });
        }

        for idx in rand::seq::index::sample(rng, capacity, chips).into_iter() {
            board.cells[idx] = Cell::Occupied;
        }

        debug!(size, chips, "Generated board");
        Ok(board)
    }

    /// Creates a board with chips at exactly the given `(row, column)` cells.
    ///
    /// Duplicate coordinates collapse into a single chip.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroSize`] for a zero-sized board and
    /// [`BoardError::OutOfBounds`] for a coordinate outside the grid.
    #[instrument]
    pub fn from_chips(size: usize, chips: &[(usize, usize)]) -> Result<Self, BoardError> {
        let mut board = Self::empty(size)?;
        for &(row, column) in chips {
            if row >= size || column >= size {
                return Err(BoardError::OutOfBounds { row, column, size });
            }
            let idx = board.index(row, column);
            board.cells[idx] = Cell::Occupied;
        }
        Ok(board)
    }

    fn empty(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        let capacity = size
            .checked_mul(size)
            .ok_or(BoardError::TooLarge { size })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(capacity)
            .map_err(|_| BoardError::TooLarge { size })?;
        cells.resize(capacity, Cell::Empty);
        Ok(Self { size, cells })
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.size + column
    }

    /// Board dimension (rows and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `(row, column)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.size && column < self.size).then(|| self.cells[self.index(row, column)])
    }

    /// Returns true if no cell holds a chip.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_occupied())
    }

    /// Number of chips on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Coordinates of every chip, in row-major order.
    pub fn chips(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Returns true if row `row` holds at least one chip.
    ///
    /// Out-of-range rows hold nothing.
    pub fn has_occupied_in_row(&self, row: usize) -> bool {
        self.has_occupied_in(Line::row(row))
    }

    /// Returns true if column `column` holds at least one chip.
    ///
    /// Out-of-range columns hold nothing.
    pub fn has_occupied_in_column(&self, column: usize) -> bool {
        self.has_occupied_in(Line::column(column))
    }

    /// Returns true if `line` holds at least one chip.
    pub fn has_occupied_in(&self, line: Line) -> bool {
        self.line_count(line) > 0
    }

    /// Number of chips on `line`; zero for out-of-range lines.
    pub fn line_count(&self, line: Line) -> usize {
        self.line_indices(line)
            .filter(|&idx| self.cells[idx].is_occupied())
            .count()
    }

    /// Removes every chip from row `row`. Idempotent.
    #[instrument(skip(self))]
    pub fn clear_row(&mut self, row: usize) {
        self.clear(Line::row(row));
    }

    /// Removes every chip from column `column`. Idempotent.
    #[instrument(skip(self))]
    pub fn clear_column(&mut self, column: usize) {
        self.clear(Line::column(column));
    }

    /// Removes every chip from `line`. Out-of-range lines are left alone.
    pub fn clear(&mut self, line: Line) {
        let indices: Vec<usize> = self.line_indices(line).collect();
        for idx in indices {
            self.cells[idx] = Cell::Empty;
        }
    }

    /// Row-major indices of the cells on `line`; empty when out of range.
    fn line_indices(&self, line: Line) -> impl Iterator<Item = usize> {
        let size = self.size;
        let in_range = line.index < size;
        let count = if in_range { size } else { 0 };
        (0..count).map(move |step| match line.axis {
            Axis::Row => line.index * size + step,
            Axis::Column => step * size + line.index,
        })
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with row and column indices.
    ///
    /// ```text
    ///   0 1 2
    /// 0 •
    /// 1   • •
    /// 2
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.size.saturating_sub(1).to_string().len();

        write!(f, "{:width$}", "")?;
        for column in 0..self.size {
            write!(f, " {column:>width$}")?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{row:>width$}")?;
            for column in 0..self.size {
                let glyph = match self.cells[self.index(row, column)] {
                    Cell::Occupied => CHIP,
                    Cell::Empty => ' ',
                };
                write!(f, " {glyph:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
