//! Grid module - cell storage behind the playfield
//!
//! The grid is a `width x height` array of cells stored flat in row-major
//! order (`y * width + x`) for cheap row copies during line clears.
//! Logical addressing is `(x, y)` with `(0, 0)` at the top-left.
//!
//! The grid never decides what to write on its own. Cells change only
//! through [`Grid::update`], which a [`Piece`] calls after it commits a new
//! placement, or through the row-level operations the controller drives
//! (`clear_row`, `clear`).

use crate::error::FieldError;
use crate::piece::Piece;
use crate::types::{Cell, PieceKind, Square, HIDDEN_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Dimensions are validated by the playfield.
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.valid_square(x, y) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    #[inline]
    fn row_range(&self, y: usize) -> std::ops::Range<usize> {
        let width = usize::from(self.width);
        let start = y * width;
        start..start + width
    }

    fn check_row(&self, y: i32) -> Result<usize, FieldError> {
        if (0..i32::from(self.height)).contains(&y) {
            Ok(y as usize)
        } else {
            Err(FieldError::InvalidRow(y))
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Check if (x, y) denotes a square on the field
    #[inline]
    pub fn valid_square(&self, x: i32, y: i32) -> bool {
        (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y)
    }

    pub fn is_empty_square(&self, x: i32, y: i32) -> Result<bool, FieldError> {
        Ok(self.get_square_kind(x, y)?.is_none())
    }

    /// Kind of block occupying (x, y), `None` when empty
    pub fn get_square_kind(&self, x: i32, y: i32) -> Result<Cell, FieldError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(FieldError::InvalidSquare { x, y })
    }

    pub fn row_is_full(&self, y: i32) -> Result<bool, FieldError> {
        let y = self.check_row(y)?;
        Ok(self.cells[self.row_range(y)].iter().all(Option::is_some))
    }

    pub fn row_is_empty(&self, y: i32) -> Result<bool, FieldError> {
        let y = self.check_row(y)?;
        Ok(self.cells[self.row_range(y)].iter().all(Option::is_none))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: i32) -> Result<&[Cell], FieldError> {
        let y = self.check_row(y)?;
        Ok(&self.cells[self.row_range(y)])
    }

    /// Iterate rows from the top of the field
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(usize::from(self.width))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty row `y`, then drop every row above it by one.
    ///
    /// Rows are moved one at a time from `y - 1` up to the top, so each move
    /// lands on the row emptied by the previous step. Row 0 ends up empty.
    pub fn clear_row(&mut self, y: i32) -> Result<(), FieldError> {
        let y = self.check_row(y)?;
        let range = self.row_range(y);
        self.cells[range].fill(None);
        for row in (0..y).rev() {
            self.move_row_down_one(row);
        }
        Ok(())
    }

    /// Move row `y` onto row `y + 1`, which must be empty.
    fn move_row_down_one(&mut self, y: usize) {
        debug_assert!(y + 1 < usize::from(self.height));
        let src = self.row_range(y);
        let dst = self.row_range(y + 1);
        debug_assert!(
            self.cells[dst.clone()].iter().all(Option::is_none),
            "row {} is not empty",
            y + 1
        );
        self.cells.copy_within(src.clone(), dst.start);
        self.cells[src].fill(None);
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Whether any of the hidden rows holds a block
    pub fn hidden_rows_occupied(&self) -> bool {
        let hidden = usize::from(HIDDEN_ROWS.min(self.height));
        let end = hidden * usize::from(self.width);
        self.cells[..end].iter().any(Option::is_some)
    }

    /// Placement validity shared by every piece.
    ///
    /// A candidate is accepted iff every square is either already held by
    /// the piece (`own`) or on the field and empty. One bad square rejects
    /// the whole candidate.
    pub fn fits(&self, candidate: &[Square], own: &[Square]) -> bool {
        candidate.iter().all(|&(x, y)| {
            own.contains(&(x, y)) || matches!(self.index(x, y).map(|i| self.cells[i]), Some(None))
        })
    }

    /// Apply a piece's committed move: empty its previous squares, then fill
    /// its current squares with its kind. This is the only way a piece's
    /// blocks reach the grid.
    pub(crate) fn update(&mut self, piece: &Piece) {
        for &(x, y) in piece.prev_squares() {
            self.write(x, y, None);
        }
        let kind = piece.kind();
        for &(x, y) in piece.squares() {
            self.write(x, y, Some(kind));
        }
        tracing::trace!(
            kind = %kind,
            orientation = piece.orientation().as_str(),
            squares = ?piece.squares(),
            "placement committed"
        );
    }

    fn write(&mut self, x: i32, y: i32, cell: Cell) {
        match self.index(x, y) {
            Some(idx) => self.cells[idx] = cell,
            None => debug_assert!(false, "write outside field at ({}, {})", x, y),
        }
    }

    /// Seed a cell while building a field from a layout.
    pub(crate) fn seed(&mut self, x: i32, y: i32, kind: PieceKind) {
        self.write(x, y, Some(kind));
    }
}
