//! Piece module - a tetromino live on a playfield
//!
//! A piece owns its kind, its orientation and the four squares it covers,
//! kept sorted by `(x, y)` so the first square is always the anchor that
//! the tables in [`crate::shapes`] are relative to. It also keeps the
//! squares it covered before its last committed change so the grid can
//! erase them.
//!
//! A piece never owns the grid. Each operation borrows the grid: shared
//! for collision checks, mutably only to hand over a committed change via
//! [`Grid::update`]. A rejected operation leaves both untouched.
//!
//! A piece whose squares were removed (see [`Piece::delete`]) is *deleted*.
//! Deleted pieces ignore [`Piece::shift`] (reported as success) and reject
//! every other operation with [`FieldError::PieceDeleted`].

use arrayvec::ArrayVec;

use crate::error::FieldError;
use crate::grid::Grid;
use crate::shapes;
use crate::types::{Direction, Orientation, PieceKind, Rotation, Square};

/// The squares covered by a piece: four while live, none once deleted
pub type Squares = ArrayVec<Square, 4>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    orientation: Orientation,
    squares: Squares,
    prev_squares: Squares,
}

impl Piece {
    /// Place a new piece with its anchor at `anchor`.
    ///
    /// If the placement is blocked the piece comes back deleted and the grid
    /// is untouched; check [`Piece::is_deleted`].
    pub fn place(
        kind: PieceKind,
        orientation: Orientation,
        anchor: Square,
        grid: &mut Grid,
    ) -> Self {
        let mut piece = Self {
            kind,
            orientation,
            squares: Squares::new(),
            prev_squares: Squares::new(),
        };
        if piece.try_place(anchor, orientation, grid) {
            grid.update(&piece);
        }
        piece
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Squares currently covered, anchor first
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Squares covered before the last committed change
    pub fn prev_squares(&self) -> &[Square] {
        &self.prev_squares
    }

    /// Leftmost, then topmost square; `None` once deleted
    pub fn anchor(&self) -> Option<Square> {
        self.squares.first().copied()
    }

    pub fn is_deleted(&self) -> bool {
        self.squares.is_empty()
    }

    fn live_anchor(&self) -> Result<Square, FieldError> {
        self.anchor().ok_or(FieldError::PieceDeleted)
    }

    /// Candidate squares for `orientation` with the anchor at `anchor`
    fn candidate(&self, anchor: Square, orientation: Orientation) -> [Square; 4] {
        let squares = shapes::squares_at(self.kind, orientation, anchor);
        debug_assert!(squares.windows(2).all(|w| w[0] < w[1]));
        squares
    }

    /// Whether the piece could sit at `anchor` in `orientation`
    fn fits_at(&self, anchor: Square, orientation: Orientation, grid: &Grid) -> bool {
        grid.fits(&self.candidate(anchor, orientation), &self.squares)
    }

    /// Commit a new placement if it fits. Does not touch the grid.
    fn try_place(&mut self, anchor: Square, orientation: Orientation, grid: &Grid) -> bool {
        let candidate = self.candidate(anchor, orientation);
        if !grid.fits(&candidate, &self.squares) {
            return false;
        }
        self.prev_squares = std::mem::replace(&mut self.squares, Squares::from(candidate));
        self.orientation = orientation;
        true
    }

    /// Whether a one-cell move in `dir` would succeed, without moving.
    ///
    /// A deleted piece reports `true`, matching [`Piece::shift`].
    pub fn can_shift(&self, dir: Direction, grid: &Grid) -> bool {
        let Some((x, y)) = self.anchor() else {
            return true;
        };
        let (dx, dy) = dir.delta();
        self.fits_at((x + dx, y + dy), self.orientation, grid)
    }

    /// Move one cell in `dir`. Returns `false` and changes nothing when the
    /// destination is blocked or off the field.
    pub fn shift(&mut self, dir: Direction, grid: &mut Grid) -> bool {
        let Some((x, y)) = self.anchor() else {
            return true;
        };
        let (dx, dy) = dir.delta();
        if self.try_place((x + dx, y + dy), self.orientation, grid) {
            grid.update(self);
            true
        } else {
            false
        }
    }

    /// Turn 90° in `rotation`, displacing the anchor by the kind's rotation
    /// table. A blocked rotation returns `Ok(false)` and changes nothing.
    pub fn rotate(&mut self, rotation: Rotation, grid: &mut Grid) -> Result<bool, FieldError> {
        let (x, y) = self.live_anchor()?;
        let (dx, dy) = shapes::kick(self.kind, self.orientation, rotation);
        let target = self.orientation.rotate(rotation);
        if self.try_place((x + dx, y + dy), target, grid) {
            grid.update(self);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Drop straight down to the lowest reachable position.
    ///
    /// The grid sees a single change from the pre-drop squares to the final
    /// ones. Returns the number of rows fallen.
    pub fn hard_drop(&mut self, grid: &mut Grid) -> Result<u32, FieldError> {
        let (x, y) = self.live_anchor()?;
        let mut rows = 0;
        while self.fits_at((x, y + rows as i32 + 1), self.orientation, grid) {
            rows += 1;
        }
        let landed = self.try_place((x, y + rows as i32), self.orientation, grid);
        debug_assert!(landed);
        grid.update(self);
        Ok(rows)
    }

    /// Remove the piece's blocks from the grid without locking them.
    pub fn delete(&mut self, grid: &mut Grid) -> Result<(), FieldError> {
        if self.is_deleted() {
            return Err(FieldError::PieceDeleted);
        }
        self.prev_squares = std::mem::take(&mut self.squares);
        grid.update(self);
        Ok(())
    }

    /// Squares the piece would cover after a hard drop, without moving.
    pub fn ghost(&self, grid: &Grid) -> Option<[Square; 4]> {
        let (x, y) = self.anchor()?;
        let mut rows = 0;
        while self.fits_at((x, y + rows + 1), self.orientation, grid) {
            rows += 1;
        }
        Some(self.candidate((x, y + rows), self.orientation))
    }
}
