//! Playfield module - the field a game is played on
//!
//! The playfield owns the [`Grid`] and at most one current [`Piece`]. Every
//! operation on the current piece borrows the two disjointly, so the piece
//! can check collisions and hand its committed changes to the grid without
//! either owning the other.
//!
//! Observers registered with [`Playfield::add_observer`] are notified after
//! spawn, move, rotate, drop, delete and clear. `clear_row` does not notify;
//! a controller running a line-clear pass calls
//! [`Playfield::notify_observers`] once it is done.

use std::fmt;

use crate::error::FieldError;
use crate::grid::Grid;
use crate::observer::Observers;
use crate::piece::Piece;
use crate::shapes;
use crate::snapshot::{FieldSnapshot, PieceSnapshot};
use crate::types::{
    Cell, Direction, Orientation, PieceKind, Rotation, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT,
    MIN_WIDTH,
};

#[derive(Debug)]
pub struct Playfield {
    grid: Grid,
    current: Option<Piece>,
    observers: Observers,
    revision: u64,
}

impl Playfield {
    /// Create an empty field. Fails unless `width >= 4` and `height >= 8`.
    pub fn new(width: u16, height: u16) -> Result<Self, FieldError> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            grid: Grid::new(width, height),
            current: None,
            observers: Observers::new(),
            revision: 0,
        })
    }

    /// Build a field from a textual layout, one string per row from the top.
    ///
    /// `.` is an empty cell and a piece letter is a locked block of that
    /// kind. All rows must have the same length. The field has no current
    /// piece.
    ///
    /// ```
    /// use minogrid_core::{Playfield, types::PieceKind};
    ///
    /// let mut rows = vec!["...."; 7];
    /// rows.push("JJ.T");
    /// let field = Playfield::from_rows(&rows).unwrap();
    /// assert_eq!(field.get_square_kind(3, 7), Ok(Some(PieceKind::T)));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, FieldError> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        let mut field = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let y = y as i32;
            if row.chars().count() != usize::from(width) {
                return Err(FieldError::InvalidRow(y));
            }
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind: PieceKind = ch.to_string().parse()?;
                field.grid.seed(x as i32, y, kind);
            }
        }
        Ok(field)
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Read-only view of the cells
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn valid_square(&self, x: i32, y: i32) -> bool {
        self.grid.valid_square(x, y)
    }

    pub fn is_empty_square(&self, x: i32, y: i32) -> Result<bool, FieldError> {
        self.grid.is_empty_square(x, y)
    }

    pub fn get_square_kind(&self, x: i32, y: i32) -> Result<Cell, FieldError> {
        self.grid.get_square_kind(x, y)
    }

    pub fn row_is_full(&self, y: i32) -> Result<bool, FieldError> {
        self.grid.row_is_full(y)
    }

    pub fn row_is_empty(&self, y: i32) -> Result<bool, FieldError> {
        self.grid.row_is_empty(y)
    }

    /// Empty row `y` and drop every row above it by one. Does not notify.
    ///
    /// Fails with [`FieldError::PieceLive`] while the current piece is in
    /// play; lock or delete it first.
    pub fn clear_row(&mut self, y: i32) -> Result<(), FieldError> {
        if self.current.as_ref().is_some_and(|piece| !piece.is_deleted()) {
            return Err(FieldError::PieceLive);
        }
        self.grid.clear_row(y)?;
        self.revision += 1;
        tracing::debug!(row = y, "row cleared");
        Ok(())
    }

    /// Empty every cell and drop the current piece
    pub fn clear(&mut self) {
        self.grid.clear();
        self.current = None;
        self.revision += 1;
        self.notify_observers();
    }

    /// Whether the current piece has come to rest with a block anywhere in
    /// the hidden rows.
    ///
    /// The resting check is a non-mutating probe: the piece is not moved.
    pub fn lock_out(&self) -> bool {
        let Some(piece) = &self.current else {
            return false;
        };
        if piece.can_shift(Direction::Down, &self.grid) {
            return false;
        }
        let locked_out = self.grid.hidden_rows_occupied();
        if locked_out {
            tracing::debug!(kind = %piece.kind(), "lock out");
        }
        locked_out
    }

    /// Disjoint borrows of the current piece and the grid
    fn current_parts(&mut self) -> Result<(&mut Piece, &mut Grid), FieldError> {
        let piece = self.current.as_mut().ok_or(FieldError::NoCurrentPiece)?;
        Ok((piece, &mut self.grid))
    }

    fn committed(&mut self, changed: bool) {
        if changed {
            self.revision += 1;
        }
        self.notify_observers();
    }

    /// Move the current piece one cell. `Ok(false)` when blocked.
    pub fn move_current(&mut self, dir: Direction) -> Result<bool, FieldError> {
        let moved = {
            let (piece, grid) = self.current_parts()?;
            piece.shift(dir, grid)
        };
        self.committed(moved);
        Ok(moved)
    }

    /// Rotate the current piece a quarter turn. `Ok(false)` when blocked.
    pub fn rotate_current(&mut self, rotation: Rotation) -> Result<bool, FieldError> {
        let rotated = {
            let (piece, grid) = self.current_parts()?;
            piece.rotate(rotation, grid)?
        };
        self.committed(rotated);
        Ok(rotated)
    }

    /// Hard-drop the current piece. Returns the rows fallen.
    pub fn drop_current(&mut self) -> Result<u32, FieldError> {
        let rows = {
            let (piece, grid) = self.current_parts()?;
            piece.hard_drop(grid)?
        };
        self.committed(true);
        Ok(rows)
    }

    /// Remove the current piece's blocks and return its kind.
    ///
    /// The piece stays current in its deleted state until the next spawn.
    pub fn delete_current(&mut self) -> Result<PieceKind, FieldError> {
        let kind = {
            let (piece, grid) = self.current_parts()?;
            piece.delete(grid)?;
            piece.kind()
        };
        self.committed(true);
        Ok(kind)
    }

    /// Spawn `kind` North at its guideline position and make it current.
    ///
    /// Whatever the previous current piece covered stays in the grid.
    /// Returns `false` when the spawn position is blocked (a top out); the
    /// new piece is then current but deleted.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let anchor = shapes::spawn_anchor(kind, self.width());
        let piece = Piece::place(kind, Orientation::North, anchor, &mut self.grid);
        let spawned = !piece.is_deleted();
        tracing::debug!(kind = %kind, ?anchor, spawned, "spawn");
        self.current = Some(piece);
        self.committed(true);
        spawned
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// Detach the current piece, leaving its blocks in the grid.
    pub fn lock_current(&mut self) -> Result<PieceKind, FieldError> {
        let piece = self.current.take().ok_or(FieldError::NoCurrentPiece)?;
        self.revision += 1;
        Ok(piece.kind())
    }

    pub fn hidden_rows_occupied(&self) -> bool {
        self.grid.hidden_rows_occupied()
    }

    /// Register a callback run after every committed mutation
    pub fn add_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&Playfield) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Run every observer, in registration order, against the current state
    pub fn notify_observers(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let mut observers = std::mem::take(&mut self.observers);
        observers.notify(self);
        self.observers = observers;
    }

    /// Incremented on every committed change to the grid or current piece
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        let current = self.current.as_ref().and_then(|piece| {
            let squares: [_; 4] = piece.squares().try_into().ok()?;
            Some(PieceSnapshot {
                kind: piece.kind(),
                orientation: piece.orientation(),
                squares,
            })
        });
        FieldSnapshot {
            width: self.width(),
            height: self.height(),
            cells: self.grid.cells().to_vec(),
            current,
            revision: self.revision,
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            grid: Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            current: None,
            observers: Observers::new(),
            revision: 0,
        }
    }
}

/// Boxed grid with one cell per column, or with `{:#}` the compact layout
/// accepted by [`Playfield::from_rows`].
impl fmt::Display for Playfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for (y, row) in self.grid.rows().enumerate() {
                if y > 0 {
                    writeln!(f)?;
                }
                for cell in row {
                    match cell {
                        Some(kind) => write!(f, "{}", kind)?,
                        None => write!(f, ".")?,
                    }
                }
            }
            return Ok(());
        }

        let border = "---+".repeat(usize::from(self.width()));
        writeln!(f, "+{}", border)?;
        for row in self.grid.rows() {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Some(kind) => write!(f, " {} |", kind)?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "+{}", border)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell as Counter, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_new_rejects_small_fields() {
        assert_eq!(
            Playfield::new(3, 24).unwrap_err(),
            FieldError::InvalidDimensions { width: 3, height: 24 }
        );
        assert!(Playfield::new(10, 7).is_err());
        assert!(Playfield::new(4, 8).is_ok());
    }

    #[test]
    fn test_current_ops_need_a_piece() {
        let mut field = Playfield::default();
        assert_eq!(field.move_current(Direction::Left), Err(FieldError::NoCurrentPiece));
        assert_eq!(field.rotate_current(Rotation::Right), Err(FieldError::NoCurrentPiece));
        assert_eq!(field.drop_current(), Err(FieldError::NoCurrentPiece));
        assert_eq!(field.delete_current(), Err(FieldError::NoCurrentPiece));
        assert_eq!(field.lock_current(), Err(FieldError::NoCurrentPiece));
    }

    #[test]
    fn test_observers_run_after_commits() {
        let mut field = Playfield::default();
        let calls = Rc::new(Counter::new(0));
        let seen = Rc::clone(&calls);
        field.add_observer(move |_| seen.set(seen.get() + 1));

        field.spawn(PieceKind::T);
        field.move_current(Direction::Left).unwrap();
        field.rotate_current(Rotation::Left).unwrap();
        field.drop_current().unwrap();
        field.delete_current().unwrap();
        field.clear();
        assert_eq!(calls.get(), 6);

        field.clear_row(23).unwrap();
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let mut field = Playfield::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in [1, 2] {
            let order = Rc::clone(&order);
            field.add_observer(move |_| order.borrow_mut().push(id));
        }
        field.spawn(PieceKind::T);
        assert_eq!(*order.borrow(), vec![1, 2]);

        field.move_current(Direction::Left).unwrap();
        assert_eq!(*order.borrow(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_failed_spawn_bumps_revision() {
        let mut field = Playfield::default();
        assert!(field.spawn(PieceKind::O));
        let before = field.revision();
        assert!(!field.spawn(PieceKind::O));
        assert!(field.revision() > before);
        assert!(field.snapshot().current.is_none());
    }

    #[test]
    fn test_observer_sees_committed_state() {
        let mut field = Playfield::default();
        let occupied = Rc::new(Counter::new(0));
        let seen = Rc::clone(&occupied);
        field.add_observer(move |f| {
            seen.set(f.grid().cells().iter().filter(|c| c.is_some()).count());
        });
        field.spawn(PieceKind::O);
        assert_eq!(occupied.get(), 4);
    }

    #[test]
    fn test_failed_spawn_leaves_deleted_current() {
        let mut field = Playfield::default();
        assert!(field.spawn(PieceKind::O));
        assert!(!field.spawn(PieceKind::O));
        let current = field.current().unwrap();
        assert!(current.is_deleted());
        assert_eq!(field.move_current(Direction::Down), Ok(true));
        assert_eq!(field.grid().cells().iter().filter(|c| c.is_some()).count(), 4);
    }

    #[test]
    fn test_revision_counts_commits() {
        let mut field = Playfield::default();
        field.spawn(PieceKind::I);
        let after_spawn = field.revision();

        // Blocked moves do not count.
        while field.move_current(Direction::Left).unwrap() {}
        let at_wall = field.revision();
        assert!(!field.move_current(Direction::Left).unwrap());
        assert_eq!(field.revision(), at_wall);

        field.move_current(Direction::Down).unwrap();
        assert!(field.revision() > after_spawn);
        assert_eq!(field.snapshot().revision, field.revision());
    }

    #[test]
    fn test_from_rows_round_trips_through_alternate_display() {
        let rows = [
            "....", "....", "....", "....", "....", ".T..", "TTT.", "IIII",
        ];
        let field = Playfield::from_rows(&rows).unwrap();
        assert_eq!(format!("{:#}", field), rows.join("\n"));
    }

    #[test]
    fn test_from_rows_rejects_bad_layouts() {
        let mut rows = vec!["...."; 8];
        rows[3] = "...";
        assert_eq!(Playfield::from_rows(&rows).unwrap_err(), FieldError::InvalidRow(3));
        rows[3] = "..x.";
        assert_eq!(
            Playfield::from_rows(&rows).unwrap_err(),
            FieldError::InvalidKind("x".to_string())
        );
    }

    #[test]
    fn test_display_draws_boxed_grid() {
        let field = Playfield::new(4, 8).unwrap();
        let text = field.to_string();
        assert!(text.starts_with("+---+---+---+---+\n|   |   |   |   |\n"));
        assert_eq!(text.lines().count(), 17);
    }
}
