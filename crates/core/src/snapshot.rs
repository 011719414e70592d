use crate::types::{Cell, Orientation, PieceKind, Square, HIDDEN_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub squares: [Square; 4],
}

/// Owned copy of a playfield at one revision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSnapshot {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
    pub current: Option<PieceSnapshot>,
    pub revision: u64,
}

impl FieldSnapshot {
    /// Cell at (x, y), `None` when off the field or empty
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if !(0..i32::from(self.width)).contains(&x) || !(0..i32::from(self.height)).contains(&y) {
            return None;
        }
        self.cells[y as usize * usize::from(self.width) + x as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(usize::from(self.width))
    }

    /// Rows shown to a player: everything below the hidden rows
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows().skip(usize::from(HIDDEN_ROWS))
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
