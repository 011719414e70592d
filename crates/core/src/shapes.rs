//! Shapes module - per-kind placement and rotation tables
//!
//! Every table is expressed relative to the piece's *anchor*: the leftmost
//! block of the piece, ties broken by the topmost. The anchor is not a
//! geometric pivot; it is simply the first square once a placement is
//! sorted by `(x, y)`.
//!
//! Two tables describe each kind:
//!
//! - a placement table giving the four block offsets from the anchor for
//!   each orientation (offsets are listed in sorted order, so offset 0 is
//!   always `(0, 0)`);
//! - a rotation table giving, for each orientation and turn direction, the
//!   displacement applied to the anchor before the destination placement is
//!   laid out.
//!
//! Together they reproduce Super Rotation System basic rotation exactly:
//! rotating with these tables lands every block where an SRS rotation about
//! the piece's true centre would put it. There is a single attempt per
//! rotation; a blocked rotation fails rather than trying further kicks.

use crate::types::{Orientation, PieceKind, Rotation, Square};

/// Offset of a single block relative to the anchor
pub type Offset = (i32, i32);

/// Four block offsets for one orientation
pub type Placement = [Offset; 4];

/// Placements indexed by [`Orientation::index`]
pub type PlacementTable = [Placement; 4];

/// Anchor displacement indexed by `[from orientation][Left = 0, Right = 1]`
pub type KickTable = [[Offset; 2]; 4];

const J_PLACEMENTS: PlacementTable = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 0)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(0, 0), (1, -2), (1, -1), (1, 0)],
];

const J_KICKS: KickTable = [
    [(0, 2), (1, 0)],
    [(-1, 0), (-1, 1)],
    [(1, -1), (0, 1)],
    [(0, -1), (0, -2)],
];

const L_PLACEMENTS: PlacementTable = [
    [(0, 0), (1, 0), (2, -1), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 0), (2, 0)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const L_KICKS: KickTable = [
    [(0, -1), (1, -1)],
    [(-1, 1), (-1, 1)],
    [(1, -1), (0, -1)],
    [(0, 1), (0, 1)],
];

/// All four orientations of O are the same square, so it always rotates
const O_PLACEMENTS: PlacementTable = [[(0, 0), (0, 1), (1, 0), (1, 1)]; 4];

const O_KICKS: KickTable = [[(0, 0); 2]; 4];

const I_HORIZONTAL: Placement = [(0, 0), (1, 0), (2, 0), (3, 0)];
const I_VERTICAL: Placement = [(0, 0), (0, 1), (0, 2), (0, 3)];

const I_PLACEMENTS: PlacementTable = [I_HORIZONTAL, I_VERTICAL, I_HORIZONTAL, I_VERTICAL];

const I_KICKS: KickTable = [
    [(1, -1), (2, -1)],
    [(-2, 1), (-2, 2)],
    [(2, -2), (1, -2)],
    [(-1, 2), (-1, 1)],
];

const S_HORIZONTAL: Placement = [(0, 0), (1, -1), (1, 0), (2, -1)];
const S_VERTICAL: Placement = [(0, 0), (0, 1), (1, 1), (1, 2)];

const S_PLACEMENTS: PlacementTable = [S_HORIZONTAL, S_VERTICAL, S_HORIZONTAL, S_VERTICAL];

const S_KICKS: KickTable = [
    [(0, -1), (1, -1)],
    [(-1, 1), (-1, 2)],
    [(1, -2), (0, -2)],
    [(0, 2), (0, 1)],
];

const Z_HORIZONTAL: Placement = [(0, 0), (1, 0), (1, 1), (2, 1)];
const Z_VERTICAL: Placement = [(0, 0), (0, 1), (1, -1), (1, 0)];

const Z_PLACEMENTS: PlacementTable = [Z_HORIZONTAL, Z_VERTICAL, Z_HORIZONTAL, Z_VERTICAL];

const Z_KICKS: KickTable = [
    [(0, 1), (1, 1)],
    [(-1, -1), (-1, 0)],
    [(1, 0), (0, 0)],
    [(0, 0), (0, -1)],
];

const T_PLACEMENTS: PlacementTable = [
    [(0, 0), (1, -1), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 0)],
    [(0, 0), (1, -1), (1, 0), (1, 1)],
];

const T_KICKS: KickTable = [
    [(0, 0), (1, -1)],
    [(-1, 1), (-1, 1)],
    [(1, -1), (0, 0)],
    [(0, 0), (0, 0)],
];

/// Placement table for a piece kind
pub fn placement_table(kind: PieceKind) -> &'static PlacementTable {
    match kind {
        PieceKind::J => &J_PLACEMENTS,
        PieceKind::L => &L_PLACEMENTS,
        PieceKind::O => &O_PLACEMENTS,
        PieceKind::I => &I_PLACEMENTS,
        PieceKind::S => &S_PLACEMENTS,
        PieceKind::Z => &Z_PLACEMENTS,
        PieceKind::T => &T_PLACEMENTS,
    }
}

/// Rotation table for a piece kind
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::J => &J_KICKS,
        PieceKind::L => &L_KICKS,
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        PieceKind::S => &S_KICKS,
        PieceKind::Z => &Z_KICKS,
        PieceKind::T => &T_KICKS,
    }
}

/// Block offsets for a kind in one orientation
#[inline]
pub fn placement(kind: PieceKind, orientation: Orientation) -> &'static Placement {
    &placement_table(kind)[orientation.index()]
}

/// Anchor displacement for turning `kind` from `from` in `rotation`
#[inline]
pub fn kick(kind: PieceKind, from: Orientation, rotation: Rotation) -> Offset {
    let column = match rotation {
        Rotation::Left => 0,
        Rotation::Right => 1,
    };
    kick_table(kind)[from.index()][column]
}

/// Absolute squares covered by `kind` in `orientation` with its anchor at `anchor`
#[inline]
pub fn squares_at(kind: PieceKind, orientation: Orientation, anchor: Square) -> [Square; 4] {
    let (ax, ay) = anchor;
    placement(kind, orientation).map(|(dx, dy)| (ax + dx, ay + dy))
}

/// Anchor of a freshly spawned piece relative to the field's middle column
/// and the top of the field.
///
/// With these anchors a North piece sits in rows 2-3, the bottom two hidden
/// rows, left-leaning on fields of even width.
pub fn spawn_offset(kind: PieceKind) -> Offset {
    match kind {
        PieceKind::J => (-1, 2),
        PieceKind::L => (-1, 3),
        PieceKind::O => (0, 2),
        PieceKind::I => (-1, 3),
        PieceKind::S => (-1, 3),
        PieceKind::Z => (-1, 2),
        PieceKind::T => (-1, 3),
    }
}

/// Guideline middle column: left of centre on even widths
pub fn middle_column(width: u16) -> i32 {
    let width = i32::from(width);
    if width % 2 == 0 {
        width / 2 - 1
    } else {
        width / 2
    }
}

/// Spawn anchor for `kind` on a field of `width` columns
pub fn spawn_anchor(kind: PieceKind, width: u16) -> Square {
    let (dx, dy) = spawn_offset(kind);
    (middle_column(width) + dx, dy)
}
