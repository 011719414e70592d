//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the playfield, the
//! session controller and the binaries. All types are plain data with no
//! external dependencies.
//!
//! # Field Dimensions
//!
//! The guideline playfield is 10 columns by 24 rows. The top
//! [`HIDDEN_ROWS`] rows are never shown to the player; they only host spawn
//! positions and lock-out detection.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 10 | Guideline column count |
//! | `DEFAULT_HEIGHT` | 24 | 20 visible rows plus the hidden rows |
//! | `HIDDEN_ROWS` | 4 | Rows above the visible field |
//! | `MIN_WIDTH` | 4 | Narrowest field that can host an I piece |
//! | `MIN_HEIGHT` | 8 | Hidden rows plus room for a vertical I piece |
//!
//! # Coordinates
//!
//! A square is addressed as `(x, y)` with `(0, 0)` at the top-left corner;
//! `x` grows to the right and `y` grows downwards.
//!
//! # Examples
//!
//! ```
//! use minogrid_types::{Direction, Orientation, PieceKind, Rotation};
//!
//! // Parse from string (case-insensitive)
//! let parsed: PieceKind = "t".parse().unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Orientation cycle
//! assert_eq!(Orientation::North.rotate(Rotation::Right), Orientation::East);
//! assert_eq!(Orientation::North.rotate(Rotation::Left), Orientation::West);
//!
//! // Directions carry their unit step
//! assert_eq!(Direction::Down.delta(), (0, 1));
//! ```

use std::fmt;
use std::str::FromStr;

/// Guideline field width in columns
pub const DEFAULT_WIDTH: u16 = 10;

/// Guideline field height in rows, hidden rows included
pub const DEFAULT_HEIGHT: u16 = 24;

/// Rows at the top of the field that are never rendered
pub const HIDDEN_ROWS: u16 = 4;

/// Narrowest supported field
pub const MIN_WIDTH: u16 = 4;

/// Shortest supported field
pub const MIN_HEIGHT: u16 = 8;

/// A square on the field, `(x, y)` with `y` growing downwards.
///
/// Signed so that candidate placements may fall outside the field before
/// they are validated.
pub type Square = (i32, i32);

/// A cell on the field
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by a block of the given kind
pub type Cell = Option<PieceKind>;

/// Failure to parse one of the enums in this crate from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Kind(String),
    Orientation(String),
    Direction(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Kind(s) => write!(f, "invalid piece kind: {:?}", s),
            ParseError::Orientation(s) => write!(f, "invalid orientation: {:?}", s),
            ParseError::Direction(s) => write!(f, "invalid direction: {:?}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// The seven tetromino piece kinds
///
/// - **J**: three in a row with a block above the left end
/// - **L**: mirror of J
/// - **O**: 2x2 square
/// - **I**: straight bar of four
/// - **S**: skew, rising to the right
/// - **Z**: mirror of S
/// - **T**: three in a row with a block above the middle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    J,
    L,
    O,
    I,
    S,
    Z,
    T,
}

impl PieceKind {
    /// Every kind, in the order a fresh bag is filled before shuffling
    pub const ALL: [PieceKind; 7] = [
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Upper-case letter for this kind
    ///
    /// ```
    /// use minogrid_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "I");
    /// assert_eq!(PieceKind::Z.as_str(), "Z");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceKind {
    type Err = ParseError;

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use minogrid_types::PieceKind;
    ///
    /// assert_eq!("i".parse::<PieceKind>(), Ok(PieceKind::I));
    /// assert_eq!("O".parse::<PieceKind>(), Ok(PieceKind::O));
    /// assert!("A".parse::<PieceKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "J" => Ok(PieceKind::J),
            "L" => Ok(PieceKind::L),
            "O" => Ok(PieceKind::O),
            "I" => Ok(PieceKind::I),
            "S" => Ok(PieceKind::S),
            "Z" => Ok(PieceKind::Z),
            "T" => Ok(PieceKind::T),
            _ => Err(ParseError::Kind(s.to_string())),
        }
    }
}

/// Orientation of a piece
///
/// - **North**: Spawn orientation
/// - **East**: Rotated 90° clockwise from North
/// - **South**: Rotated 180°
/// - **West**: Rotated 90° counter-clockwise from North
///
/// The clockwise cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order, starting at spawn
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Orientation reached by turning once in `rotation`
    pub fn rotate(&self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Left => self.rotate_ccw(),
            Rotation::Right => self.rotate_cw(),
        }
    }

    /// Position in [`Orientation::ALL`]; used to index per-orientation tables
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Orientation::North),
            "east" | "e" => Ok(Orientation::East),
            "south" | "s" => Ok(Orientation::South),
            "west" | "w" => Ok(Orientation::West),
            _ => Err(ParseError::Orientation(s.to_string())),
        }
    }
}

/// One-cell translation of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)` for this direction
    #[inline]
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction that undoes this one
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// ```
    /// use minogrid_types::Direction;
    ///
    /// assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
    /// assert!("a".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

/// Direction of a 90° turn
///
/// - **Left**: counter-clockwise
/// - **Right**: clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    /// The turn that undoes this one
    pub fn opposite(&self) -> Self {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Left => "left",
            Rotation::Right => "right",
        }
    }
}

impl FromStr for Rotation {
    type Err = ParseError;

    /// Accepts "left" | "ccw" and "right" | "cw" (case-insensitive)
    ///
    /// ```
    /// use minogrid_types::Rotation;
    ///
    /// assert_eq!("right".parse::<Rotation>(), Ok(Rotation::Right));
    /// assert_eq!("CCW".parse::<Rotation>(), Ok(Rotation::Left));
    /// assert!("laft".parse::<Rotation>().is_err());
    /// assert!("up".parse::<Rotation>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "ccw" => Ok(Rotation::Left),
            "right" | "cw" => Ok(Rotation::Right),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}
