//! Board module - the 3x3 grid and the game played on it
//!
//! Squares are addressed `(x, y)` with `(0, 0)` at the top-left, `x` the
//! column and `y` the row. Boards are small `Copy` values; making a move
//! returns a new board.

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::error::TicTacToeError;

/// A square on the board, `(x, y)`
pub type Square = (usize, usize);

/// Every legal move on one board, at most nine
pub type Moves = ArrayVec<Square, 9>;

/// The eight lines that win: columns, rows, then both diagonals
pub const LINES: [[Square; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    O,
    X,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::O => "O",
            Mark::X => "X",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = TicTacToeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "O" => Ok(Mark::O),
            "X" => Ok(Mark::X),
            _ => Err(TicTacToeError::InvalidMark(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    /// `cells[x][y]`
    cells: [[Option<Mark>; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from three rows, top to bottom; `.` or space is empty.
    pub fn from_rows(rows: [&str; 3]) -> Result<Self, TicTacToeError> {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(3).enumerate() {
                board.cells[x][y] = match ch {
                    '.' | ' ' => None,
                    other => Some(other.to_string().parse()?),
                };
            }
        }
        Ok(board)
    }

    /// Mark at `(x, y)`; `None` when empty or off the board
    pub fn get(&self, x: usize, y: usize) -> Option<Mark> {
        self.cells.get(x).and_then(|col| col.get(y)).copied().flatten()
    }

    /// The board after `mark` plays `(x, y)`, or `None` when the square is
    /// off the board or taken. `self` is unchanged.
    pub fn make_move(&self, x: usize, y: usize, mark: Mark) -> Option<Board> {
        if x > 2 || y > 2 || self.cells[x][y].is_some() {
            return None;
        }
        let mut next = *self;
        next.cells[x][y] = Some(mark);
        Some(next)
    }

    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(x, y)| self.cells[x][y]);
            match (a, b, c) {
                (Some(m), Some(n), Some(o)) if m == n && n == o => Some(m),
                _ => None,
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Empty squares, `x` major: (0,0), (0,1), (0,2), (1,0), ...
    pub fn legal_moves(&self) -> Moves {
        let mut moves = Moves::new();
        for x in 0..3 {
            for y in 0..3 {
                if self.cells[x][y].is_none() {
                    moves.push((x, y));
                }
            }
        }
        moves
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|c| **c == Some(mark)).count()
    }

    /// Rotate a quarter turn clockwise
    pub fn rotate_cw(&self) -> Board {
        let mut out = Board::new();
        for x in 0..3 {
            for y in 0..3 {
                out.cells[x][y] = self.cells[y][2 - x];
            }
        }
        out
    }

    /// Mirror left to right
    pub fn mirror_horizontal(&self) -> Board {
        let mut out = Board::new();
        for x in 0..3 {
            out.cells[x] = self.cells[2 - x];
        }
        out
    }

    /// Mirror top to bottom
    pub fn mirror_vertical(&self) -> Board {
        let mut out = Board::new();
        for x in 0..3 {
            for y in 0..3 {
                out.cells[x][y] = self.cells[x][2 - y];
            }
        }
        out
    }

    /// All eight boards equivalent under rotation and reflection, starting
    /// with `self`. Some may coincide for symmetric positions.
    pub fn symmetries(&self) -> [Board; 8] {
        let r0 = *self;
        let r1 = r0.rotate_cw();
        let r2 = r1.rotate_cw();
        let r3 = r2.rotate_cw();
        [
            r0,
            r1,
            r2,
            r3,
            r0.mirror_horizontal(),
            r1.mirror_horizontal(),
            r2.mirror_horizontal(),
            r3.mirror_horizontal(),
        ]
    }

    /// Base-3 packing of the cells, unique per board
    pub fn key(&self) -> u16 {
        self.cells.iter().flatten().fold(0u16, |acc, cell| {
            let digit = match cell {
                None => 0,
                Some(Mark::O) => 1,
                Some(Mark::X) => 2,
            };
            acc * 3 + digit
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     0   1   2")?;
        writeln!(f, "   +{}", "---+".repeat(3))?;
        for y in 0..3 {
            write!(f, " {} |", y)?;
            for x in 0..3 {
                match self.cells[x][y] {
                    Some(mark) => write!(f, " {} |", mark)?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "   +{}", "---+".repeat(3))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Draw,
}

/// A board plus whose turn it is; O moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Mark,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::O,
        }
    }

    /// Resume from a position; the turn is inferred from the mark counts.
    pub fn from_board(board: Board) -> Self {
        let turn = if board.count(Mark::O) > board.count(Mark::X) {
            Mark::X
        } else {
            Mark::O
        };
        Self { board, turn }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Play `(x, y)` for the side to move and pass the turn.
    pub fn play(&mut self, x: usize, y: usize) -> Result<Outcome, TicTacToeError> {
        if self.outcome() != Outcome::InProgress {
            return Err(TicTacToeError::GameOver);
        }
        self.board = self
            .board
            .make_move(x, y, self.turn)
            .ok_or(TicTacToeError::InvalidMove { x, y })?;
        self.turn = self.turn.other();
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> Outcome {
        match self.board.winner() {
            Some(mark) => Outcome::Won(mark),
            None if self.board.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_move_copies() {
        let board = Board::new();
        let next = board.make_move(1, 2, Mark::X).unwrap();
        assert_eq!(board.get(1, 2), None);
        assert_eq!(next.get(1, 2), Some(Mark::X));
        assert_eq!(next.make_move(1, 2, Mark::O), None);
        assert_eq!(next.make_move(3, 0, Mark::O), None);
    }

    #[test]
    fn test_winner_lines() {
        let column = Board::from_rows(["O..", "O..", "O.."]).unwrap();
        assert_eq!(column.winner(), Some(Mark::O));
        let row = Board::from_rows(["...", "XXX", "..."]).unwrap();
        assert_eq!(row.winner(), Some(Mark::X));
        let anti = Board::from_rows(["..X", ".X.", "X.."]).unwrap();
        assert_eq!(anti.winner(), Some(Mark::X));
        let none = Board::from_rows(["OXO", "OXX", "XOO"]).unwrap();
        assert_eq!(none.winner(), None);
        assert!(none.is_full());
    }

    #[test]
    fn test_rotate_cw_moves_top_left_to_top_right() {
        let board = Board::from_rows(["O..", "...", "..."]).unwrap();
        assert_eq!(board.rotate_cw().get(2, 0), Some(Mark::O));
        let once = Board::from_rows(["OX.", "...", "..."]).unwrap().rotate_cw();
        assert_eq!(once.get(2, 1), Some(Mark::X));
    }

    #[test]
    fn test_four_rotations_identity() {
        let board = Board::from_rows(["OX.", ".O.", "X.."]).unwrap();
        let back = board.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(back, board);
        assert_eq!(board.mirror_vertical().mirror_vertical(), board);
    }

    #[test]
    fn test_symmetries_of_corner_move() {
        let board = Board::new().make_move(0, 0, Mark::O).unwrap();
        let mut keys: Vec<u16> = board.symmetries().iter().map(Board::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_key_is_unique_per_square() {
        let mut keys: Vec<u16> = (0..3)
            .flat_map(|x| (0..3).map(move |y| (x, y)))
            .map(|(x, y)| Board::new().make_move(x, y, Mark::X).unwrap().key())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 9);
        assert_eq!(Board::new().key(), 0);
    }

    #[test]
    fn test_game_turns_and_outcome() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Mark::O);
        assert_eq!(game.play(0, 0), Ok(Outcome::InProgress));
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.play(0, 0), Err(TicTacToeError::InvalidMove { x: 0, y: 0 }));
        game.play(1, 0).unwrap();
        game.play(0, 1).unwrap();
        game.play(1, 1).unwrap();
        assert_eq!(game.play(0, 2), Ok(Outcome::Won(Mark::O)));
        assert_eq!(game.play(2, 2), Err(TicTacToeError::GameOver));
    }

    #[test]
    fn test_from_board_infers_turn() {
        let board = Board::from_rows(["O..", "...", "..."]).unwrap();
        assert_eq!(Game::from_board(board).turn(), Mark::X);
        assert_eq!(Game::from_board(Board::new()).turn(), Mark::O);
    }

    #[test]
    fn test_display_header() {
        let text = Board::new().to_string();
        assert!(text.starts_with("     0   1   2\n   +---+---+---+\n 0 |   |   |   |\n"));
    }
}
