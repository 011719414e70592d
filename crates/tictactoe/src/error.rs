use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicTacToeError {
    #[error("invalid mark: {0:?} (expected O or X)")]
    InvalidMark(String),

    #[error("invalid player: {0:?} (expected one of random, winning, winning-losing, perfect, cache-perfect, alpha-beta, quick-perfect, ultimate, human)")]
    InvalidStrategy(String),

    #[error("invalid move ({x}, {y})")]
    InvalidMove { x: usize, y: usize },

    #[error("the game is already over")]
    GameOver,
}
