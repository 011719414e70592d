//! AI module - computer players of increasing strength
//!
//! | Strategy | Move choice |
//! |----------|-------------|
//! | `random` | uniform over legal moves |
//! | `winning` | first winning move, else random |
//! | `winning-losing` | winning move, else a blocking move, else random |
//! | `perfect` | plain minimax |
//! | `cache-perfect` | minimax memoised over symmetric boards |
//! | `alpha-beta` | minimax with alpha-beta pruning |
//! | `quick-perfect` | alpha-beta memoised over symmetric boards |
//! | `ultimate` | `quick-perfect`, ties broken by a positional score |
//!
//! Minimax scores are from the AI's point of view: +10 for a win, -10 for
//! a loss, 0 for a draw. Among equally scored moves the first in `x`-major
//! order wins.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use minogrid_core::SimpleRng;

use crate::board::{Board, Game, Mark, Square, LINES};
use crate::error::TicTacToeError;

pub const WIN: i32 = 10;
pub const LOSS: i32 = -10;
pub const DRAW: i32 = 0;

/// Bounds wider than any reachable score
const ALPHA_MIN: i32 = -100;
const BETA_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    Winning,
    WinningLosing,
    Perfect,
    CachePerfect,
    AlphaBeta,
    QuickPerfect,
    Ultimate,
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::Random,
        Strategy::Winning,
        Strategy::WinningLosing,
        Strategy::Perfect,
        Strategy::CachePerfect,
        Strategy::AlphaBeta,
        Strategy::QuickPerfect,
        Strategy::Ultimate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Winning => "winning",
            Strategy::WinningLosing => "winning-losing",
            Strategy::Perfect => "perfect",
            Strategy::CachePerfect => "cache-perfect",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::QuickPerfect => "quick-perfect",
            Strategy::Ultimate => "ultimate",
        }
    }

    /// Whether this strategy never loses
    pub fn is_perfect(&self) -> bool {
        !matches!(
            self,
            Strategy::Random | Strategy::Winning | Strategy::WinningLosing
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = TicTacToeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TicTacToeError::InvalidStrategy(s.to_string()))
    }
}

/// Memo key: the board, whose score it is and who moves next, plus the
/// search window for pruned searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MemoKey {
    board: u16,
    me: Mark,
    turn: Mark,
    window: Option<(i32, i32)>,
}

impl MemoKey {
    fn new(board: &Board, me: Mark, turn: Mark, window: Option<(i32, i32)>) -> Self {
        Self {
            board: board.key(),
            me,
            turn,
            window,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ai {
    strategy: Strategy,
    rng: SimpleRng,
    scores: HashMap<MemoKey, i32>,
    ranked: HashMap<MemoKey, (i32, i32)>,
}

impl Ai {
    pub fn new(strategy: Strategy, seed: u32) -> Self {
        Self {
            strategy,
            rng: SimpleRng::new(seed),
            scores: HashMap::new(),
            ranked: HashMap::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Entries held across both memo tables
    pub fn memo_len(&self) -> usize {
        self.scores.len() + self.ranked.len()
    }

    /// Pick a move for the side to play. `None` when the board is full.
    pub fn find_move(&mut self, game: &Game) -> Option<Square> {
        let board = *game.board();
        let me = game.turn();
        let legal = board.legal_moves();
        if legal.is_empty() {
            return None;
        }

        let chosen = match self.strategy {
            Strategy::Random => self.random_move(&legal),
            Strategy::Winning => legal
                .iter()
                .copied()
                .find(|&(x, y)| wins(&board, x, y, me))
                .or_else(|| self.random_move(&legal)),
            Strategy::WinningLosing => {
                let mut blocking = None;
                let mut winning = None;
                for &(x, y) in &legal {
                    if wins(&board, x, y, me) {
                        winning = Some((x, y));
                        break;
                    }
                    if wins(&board, x, y, me.other()) {
                        blocking = Some((x, y));
                    }
                }
                winning.or(blocking).or_else(|| self.random_move(&legal))
            }
            Strategy::Perfect => best_by(&board, &legal, me, |b| minimax(b, me, me.other())),
            Strategy::CachePerfect => {
                best_by(&board, &legal, me, |b| self.cached_minimax(b, me, me.other()))
            }
            Strategy::AlphaBeta => best_by(&board, &legal, me, |b| {
                self.alpha_beta(b, me, me.other(), ALPHA_MIN, BETA_MAX, false)
            }),
            Strategy::QuickPerfect => best_by(&board, &legal, me, |b| {
                self.alpha_beta(b, me, me.other(), ALPHA_MIN, BETA_MAX, true)
            }),
            Strategy::Ultimate => best_by(&board, &legal, me, |b| self.ranked(b, me, me.other())),
        };

        tracing::debug!(
            strategy = self.strategy.as_str(),
            mark = me.as_str(),
            ?chosen,
            memo = self.memo_len(),
            "move chosen"
        );
        chosen
    }

    fn random_move(&mut self, legal: &[Square]) -> Option<Square> {
        self.rng.choose(legal).copied()
    }

    fn cached_minimax(&mut self, board: &Board, me: Mark, turn: Mark) -> i32 {
        let key = MemoKey::new(board, me, turn, None);
        if let Some(&score) = self.scores.get(&key) {
            return score;
        }

        let score = match terminal_score(board, me) {
            Some(score) => score,
            None => {
                let children = board.legal_moves().into_iter().filter_map(|(x, y)| {
                    board.make_move(x, y, turn)
                });
                let mut best: Option<i32> = None;
                for child in children {
                    let s = self.cached_minimax(&child, me, turn.other());
                    best = Some(match best {
                        None => s,
                        Some(b) if turn == me => b.max(s),
                        Some(b) => b.min(s),
                    });
                }
                best.unwrap_or(DRAW)
            }
        };

        self.remember(board, me, turn, None, score);
        score
    }

    /// Minimax with alpha-beta pruning. `alpha` is the least `me` is
    /// assured of, `beta` the most the opponent will allow.
    fn alpha_beta(
        &mut self,
        board: &Board,
        me: Mark,
        turn: Mark,
        mut alpha: i32,
        mut beta: i32,
        memo: bool,
    ) -> i32 {
        let window = Some((alpha, beta));
        if memo {
            if let Some(&score) = self.scores.get(&MemoKey::new(board, me, turn, window)) {
                return score;
            }
        }

        let score = if let Some(score) = terminal_score(board, me) {
            score
        } else if turn == me {
            let mut max_score = ALPHA_MIN;
            for (x, y) in board.legal_moves() {
                let Some(child) = board.make_move(x, y, turn) else {
                    continue;
                };
                let s = self.alpha_beta(&child, me, turn.other(), alpha, beta, memo);
                max_score = max_score.max(s);
                alpha = alpha.max(max_score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = BETA_MAX;
            for (x, y) in board.legal_moves() {
                let Some(child) = board.make_move(x, y, turn) else {
                    continue;
                };
                let s = self.alpha_beta(&child, me, turn.other(), alpha, beta, memo);
                min_score = min_score.min(s);
                beta = beta.min(min_score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        };

        if memo {
            self.remember(board, me, turn, window, score);
        }
        score
    }

    /// `quick-perfect` score paired with the positional score
    fn ranked(&mut self, board: &Board, me: Mark, turn: Mark) -> (i32, i32) {
        let window = Some((ALPHA_MIN, BETA_MAX));
        let key = MemoKey::new(board, me, turn, window);
        if let Some(&rank) = self.ranked.get(&key) {
            return rank;
        }
        let rank = (
            self.alpha_beta(board, me, turn, ALPHA_MIN, BETA_MAX, true),
            positional_score(board, me),
        );
        for sym in board.symmetries() {
            self.ranked.insert(MemoKey::new(&sym, me, turn, window), rank);
        }
        rank
    }

    /// Store `score` under every board symmetric to `board`
    fn remember(
        &mut self,
        board: &Board,
        me: Mark,
        turn: Mark,
        window: Option<(i32, i32)>,
        score: i32,
    ) {
        for sym in board.symmetries() {
            self.scores.insert(MemoKey::new(&sym, me, turn, window), score);
        }
        tracing::trace!(entries = self.scores.len(), "memo stored");
    }
}

/// Whether `mark` playing `(x, y)` wins on the spot
fn wins(board: &Board, x: usize, y: usize, mark: Mark) -> bool {
    board
        .make_move(x, y, mark)
        .is_some_and(|next| next.winner() == Some(mark))
}

fn terminal_score(board: &Board, me: Mark) -> Option<i32> {
    match board.winner() {
        Some(winner) if winner == me => Some(WIN),
        Some(_) => Some(LOSS),
        None if board.is_full() => Some(DRAW),
        None => None,
    }
}

/// Plain minimax over the full game tree
pub fn minimax(board: &Board, me: Mark, turn: Mark) -> i32 {
    if let Some(score) = terminal_score(board, me) {
        return score;
    }
    let scores = board
        .legal_moves()
        .into_iter()
        .filter_map(|(x, y)| board.make_move(x, y, turn))
        .map(|child| minimax(&child, me, turn.other()));
    let best = if turn == me { scores.max() } else { scores.min() };
    best.unwrap_or(DRAW)
}

/// One point per corner held by `me`, three per line holding two or more
/// of `me`'s marks and none of the opponent's
pub fn positional_score(board: &Board, me: Mark) -> i32 {
    let corners = [(0, 0), (0, 2), (2, 0), (2, 2)]
        .into_iter()
        .filter(|&(x, y)| board.get(x, y) == Some(me))
        .count() as i32;
    let open_twos = LINES
        .iter()
        .filter(|line| {
            let mine = line.iter().filter(|&&(x, y)| board.get(x, y) == Some(me)).count();
            let theirs = line
                .iter()
                .filter(|&&(x, y)| board.get(x, y) == Some(me.other()))
                .count();
            mine >= 2 && theirs == 0
        })
        .count() as i32;
    corners + 3 * open_twos
}

/// The first legal move whose resulting board scores strictly best
fn best_by<S, F>(board: &Board, legal: &[Square], me: Mark, mut score: F) -> Option<Square>
where
    S: PartialOrd,
    F: FnMut(&Board) -> S,
{
    let mut best: Option<(S, Square)> = None;
    for &(x, y) in legal {
        let Some(child) = board.make_move(x, y, me) else {
            continue;
        };
        let s = score(&child);
        if best.as_ref().map_or(true, |(b, _)| s > *b) {
            best = Some((s, (x, y)));
        }
    }
    best.map(|(_, square)| square)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(rows: [&str; 3]) -> Game {
        Game::from_board(Board::from_rows(rows).unwrap())
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!(
            "human".parse::<Strategy>(),
            Err(TicTacToeError::InvalidStrategy("human".to_string()))
        );
    }

    #[test]
    fn test_every_strategy_takes_the_win() {
        // O to move, (2, 0) completes the top row.
        let g = game(["OO.", "XX.", "..."]);
        for strategy in Strategy::ALL.into_iter().filter(|s| *s != Strategy::Random) {
            let mut ai = Ai::new(strategy, 1);
            assert_eq!(ai.find_move(&g), Some((2, 0)), "{strategy}");
        }
    }

    #[test]
    fn test_winning_losing_blocks() {
        // O to move with no win; X threatens the middle row.
        let g = game(["O..", "XX.", "..O"]);
        let mut ai = Ai::new(Strategy::WinningLosing, 1);
        assert_eq!(ai.find_move(&g), Some((2, 1)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let g = game(["OXO", "OXX", "XOO"]);
        assert_eq!(Ai::new(Strategy::Ultimate, 1).find_move(&g), None);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut ai = Ai::new(Strategy::QuickPerfect, 1);
        let score = ai.alpha_beta(&Board::new(), Mark::O, Mark::O, ALPHA_MIN, BETA_MAX, true);
        assert_eq!(score, DRAW);
        assert!(ai.memo_len() > 0);
    }

    #[test]
    fn test_search_variants_agree() {
        let boards = [
            Board::from_rows(["O..", ".X.", "..."]).unwrap(),
            Board::from_rows(["OX.", ".O.", "..X"]).unwrap(),
            Board::from_rows(["X.O", "...", "O.."]).unwrap(),
        ];
        for board in boards {
            let turn = Game::from_board(board).turn();
            let mut ai = Ai::new(Strategy::CachePerfect, 1);
            let plain = minimax(&board, Mark::O, turn);
            assert_eq!(ai.cached_minimax(&board, Mark::O, turn), plain);
            assert_eq!(
                ai.alpha_beta(&board, Mark::O, turn, ALPHA_MIN, BETA_MAX, false),
                plain
            );
            assert_eq!(
                ai.alpha_beta(&board, Mark::O, turn, ALPHA_MIN, BETA_MAX, true),
                plain
            );
        }
    }

    #[test]
    fn test_positional_score() {
        let board = Board::from_rows(["O.O", "...", "X.."]).unwrap();
        // Two corners, one open top row.
        assert_eq!(positional_score(&board, Mark::O), 5);
        let diag = Board::from_rows(["O..", ".O.", "..."]).unwrap();
        // One corner, one open diagonal.
        assert_eq!(positional_score(&diag, Mark::O), 4);
        assert_eq!(positional_score(&Board::new(), Mark::X), 0);
    }

    #[test]
    fn test_ultimate_prefers_corner_opening() {
        let mut ai = Ai::new(Strategy::Ultimate, 1);
        let (x, y) = ai.find_move(&Game::new()).unwrap();
        assert!(x != 1 && y != 1, "opened at ({x}, {y})");
    }
}
