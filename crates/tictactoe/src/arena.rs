//! Arena module - pit two AIs against each other

use std::fmt;

use crate::ai::Ai;
use crate::board::{Game, Mark, Outcome};
use crate::error::TicTacToeError;

/// Tally of an arena run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaResult {
    pub o_wins: u32,
    pub x_wins: u32,
    pub draws: u32,
}

impl ArenaResult {
    pub fn games(&self) -> u32 {
        self.o_wins + self.x_wins + self.draws
    }

    fn rate(&self, count: u32) -> f64 {
        match self.games() {
            0 => 0.0,
            n => f64::from(count) / f64::from(n) * 100.0,
        }
    }

    /// Percentage of games O won
    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    fn record(&mut self, winner: Option<Mark>) {
        match winner {
            Some(Mark::O) => self.o_wins += 1,
            Some(Mark::X) => self.x_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl fmt::Display for ArenaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "O won {} times, X won {} times and there were {} draws.",
            self.o_wins, self.x_wins, self.draws
        )?;
        write!(
            f,
            "O had a win rate of {:.2}%, X had a win rate of {:.2}% and the draw rate was {:.2}%.",
            self.o_win_rate(),
            self.x_win_rate(),
            self.draw_rate()
        )
    }
}

/// Two AIs, one per mark. Memo tables persist across games.
#[derive(Debug, Clone)]
pub struct Arena {
    o: Ai,
    x: Ai,
}

impl Arena {
    pub fn new(o: Ai, x: Ai) -> Self {
        Self { o, x }
    }

    /// Play one game without output and return the winner, `None` on a draw
    pub fn play_quietly(&mut self) -> Result<Option<Mark>, TicTacToeError> {
        let mut game = Game::new();
        loop {
            let ai = match game.turn() {
                Mark::O => &mut self.o,
                Mark::X => &mut self.x,
            };
            let Some((x, y)) = ai.find_move(&game) else {
                return Ok(None);
            };
            match game.play(x, y)? {
                Outcome::InProgress => {}
                Outcome::Won(mark) => return Ok(Some(mark)),
                Outcome::Draw => return Ok(None),
            }
        }
    }

    /// Play `games` games and tally the results
    pub fn run(&mut self, games: u32) -> Result<ArenaResult, TicTacToeError> {
        let mut result = ArenaResult::default();
        for _ in 0..games {
            result.record(self.play_quietly()?);
        }
        tracing::info!(
            o = self.o.strategy().as_str(),
            x = self.x.strategy().as_str(),
            o_wins = result.o_wins,
            x_wins = result.x_wins,
            draws = result.draws,
            "arena finished"
        );
        Ok(result)
    }
}
