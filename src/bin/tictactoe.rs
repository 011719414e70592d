//! Tic-tac-toe against the computer, or computer against computer.
//!
//! ```text
//! tictactoe [--o PLAYER] [--x PLAYER] [--games N] [--seed N] [--log LEVEL]
//! ```
//!
//! `PLAYER` is `human` or a strategy name. With `--games` both players
//! must be strategies and only the tally is printed.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use tracing::Level;

use minogrid::logging;
use minogrid::tictactoe::{Ai, Arena, Game, Mark, Outcome, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Player {
    Human,
    Computer(Strategy),
}

impl Player {
    fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("human") {
            return Ok(Player::Human);
        }
        Ok(Player::Computer(value.parse()?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    o: Player,
    x: Player,
    games: Option<u32>,
    seed: u32,
    log_level: Level,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            o: Player::Human,
            x: Player::Computer(Strategy::Ultimate),
            games: None,
            seed: 1,
            log_level: Level::WARN,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("tictactoe: missing value for {}", flag))
        };
        match flag {
            "--o" => options.o = Player::parse(value()?)?,
            "--x" => options.x = Player::parse(value()?)?,
            "--games" => {
                let v = value()?;
                let games = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("tictactoe: invalid --games value: {}", v))?;
                options.games = Some(games);
            }
            "--seed" => {
                let v = value()?;
                options.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("tictactoe: invalid --seed value: {}", v))?;
            }
            "--log" => {
                let v = value()?;
                options.log_level = v
                    .parse::<Level>()
                    .map_err(|_| anyhow!("tictactoe: invalid --log value: {}", v))?;
            }
            other => return Err(anyhow!("tictactoe: unknown argument: {}", other)),
        }
        i += 2;
    }

    if options.games.is_some() && (options.o == Player::Human || options.x == Player::Human) {
        return Err(anyhow!("tictactoe: --games needs two computer players"));
    }
    Ok(options)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;
    logging::init(options.log_level);

    match (options.games, options.o, options.x) {
        (Some(games), Player::Computer(o), Player::Computer(x)) => {
            let (o_seed, x_seed) = seeds(options.seed);
            let mut arena = Arena::new(Ai::new(o, o_seed), Ai::new(x, x_seed));
            println!("{}", arena.run(games)?);
            Ok(())
        }
        _ => play(&options),
    }
}

/// RNG seeds for O and X; distinct so two random players differ
fn seeds(seed: u32) -> (u32, u32) {
    (seed, seed.wrapping_add(1))
}

/// One interactive game on stdin/stdout
fn play(options: &Options) -> Result<()> {
    let computer = |player: Player, seed: u32| match player {
        Player::Computer(strategy) => Some(Ai::new(strategy, seed)),
        Player::Human => None,
    };
    let (o_seed, x_seed) = seeds(options.seed);
    let mut ais = [computer(options.o, o_seed), computer(options.x, x_seed)];
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    loop {
        println!("{}", game.board());
        let turn = game.turn();
        let slot = match turn {
            Mark::O => 0,
            Mark::X => 1,
        };

        let (x, y) = match ais[slot].as_mut() {
            Some(ai) => {
                let square = ai
                    .find_move(&game)
                    .ok_or_else(|| anyhow!("no legal move for {}", turn))?;
                println!("{} ({}) plays {} {}", turn, ai.strategy(), square.0, square.1);
                square
            }
            None => {
                print!("{} to move, enter x y: ", turn);
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    println!();
                    return Ok(());
                };
                match parse_square(&line?) {
                    Some(square) => square,
                    None => {
                        println!("Please enter two numbers between 0 and 2.");
                        continue;
                    }
                }
            }
        };

        match game.play(x, y) {
            Ok(Outcome::InProgress) => {}
            Ok(Outcome::Won(mark)) => {
                println!("{}", game.board());
                println!("{} wins!", mark);
                return Ok(());
            }
            Ok(Outcome::Draw) => {
                println!("{}", game.board());
                println!("It's a draw.");
                return Ok(());
            }
            Err(err) => println!("{}", err),
        }
    }
}

fn parse_square(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) if x < 3 && y < 3 => Some((x, y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), Options::default());
    }

    #[test]
    fn test_arena_options() {
        let options = parse_args(&args(&[
            "--o", "random", "--x", "Alpha-Beta", "--games", "50", "--seed", "3",
        ]))
        .unwrap();
        assert_eq!(options.o, Player::Computer(Strategy::Random));
        assert_eq!(options.x, Player::Computer(Strategy::AlphaBeta));
        assert_eq!(options.games, Some(50));
        assert_eq!(options.seed, 3);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(parse_args(&args(&["--o"])).is_err());
        assert!(parse_args(&args(&["--x", "genius"])).is_err());
        assert!(parse_args(&args(&["--games", "many"])).is_err());
        assert!(parse_args(&args(&["--games", "5"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn test_players_get_distinct_seeds() {
        assert_eq!(seeds(1), (1, 2));
        assert_eq!(seeds(u32::MAX), (u32::MAX, 0));
    }

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("1 2"), Some((1, 2)));
        assert_eq!(parse_square(" 0   0 "), Some((0, 0)));
        assert_eq!(parse_square("3 0"), None);
        assert_eq!(parse_square("1"), None);
        assert_eq!(parse_square("1 2 3"), None);
        assert_eq!(parse_square("a b"), None);
    }
}
