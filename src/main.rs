use std::cell::Cell;
use std::env;
use std::io::{self, BufRead};
use std::rc::Rc;

use anyhow::{anyhow, Result};

use minogrid::config::SimConfig;
use minogrid::core::{SevenBag, SimpleRng};
use minogrid::engine::{Command, Session};
use minogrid::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Random rotations and shifts, then a hard drop, until the game ends
    Auto,
    /// Commands read from stdin, one per line
    Script,
}

fn parse_args(args: &[String]) -> Result<Mode> {
    let mode = match args.first().map(String::as_str) {
        None | Some("auto") => Mode::Auto,
        Some("script") => Mode::Script,
        Some(other) => return Err(anyhow!("unknown mode: {}", other)),
    };
    if let Some(extra) = args.get(1) {
        return Err(anyhow!("unexpected argument: {}", extra));
    }
    Ok(mode)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mode = parse_args(&args)?;

    let config = SimConfig::from_env();
    logging::init(config.log_level);
    tracing::info!(?config, ?mode, "starting");

    let mut session = Session::new(config.width, config.height, SevenBag::new(config.seed))?;

    let notifications = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&notifications);
    session.add_observer(move |_| counter.set(counter.get() + 1));

    session.start();
    match mode {
        Mode::Auto => autoplay(&mut session, &config)?,
        Mode::Script => script(&mut session)?,
    }

    println!("{}", session.field());
    println!(
        "pieces {} lines {} updates {}{}",
        session.pieces_locked(),
        session.lines_cleared(),
        notifications.get(),
        if session.game_over() { " (game over)" } else { "" }
    );
    Ok(())
}

fn autoplay(session: &mut Session, config: &SimConfig) -> Result<()> {
    let mut rng = SimpleRng::new(config.seed.wrapping_add(1));
    let width = u32::from(config.width);

    while !session.game_over() && session.pieces_locked() < config.max_pieces {
        for _ in 0..rng.next_range(4) {
            session.apply(Command::RotateRight)?;
        }
        let shift = rng.next_range(width) as i64 - i64::from(width / 2);
        let step = if shift < 0 {
            Command::MoveLeft
        } else {
            Command::MoveRight
        };
        for _ in 0..shift.unsigned_abs() {
            if !session.apply(step)? {
                break;
            }
        }
        if let Some(outcome) = session.hard_drop()? {
            if outcome.lines() > 0 {
                tracing::debug!(lines = outcome.lines(), "rows cleared");
            }
        }
    }
    Ok(())
}

fn script(session: &mut Session) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command: Command = line.parse()?;
        let changed = session.apply(command)?;
        tracing::trace!(%command, changed, "applied");
        if session.game_over() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Mode::Auto);
        assert_eq!(parse_args(&args(&["auto"])).unwrap(), Mode::Auto);
        assert_eq!(parse_args(&args(&["script"])).unwrap(), Mode::Script);
        assert!(parse_args(&args(&["watch"])).is_err());
        assert!(parse_args(&args(&["auto", "x"])).is_err());
    }

    #[test]
    fn test_autoplay_stops_at_limit() {
        let config = SimConfig {
            max_pieces: 20,
            ..SimConfig::default()
        };
        let mut session = Session::seeded(config.seed);
        session.start();
        autoplay(&mut session, &config).unwrap();
        assert!(session.game_over() || session.pieces_locked() == 20);
    }
}
