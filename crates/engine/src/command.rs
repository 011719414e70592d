use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A player command understood by [`crate::Session::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; never locks
    SoftDrop,
    /// Drop to the lowest reachable position and lock
    HardDrop,
    /// Rotate 90° counter-clockwise
    RotateLeft,
    /// Rotate 90° clockwise
    RotateRight,
    /// Swap the current piece with the held one, once per lock
    Hold,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl Command {
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::HardDrop,
        Command::RotateLeft,
        Command::RotateRight,
        Command::Hold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::Hold => "hold",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts camelCase (`moveLeft`), kebab-case (`move-left`) and snake_case,
/// ignoring case. `rotateCw`/`rotateCcw` are accepted as aliases.
///
/// ```
/// use minogrid_engine::Command;
///
/// assert_eq!("moveLeft".parse(), Ok(Command::MoveLeft));
/// assert_eq!("hard-drop".parse(), Ok(Command::HardDrop));
/// assert_eq!("rotate_cw".parse(), Ok(Command::RotateRight));
/// ```
impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "moveleft" => Ok(Command::MoveLeft),
            "moveright" => Ok(Command::MoveRight),
            "softdrop" => Ok(Command::SoftDrop),
            "harddrop" => Ok(Command::HardDrop),
            "rotateleft" | "rotateccw" => Ok(Command::RotateLeft),
            "rotateright" | "rotatecw" => Ok(Command::RotateRight),
            "hold" => Ok(Command::Hold),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parses_back() {
        for cmd in Command::ALL {
            assert_eq!(cmd.to_string().parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "pause".parse::<Command>(),
            Err(UnknownCommand("pause".to_string()))
        );
        assert_eq!("ROTATE-LEFT".parse::<Command>(), Ok(Command::RotateLeft));
    }
}
