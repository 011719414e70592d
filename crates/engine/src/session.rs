//! Session module - drives one playfield from a piece source
//!
//! A session is the field-level controller: it spawns kinds from a
//! [`PieceSource`], keeps a one-piece preview and a hold slot, locks landed
//! pieces, clears full rows and detects the end of the game. It owns no
//! clock; the caller decides when gravity ticks ([`Session::step`]) and
//! when a landed piece locks.
//!
//! # Lock sequence
//!
//! 1. The current piece is detached; its blocks stay in the grid.
//! 2. Full rows are cleared, scanning from the top. Clearing a row only
//!    shifts rows above it, so rows still to be scanned are unaffected.
//! 3. Observers are notified once.
//! 4. The game is over if a block sits in the hidden rows, or if the
//!    previewed kind cannot spawn. Otherwise it becomes current.
//! 5. A new preview is drawn and hold is allowed again.

use arrayvec::ArrayVec;

use minogrid_core::{FieldError, PieceSource, Playfield, SevenBag};

use crate::types::{Direction, PieceKind, Rotation};
use crate::Command;

/// What happened when a piece locked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockOutcome {
    /// Kind of the piece that locked
    pub kind: PieceKind,
    /// Rows cleared, top to bottom, as indexed before clearing
    pub cleared: ArrayVec<usize, 4>,
    pub game_over: bool,
}

impl LockOutcome {
    pub fn lines(&self) -> usize {
        self.cleared.len()
    }
}

#[derive(Debug)]
pub struct Session<S = SevenBag> {
    field: Playfield,
    source: S,
    next: Option<PieceKind>,
    held: Option<PieceKind>,
    can_hold: bool,
    started: bool,
    game_over: bool,
    lines_cleared: u32,
    pieces_locked: u32,
}

impl Session<SevenBag> {
    /// A session on a guideline field fed by a seeded 7-bag
    pub fn seeded(seed: u32) -> Self {
        Self {
            field: Playfield::default(),
            source: SevenBag::new(seed),
            next: None,
            held: None,
            can_hold: true,
            started: false,
            game_over: false,
            lines_cleared: 0,
            pieces_locked: 0,
        }
    }
}

impl<S: PieceSource> Session<S> {
    pub fn new(width: u16, height: u16, source: S) -> Result<Self, FieldError> {
        Ok(Self {
            field: Playfield::new(width, height)?,
            source,
            next: None,
            held: None,
            can_hold: true,
            started: false,
            game_over: false,
            lines_cleared: 0,
            pieces_locked: 0,
        })
    }

    /// Start (or restart) a game on an empty field
    pub fn start(&mut self) {
        self.field.clear();
        self.held = None;
        self.can_hold = true;
        self.game_over = false;
        self.lines_cleared = 0;
        self.pieces_locked = 0;
        self.started = true;

        let first = self.source.next_kind();
        self.next = Some(self.source.next_kind());
        if !self.field.spawn(first) {
            self.end_game();
        }
    }

    /// Apply one command. Returns whether it changed anything; blocked
    /// moves, commands before `start` and commands after game over are
    /// `Ok(false)`.
    pub fn apply(&mut self, command: Command) -> Result<bool, FieldError> {
        if !self.is_playing() {
            return Ok(false);
        }
        match command {
            Command::MoveLeft => self.field.move_current(Direction::Left),
            Command::MoveRight => self.field.move_current(Direction::Right),
            Command::SoftDrop => self.field.move_current(Direction::Down),
            Command::HardDrop => self.hard_drop().map(|outcome| outcome.is_some()),
            Command::RotateLeft => self.field.rotate_current(Rotation::Left),
            Command::RotateRight => self.field.rotate_current(Rotation::Right),
            Command::Hold => self.hold(),
        }
    }

    /// One gravity tick: move down, or lock if the piece has landed.
    pub fn step(&mut self) -> Result<Option<LockOutcome>, FieldError> {
        if !self.is_playing() {
            return Ok(None);
        }
        if self.field.move_current(Direction::Down)? {
            return Ok(None);
        }
        self.lock_landed().map(Some)
    }

    /// Drop the current piece to the bottom and lock it. `Ok(None)` when
    /// no game is in progress.
    pub fn hard_drop(&mut self) -> Result<Option<LockOutcome>, FieldError> {
        if !self.is_playing() {
            return Ok(None);
        }
        self.field.drop_current()?;
        self.lock_landed().map(Some)
    }

    /// Lock the current piece where it is. See the module docs for the
    /// order of events. `Ok(None)` when no game is in progress.
    pub fn lock(&mut self) -> Result<Option<LockOutcome>, FieldError> {
        if !self.is_playing() {
            return Ok(None);
        }
        self.lock_landed().map(Some)
    }

    fn lock_landed(&mut self) -> Result<LockOutcome, FieldError> {
        let kind = self.field.lock_current()?;
        self.pieces_locked += 1;

        let mut cleared = ArrayVec::new();
        for y in 0..i32::from(self.field.height()) {
            if self.field.row_is_full(y)? {
                self.field.clear_row(y)?;
                self.lines_cleared += 1;
                if !cleared.is_full() {
                    cleared.push(y as usize);
                }
            }
        }
        self.field.notify_observers();

        let next = self.take_next();
        let game_over = self.field.hidden_rows_occupied() || !self.field.spawn(next);
        self.can_hold = true;

        tracing::debug!(
            kind = %kind,
            rows = cleared.len(),
            next = %next,
            game_over,
            "piece locked"
        );
        if game_over {
            self.end_game();
        }
        Ok(LockOutcome {
            kind,
            cleared,
            game_over,
        })
    }

    /// Put the current piece on hold and bring in the held kind, or the
    /// preview if nothing is held yet. Allowed once per locked piece.
    pub fn hold(&mut self) -> Result<bool, FieldError> {
        if !self.is_playing() || !self.can_hold {
            return Ok(false);
        }
        let kind = self.field.delete_current()?;
        self.can_hold = false;
        let incoming = match self.held.replace(kind) {
            Some(held) => held,
            None => self.take_next(),
        };
        if !self.field.spawn(incoming) {
            self.end_game();
        }
        Ok(true)
    }

    /// The preview kind, replaced by a fresh draw
    fn take_next(&mut self) -> PieceKind {
        let kind = self.next.take().unwrap_or_else(|| self.source.next_kind());
        self.next = Some(self.source.next_kind());
        kind
    }

    fn end_game(&mut self) {
        self.game_over = true;
        tracing::info!(
            lines = self.lines_cleared,
            pieces = self.pieces_locked,
            "game over"
        );
    }

    fn is_playing(&self) -> bool {
        self.started && !self.game_over && self.field.current().is_some()
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    /// Register a playfield observer
    pub fn add_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&Playfield) + 'static,
    {
        self.field.add_observer(observer);
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }
}
