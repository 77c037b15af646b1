//! Input processing utilties.

use crossterm::event;
use crossterm::event::Event;

pub use crossterm::event::KeyCode;
pub use crossterm::event::KeyEvent;
pub use crossterm::event::KeyModifiers;

use crate::error::Result;
use crate::geo::Dir;

/// Something the player asked for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
  /// Step one tile in a direction.
  Move(Dir),
  /// The terminal changed size, to `(cols, rows)`.
  Resize(u16, u16),
  /// Leave the game.
  Quit,
}

/// Maps a key press to a command.
///
/// Both the arrow keys and WASD move; `q`, escape and Ctrl-C quit.
pub fn key_command(key: KeyEvent) -> Option<Command> {
  let code = match key.code {
    KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
    k => k,
  };
  let command = match code {
    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
      Command::Quit
    }
    KeyCode::Left | KeyCode::Char('a') => Command::Move(Dir::W),
    KeyCode::Right | KeyCode::Char('d') => Command::Move(Dir::E),
    KeyCode::Up | KeyCode::Char('w') => Command::Move(Dir::N),
    KeyCode::Down | KeyCode::Char('s') => Command::Move(Dir::S),
    KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
    _ => return None,
  };
  Some(command)
}

/// Maps a terminal event to a command, if it corresponds to one.
pub fn command(event: Event) -> Option<Command> {
  match event {
    Event::Key(key) => key_command(key),
    Event::Resize(cols, rows) => Some(Command::Resize(cols, rows)),
    _ => None,
  }
}

/// Blocks until the player issues a command.
pub fn next_command() -> Result<Command> {
  loop {
    if let Some(command) = command(event::read()?) {
      return Ok(command);
    }
  }
}
