//! The `lantern` terminal game.
//!
//! Usage: `lantern [CONFIG]`, where `CONFIG` is an optional TOML settings
//! file.

use std::env;
use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;

use lantern::config::Settings;
use lantern::game::Game;
use lantern::input;
use lantern::input::Command;
use lantern::logging;
use lantern::render::curses::Curses;

fn main() -> anyhow::Result<()> {
  let path = env::args_os().nth(1).map(PathBuf::from);
  let settings = Settings::load(path.as_deref()).with_context(|| match &path {
    Some(path) => format!("loading {}", path.display()),
    None => "loading default settings".to_string(),
  })?;
  logging::init(&settings.log).context("setting up logging")?;

  let mut curses = Curses::init().context("setting up the terminal")?;
  let result = run(&settings, &mut curses);
  // Errors must be printed on the normal screen, not the alternate one.
  let cleanup = curses.cleanup();
  finish(result, cleanup)
}

/// Reports the game's own error ahead of any failure to restore the terminal.
fn finish(
  result: anyhow::Result<()>,
  cleanup: lantern::Result<()>,
) -> anyhow::Result<()> {
  result?;
  cleanup.context("restoring the terminal")
}

fn run(settings: &Settings, curses: &mut Curses) -> anyhow::Result<()> {
  let (cols, rows) = curses.dims();
  let mut game = Game::new(settings, settings.metrics(cols, rows), curses)?;
  curses.present()?;
  info!("started");

  loop {
    match input::next_command()? {
      Command::Move(dir) => {
        game.handle(dir, curses)?;
      }
      Command::Resize(cols, rows) => {
        curses.resize(cols, rows);
        game.resize(cols, rows, curses)?;
      }
      Command::Quit => break,
    }
    curses.present()?;
  }

  info!("quit");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  use lantern::Error;

  #[test]
  fn game_errors_win_over_cleanup_errors() {
    let err = finish(
      Err(anyhow::anyhow!("lost the map")),
      Err(Error::Config("terminal gone".into())),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "lost the map");
  }

  #[test]
  fn cleanup_errors_are_reported() {
    let err = finish(Ok(()), Err(Error::Config("terminal gone".into())))
      .unwrap_err();
    assert_eq!(err.to_string(), "restoring the terminal");
    assert!(finish(Ok(()), Ok(())).is_ok());
  }
}
