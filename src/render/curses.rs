//! A `curses`-style terminal renderer, built on `crossterm`.
//!
//! Frames are composed off-screen and only the cells that differ from the
//! previous frame are written out.

use std::collections::HashMap;
use std::io;
use std::mem;

use crossterm::style::Attribute;
use crossterm::style::Color;
use crossterm::style::Colors;

use crate::error::Result;
use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;
use crate::render::texel::Paint;
use crate::render::texel::Texel;
use crate::render::RenderSink;
use crate::render::TileUpdate;

/// Returns the current dimensions of the terminal window, as `(cols, rows)`.
pub fn dims() -> Result<(u16, u16)> {
  Ok(crossterm::terminal::size()?)
}

/// A terminal [`RenderSink`].
///
/// Updates are only recorded as they come in; nothing is written to the
/// terminal until [`Curses::present()`] is called. Tiles are drawn first, in
/// depth order, and the actor is layered on top of them.
pub struct Curses<W: io::Write = io::Stdout> {
  w: W,
  raw: bool,
  cols: u16,
  rows: u16,
  tiles: HashMap<Point, TileUpdate>,
  actor: Option<TileUpdate>,
  camera: Point<f64>,
  baked: Option<RectVec<Texel>>,
}

impl Curses {
  /// Initializes the `curses` environment on stdout, switching the terminal
  /// to raw mode.
  pub fn init() -> Result<Curses> {
    let (cols, rows) = dims()?;
    let mut curses = Curses::with(io::stdout(), cols, rows)?;
    crossterm::terminal::enable_raw_mode()?;
    curses.raw = true;
    Ok(curses)
  }
}

impl<W: io::Write> Curses<W> {
  /// Initializes the `curses` environment for `w`, which is taken to be a
  /// `cols` by `rows` terminal.
  pub fn with(mut w: W, cols: u16, rows: u16) -> Result<Curses<W>> {
    crossterm::execute!(
      w,
      crossterm::terminal::EnterAlternateScreen,
      crossterm::cursor::Hide,
      crossterm::terminal::DisableLineWrap,
    )?;

    Ok(Curses {
      w,
      raw: false,
      cols,
      rows,
      tiles: HashMap::new(),
      actor: None,
      camera: Point::zero(),
      baked: None,
    })
  }

  /// Returns the terminal dimensions, as `(cols, rows)`.
  pub fn dims(&self) -> (u16, u16) {
    (self.cols, self.rows)
  }

  /// Records a new terminal size. The next [`Curses::present()`] redraws
  /// everything.
  pub fn resize(&mut self, cols: u16, rows: u16) {
    self.cols = cols;
    self.rows = rows;
    self.baked = None;
  }

  /// Composes the current frame, without drawing it.
  pub fn frame(&self) -> RectVec<Texel> {
    let viewport = Rect::with_dims(i64::from(self.cols), i64::from(self.rows));
    let mut frame = RectVec::new(viewport, Texel::new(' '));

    let mut tiles: Vec<_> = self.tiles.values().collect();
    tiles.sort_by_key(|u| u.depth);
    for update in tiles.into_iter().chain(&self.actor) {
      if let Some(slot) = frame.get_mut(self.cell(update.plane)) {
        *slot = slot.stack(texel_for(update));
      }
    }

    if let Some(actor) = &self.actor {
      if let Some(slot) = frame.get_mut(self.cell(actor.plane)) {
        *slot = slot.with_bold(true);
      }
    }
    frame
  }

  /// Returns the terminal cell a point on the tile plane lands on.
  fn cell(&self, plane: Point<f64>) -> Point {
    let p = plane + self.camera;
    Point::new(p.x().floor() as i64, p.y().floor() as i64)
  }

  /// Draws every pending update to the terminal.
  ///
  /// Only cells that changed since the last call are redrawn, unless the
  /// terminal was resized in between.
  pub fn present(&mut self) -> Result<()> {
    let frame = self.frame();
    let baked = self.baked.take();

    if baked.is_none() {
      crossterm::queue!(
        self.w,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
      )?;
    }

    for (i, (p, texel)) in frame.points().enumerate() {
      if let Some(old) = &baked {
        if old.data().get(i) == Some(texel) {
          continue;
        }
      }
      self.draw(p, *texel)?;
    }
    self.w.flush()?;

    self.baked = Some(frame);
    Ok(())
  }

  /// Draws a single texel at the given cell.
  fn draw(&mut self, cell: Point, texel: Texel) -> Result<()> {
    let weight = if texel.is_bold() {
      Attribute::Bold
    } else {
      Attribute::NormalIntensity
    };

    crossterm::queue!(
      self.w,
      crossterm::cursor::MoveTo(cell.x() as u16, cell.y() as u16),
      crossterm::style::SetAttribute(weight),
      crossterm::style::SetColors(Colors {
        foreground: Some(paint(texel.fg())),
        background: Some(paint(texel.bg())),
      }),
      crossterm::style::Print(texel.glyph().unwrap_or(' ')),
    )?;
    Ok(())
  }

  /// Restores the terminal to the state it was in before [`Curses::with()`].
  pub fn cleanup(&mut self) -> Result<()> {
    crossterm::execute!(
      self.w,
      crossterm::style::ResetColor,
      crossterm::terminal::LeaveAlternateScreen,
      crossterm::cursor::Show,
      crossterm::terminal::EnableLineWrap,
    )?;
    if mem::replace(&mut self.raw, false) {
      crossterm::terminal::disable_raw_mode()?;
    }
    self.w.flush()?;
    Ok(())
  }
}

/// Converts a tile update into the texel it is drawn as.
fn texel_for(update: &TileUpdate) -> Texel {
  if update.opacity <= 0.0 {
    Texel::clear()
  } else {
    Texel::new(update.glyph).with_fg(update.color)
  }
}

fn paint(p: Paint) -> Color {
  match p {
    Paint::Rgb(rgb) => Color::Rgb {
      r: rgb.red,
      g: rgb.green,
      b: rgb.blue,
    },
    Paint::Reset | Paint::Inherit => Color::Reset,
  }
}

impl<W: io::Write> RenderSink for Curses<W> {
  fn update_tile(&mut self, update: TileUpdate) {
    self.tiles.insert(update.pos, update);
  }

  fn update_actor(&mut self, update: TileUpdate) {
    self.actor = Some(update);
  }

  fn update_camera(&mut self, offset: Point<f64>) {
    self.camera = offset;
  }
}

impl<W: io::Write> Drop for Curses<W> {
  fn drop(&mut self) {
    let _ = self.cleanup();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::texel::colors;

  fn update(pos: Point, glyph: char, opacity: f32) -> TileUpdate {
    TileUpdate {
      pos,
      glyph,
      plane: Point::new(pos.x() as f64, pos.y() as f64),
      color: colors::RED,
      depth: 0,
      opacity,
    }
  }

  #[test]
  fn camera_translates_the_plane() {
    let mut curses = Curses::with(Vec::new(), 10, 5).unwrap();
    curses.update_tile(update(Point::new(1, 1), '#', 1.0));
    curses.update_camera(Point::new(3.0, 2.0));

    let frame = curses.frame();
    assert_eq!(frame.get(Point::new(4, 3)).unwrap().glyph(), Some('#'));
    assert_eq!(frame.get(Point::new(1, 1)).unwrap().glyph(), Some(' '));
  }

  #[test]
  fn actor_covers_its_tile() {
    let mut curses = Curses::with(Vec::new(), 10, 5).unwrap();
    curses.update_tile(update(Point::new(2, 2), '.', 0.0));
    curses.update_actor(update(Point::new(2, 2), '@', 1.0));

    let cell = *curses.frame().get(Point::new(2, 2)).unwrap();
    assert_eq!(cell.glyph(), Some('@'));
    assert!(cell.is_bold());
  }

  #[test]
  fn offscreen_tiles_are_dropped() {
    let mut curses = Curses::with(Vec::new(), 4, 4).unwrap();
    curses.update_tile(update(Point::new(2, 2), '#', 1.0));
    curses.update_camera(Point::new(-10.0, 0.0));
    assert!(curses.frame().data().iter().all(|t| t.glyph() == Some(' ')));
  }

  #[test]
  fn present_only_redraws_changes() {
    let mut curses = Curses::with(Vec::new(), 8, 2).unwrap();
    curses.update_tile(update(Point::new(0, 0), '#', 1.0));
    curses.present().unwrap();
    let first = curses.w.len();

    curses.present().unwrap();
    // Nothing changed, so only the (empty) flush happened.
    assert_eq!(curses.w.len(), first);

    curses.update_tile(update(Point::new(1, 0), '#', 1.0));
    curses.present().unwrap();
    assert!(curses.w.len() > first);
  }
}
