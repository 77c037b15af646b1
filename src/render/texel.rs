//! Terminal cells.
//!
//! A [`Texel`] is one cell of the terminal as the renderer composes it: a
//! glyph and two paints. Frames are built by stacking texels, so a texel may
//! leave its glyph or either paint unset and show whatever lies beneath.

pub use palette::named as colors;

/// 8-bit sRGB, the color type used throughout rendering.
pub type Rgb = palette::Srgb<u8>;

/// How one layer of a cell is painted.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Paint {
  /// A solid color.
  Rgb(Rgb),
  /// The terminal's own default color.
  Reset,
  /// Whatever the layer below uses; the terminal default at the bottom.
  Inherit,
}

impl From<Rgb> for Paint {
  fn from(rgb: Rgb) -> Self {
    Paint::Rgb(rgb)
  }
}

bitflags::bitflags! {
  /// Text attributes of a [`Texel`].
  pub struct Attrs: u8 {
    const BOLD = 1 << 0;
  }
}

/// One terminal cell.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Texel {
  glyph: Option<char>,
  fg: Paint,
  bg: Paint,
  attrs: Attrs,
}

impl Texel {
  /// A texel which lets everything beneath it show through.
  pub fn clear() -> Self {
    Self {
      glyph: None,
      fg: Paint::Inherit,
      bg: Paint::Inherit,
      attrs: Attrs::empty(),
    }
  }

  /// A texel showing `glyph` in the terminal's default colors.
  pub fn new(glyph: char) -> Self {
    Self {
      glyph: Some(glyph),
      fg: Paint::Reset,
      bg: Paint::Reset,
      attrs: Attrs::empty(),
    }
  }

  /// Returns the glyph, or `None` if this texel is see-through.
  pub fn glyph(self) -> Option<char> {
    self.glyph
  }

  /// Returns the glyph's paint.
  pub fn fg(self) -> Paint {
    self.fg
  }

  /// Returns the paint behind the glyph.
  pub fn bg(self) -> Paint {
    self.bg
  }

  /// Returns whether the glyph is drawn in bold.
  pub fn is_bold(self) -> bool {
    self.attrs.contains(Attrs::BOLD)
  }

  /// Returns a copy of this texel with its glyph painted `fg`.
  pub fn with_fg(self, fg: impl Into<Paint>) -> Self {
    Self {
      fg: fg.into(),
      ..self
    }
  }

  /// Returns a copy of this texel, in bold or not.
  pub fn with_bold(mut self, bold: bool) -> Self {
    self.attrs.set(Attrs::BOLD, bold);
    self
  }

  /// Stacks `top` over this texel.
  ///
  /// A glyph on top replaces the one below, along with its attributes. Each
  /// paint on top replaces the one below unless it is [`Paint::Inherit`].
  pub fn stack(self, top: Texel) -> Self {
    let pick = |below: Paint, above: Paint| match above {
      Paint::Inherit => below,
      paint => paint,
    };
    let (glyph, attrs) = match top.glyph {
      Some(g) => (Some(g), top.attrs),
      None => (self.glyph, self.attrs),
    };
    Self {
      glyph,
      fg: pick(self.fg, top.fg),
      bg: pick(self.bg, top.bg),
      attrs,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clear_texels_change_nothing() {
    let base = Texel::new('#').with_fg(colors::RED).with_bold(true);
    assert_eq!(base.stack(Texel::clear()), base);
  }

  #[test]
  fn stacking_replaces_glyph_and_paints() {
    let base = Texel::new('.').with_fg(colors::RED);
    let top = Texel::new('@').with_fg(colors::WHITE).with_bold(true);
    let out = base.stack(top);
    assert_eq!(out.glyph(), Some('@'));
    assert_eq!(out.fg(), Paint::Rgb(colors::WHITE));
    assert_eq!(out.bg(), Paint::Reset);
    assert!(out.is_bold());
  }

  #[test]
  fn glyphless_layers_only_repaint() {
    let base = Texel::new('.').with_fg(colors::RED).with_bold(true);
    let tint = Texel::clear().with_fg(colors::BLUE);
    let out = base.stack(tint);
    assert_eq!(out.glyph(), Some('.'));
    assert_eq!(out.fg(), Paint::Rgb(colors::BLUE));
    assert_eq!(out.bg(), Paint::Reset);
    assert!(out.is_bold());
  }
}
