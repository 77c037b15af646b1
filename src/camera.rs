//! Camera placement.
//!
//! Tiles live on a *plane*, where the tile at `(x, y)` sits at
//! `(x * tile_width, y * tile_height)`. The camera is a translation of that
//! plane which keeps the center of the actor's tile on the center of the
//! viewport.

use crate::geo::Point;

/// The size of a tile and of the viewport it is shown in.
///
/// Units are whatever the renderer measures in: pixels, or terminal cells.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TileMetrics {
  /// The width of one tile.
  pub tile_width: f64,
  /// The height of one tile.
  pub tile_height: f64,
  /// The center of the viewport.
  pub center: Point<f64>,
}

impl TileMetrics {
  /// Creates metrics for a `cols` by `rows` terminal, with each tile taking up
  /// `tile_width` by `tile_height` cells.
  pub fn for_terminal(
    cols: u16,
    rows: u16,
    tile_width: f64,
    tile_height: f64,
  ) -> Self {
    Self {
      tile_width,
      tile_height,
      center: Point::new(f64::from(cols) / 2.0, f64::from(rows) / 2.0),
    }
  }

  /// Creates metrics that fit `scale` tiles across the shorter side of a
  /// `width` by `height` window.
  ///
  /// Tiles are sized for a monospace font with a 3:4 aspect ratio, and the
  /// viewport is the largest square that fits in the window.
  pub fn for_window(width: f64, height: f64, scale: f64) -> Self {
    let window = width.min(height);
    Self {
      tile_width: window * 0.6 / scale,
      tile_height: window * 0.8 / scale,
      center: Point::new(window / 2.0, window / 2.0),
    }
  }

  /// Returns the position of the tile at `p` on the plane.
  pub fn plane(&self, p: Point) -> Point<f64> {
    Point::new(
      p.x() as f64 * self.tile_width,
      p.y() as f64 * self.tile_height,
    )
  }
}

/// Computes the plane offset that centers the tile at `focus` in the
/// viewport.
pub fn offset(focus: Point, metrics: &TileMetrics) -> Point<f64> {
  let x = -(focus.x() as f64 + 0.5) * metrics.tile_width + metrics.center.x();
  let y = -(focus.y() as f64 + 0.5) * metrics.tile_height + metrics.center.y();
  Point::new(x, y)
}
