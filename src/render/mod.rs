//! Rendering interface.
//!
//! The world never draws anything itself. Instead, whenever tiles change it
//! pushes [`TileUpdate`]s to a [`RenderSink`], which is free to draw them
//! however it likes: see [`curses::Curses`] for the terminal implementation.

use crate::camera::TileMetrics;
use crate::error::Result;
use crate::geo::Point;
use crate::map::tiles::symbols;
use crate::map::Grid;
use crate::map::TileTypeRegistry;
use crate::shade;
use crate::vision::Vision;

pub mod curses;
pub mod texel;

use texel::Rgb;

/// Everything a renderer needs to know to draw one tile, or the actor.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TileUpdate {
  /// The grid position being drawn.
  pub pos: Point,
  /// The symbol to draw.
  pub glyph: char,
  /// The position on the (unscrolled) tile plane.
  pub plane: Point<f64>,
  /// The shaded color.
  pub color: Rgb,
  /// Stacking order; higher depths are drawn over lower ones.
  pub depth: i64,
  /// 0 for fully transparent, 1 for fully opaque.
  pub opacity: f32,
}

/// A consumer of rendering requests.
pub trait RenderSink {
  /// Redraws a single grid tile.
  fn update_tile(&mut self, update: TileUpdate);

  /// Redraws the actor marker.
  fn update_actor(&mut self, update: TileUpdate);

  /// Moves the camera, so that the tile plane is drawn translated by
  /// `offset`.
  fn update_camera(&mut self, offset: Point<f64>);
}

/// Builds the [`TileUpdate`] for the grid tile at `pos`, as seen by a viewer
/// standing at `viewer`.
///
/// The tile under the viewer is made fully transparent, since the actor
/// marker is drawn in its place.
pub fn tile_update(
  grid: &Grid,
  registry: &TileTypeRegistry,
  viewer: Point,
  vision: &Vision,
  metrics: &TileMetrics,
  pos: Point,
) -> Result<TileUpdate> {
  let tile = grid.get(pos)?;
  let ty = registry.lookup(tile.symbol())?;
  Ok(TileUpdate {
    pos,
    glyph: tile.symbol(),
    plane: metrics.plane(pos),
    color: shade::compute_color(tile, ty, viewer, vision.radius()),
    depth: grid.depth(pos)?,
    opacity: if pos == viewer { 0.0 } else { 1.0 },
  })
}

/// Builds the [`TileUpdate`] for the actor marker at `pos`.
///
/// The marker is always lit, and sits at distance zero from the viewer, so it
/// is drawn in its type's base color.
pub fn actor_update(
  grid: &Grid,
  registry: &TileTypeRegistry,
  metrics: &TileMetrics,
  pos: Point,
) -> Result<TileUpdate> {
  let ty = registry.lookup(symbols::ACTOR)?;
  Ok(TileUpdate {
    pos,
    glyph: ty.symbol,
    plane: metrics.plane(pos),
    color: shade::scale(ty.color, shade::falloff(0.0, 1)),
    depth: grid.depth(pos)?,
    opacity: 1.0,
  })
}
