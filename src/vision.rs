//! Line-of-sight.
//!
//! Visibility is recomputed from scratch after every move by casting rays
//! outwards from the viewer (see [`fov::raycast()`]). Each tile carries a
//! single `visible` flag, which is only ever written here.

use std::collections::BTreeSet;
use std::collections::HashSet;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::geo::fov;
use crate::geo::fov::Ray;
use crate::geo::Point;
use crate::map::Grid;
use crate::map::TileTypeRegistry;

/// How far, and how finely, a viewer sees.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Vision {
  radius: u32,
  angle_step: f64,
}

impl Vision {
  /// The default vision radius, in tiles.
  pub const DEFAULT_RADIUS: u32 = 8;
  /// The default angle between two rays, in degrees.
  pub const DEFAULT_ANGLE_STEP: f64 = 3.0;
  /// The finest angle between two rays, in degrees; 36000 rays per cast.
  pub const MIN_ANGLE_STEP: f64 = 0.01;

  /// Creates a new `Vision`.
  ///
  /// Rays reach `radius - 1` tiles out. `angle_step` is the angle between two
  /// rays, in degrees; smaller steps leave fewer gaps at the cost of more
  /// rays.
  pub fn new(radius: u32, angle_step: f64) -> Result<Self> {
    if radius == 0 {
      return Err(Error::Config("vision radius must be positive".into()));
    }
    if !(angle_step >= Self::MIN_ANGLE_STEP && angle_step <= 360.0) {
      return Err(Error::Config(format!(
        "angle step must lie in [{}, 360], got {}",
        Self::MIN_ANGLE_STEP,
        angle_step
      )));
    }
    Ok(Self { radius, angle_step })
  }

  /// Returns the vision radius.
  pub fn radius(&self) -> u32 {
    self.radius
  }

  /// Returns the angle between two rays, in degrees.
  pub fn angle_step(&self) -> f64 {
    self.angle_step
  }
}

impl Default for Vision {
  fn default() -> Self {
    Self {
      radius: Self::DEFAULT_RADIUS,
      angle_step: Self::DEFAULT_ANGLE_STEP,
    }
  }
}

/// Recomputes what can be seen from `origin`.
///
/// Every tile in `previous` (the result of the last cast) is hidden first;
/// then the origin and every tile reached by a ray is lit. Rays stop at the
/// grid's edge and just after the first opaque tile, so walls are visible
/// but nothing behind them is.
///
/// Returns the new visible set, which replaces `previous` wholesale.
///
/// # Errors
///
/// Fails with [`Error::OutOfBounds`] if `origin` or a tile in `previous` lies
/// outside the grid, and with [`Error::UnknownTileType`] if a ray meets a
/// tile whose type isn't registered. Either aborts the cast midway.
pub fn cast_vision(
  grid: &mut Grid,
  registry: &TileTypeRegistry,
  origin: Point,
  vision: &Vision,
  previous: &HashSet<Point>,
) -> Result<HashSet<Point>> {
  for &p in previous {
    grid.get_mut(p)?.visible = false;
  }

  let mut visible = HashSet::new();
  grid.get_mut(origin)?.visible = true;
  visible.insert(origin);

  fov::raycast::<Error>(origin, vision.radius, vision.angle_step, &mut |p| {
    if !grid.contains(p) {
      return Ok(Ray::Halt);
    }
    let tile = grid.get_mut(p)?;
    tile.visible = true;
    visible.insert(p);

    if registry.lookup(tile.symbol())?.opaque {
      Ok(Ray::Halt)
    } else {
      Ok(Ray::Continue)
    }
  })?;

  debug!(
    origin = ?origin.coords(),
    lit = visible.len(),
    hidden = previous.difference(&visible).count(),
    "cast vision"
  );
  Ok(visible)
}

/// Returns every tile whose rendering may have changed between two casts, in
/// row-major order.
///
/// That is every tile that was visible before (it may now be hidden) and
/// every tile that is visible now (it is shaded relative to a new viewer
/// position). Tiles outside both sets were black and stay black.
pub fn affected(previous: &HashSet<Point>, current: &HashSet<Point>) -> Vec<Point> {
  let rows: BTreeSet<_> = previous
    .union(current)
    .map(|p| (p.y(), p.x()))
    .collect();
  rows.into_iter().map(|(y, x)| Point::new(x, y)).collect()
}
