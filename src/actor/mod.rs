//! The actor: the one thing in the world that moves and sees.

use std::collections::HashSet;

use tracing::debug;
use tracing::instrument;

use crate::camera;
use crate::camera::TileMetrics;
use crate::error::Result;
use crate::geo::Dir;
use crate::geo::Point;
use crate::map::Grid;
use crate::map::TileTypeRegistry;
use crate::render;
use crate::render::RenderSink;
use crate::vision;
use crate::vision::Vision;

/// The outcome of [`Actor::move_by()`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Step {
  /// The actor moved, and the world was redrawn around it.
  Moved,
  /// The target tile is solid; nothing changed.
  Blocked,
}

/// An actor with a position and a field-of-view.
#[derive(Clone, Debug)]
pub struct Actor {
  pos: Point,
  vision: Vision,
  visible: HashSet<Point>,
}

impl Actor {
  /// Creates a new `Actor` at `pos` which sees nothing yet; call
  /// [`Actor::look()`] to cast its vision for the first time.
  pub fn new(pos: Point, vision: Vision) -> Self {
    Self {
      pos,
      vision,
      visible: HashSet::new(),
    }
  }

  /// Returns the actor's position.
  pub fn pos(&self) -> Point {
    self.pos
  }

  /// Returns the actor's vision parameters.
  pub fn vision(&self) -> &Vision {
    &self.vision
  }

  /// Returns the set of points lit by the most recent vision cast.
  pub fn visible(&self) -> &HashSet<Point> {
    &self.visible
  }

  /// Recasts the actor's vision from where it stands.
  ///
  /// Returns every tile whose rendering may have changed, in row-major order.
  pub fn look(
    &mut self,
    grid: &mut Grid,
    registry: &TileTypeRegistry,
  ) -> Result<Vec<Point>> {
    self.look_from(self.pos, grid, registry)
  }

  /// Casts vision from `pos`, and only if that succeeds, moves the actor
  /// there.
  fn look_from(
    &mut self,
    pos: Point,
    grid: &mut Grid,
    registry: &TileTypeRegistry,
  ) -> Result<Vec<Point>> {
    let visible =
      vision::cast_vision(grid, registry, pos, &self.vision, &self.visible)?;
    let affected = vision::affected(&self.visible, &visible);
    self.pos = pos;
    self.visible = visible;
    Ok(affected)
  }

  /// Attempts to take one step in `dir`.
  ///
  /// Stepping onto a solid tile is refused without touching anything. Any
  /// other step moves the actor, recasts its vision, and pushes the reshaded
  /// tiles, the actor, and the recentered camera to `sink`.
  #[instrument(level = "debug", skip(self, grid, registry, metrics, sink), fields(from = ?self.pos.coords()))]
  pub fn move_by(
    &mut self,
    dir: Dir,
    grid: &mut Grid,
    registry: &TileTypeRegistry,
    metrics: &TileMetrics,
    sink: &mut dyn RenderSink,
  ) -> Result<Step> {
    let target = self.pos + dir.to_point::<i64>();
    let tile = grid.get(target)?;
    if registry.lookup(tile.symbol())?.solid {
      debug!(target = ?target.coords(), "blocked");
      return Ok(Step::Blocked);
    }

    let affected = self.look_from(target, grid, registry)?;
    for p in affected {
      sink.update_tile(render::tile_update(
        grid,
        registry,
        self.pos,
        &self.vision,
        metrics,
        p,
      )?);
    }
    sink.update_actor(render::actor_update(grid, registry, metrics, self.pos)?);
    sink.update_camera(camera::offset(self.pos, metrics));
    Ok(Step::Moved)
  }
}
