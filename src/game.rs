//! The game state, and its single owner.

use tracing::info;

use crate::actor::Actor;
use crate::actor::Step;
use crate::camera;
use crate::camera::TileMetrics;
use crate::config::Settings;
use crate::error::Result;
use crate::geo::Dir;
use crate::map::Grid;
use crate::map::TileTypeRegistry;
use crate::render;
use crate::render::RenderSink;

/// Owns the tile registry, the grid, and the actor on it.
///
/// Everything that changes the world goes through here, and every change is
/// pushed to the [`RenderSink`] passed in alongside it.
pub struct Game {
  registry: TileTypeRegistry,
  grid: Grid,
  actor: Actor,
  metrics: TileMetrics,
}

impl Game {
  /// Builds the world described by `settings`, places the actor at the
  /// center of the map, and draws everything to `sink`.
  pub fn new(
    settings: &Settings,
    metrics: TileMetrics,
    sink: &mut dyn RenderSink,
  ) -> Result<Game> {
    let registry = settings.registry()?;
    let mut grid = Grid::generate(settings.provider()?.as_ref(), &registry)?;
    let mut actor = Actor::new(grid.center(), settings.vision()?);
    actor.look(&mut grid, &registry)?;
    info!(
      width = grid.width(),
      height = grid.height(),
      start = ?actor.pos().coords(),
      "world ready"
    );

    let game = Game {
      registry,
      grid,
      actor,
      metrics,
    };
    game.redraw(sink)?;
    Ok(game)
  }

  /// Returns the grid.
  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  /// Returns the actor.
  pub fn actor(&self) -> &Actor {
    &self.actor
  }

  /// Returns the tile type registry.
  pub fn registry(&self) -> &TileTypeRegistry {
    &self.registry
  }

  /// Returns the current tile metrics.
  pub fn metrics(&self) -> &TileMetrics {
    &self.metrics
  }

  /// Moves the actor one tile in `dir`, if it can go there.
  pub fn handle(&mut self, dir: Dir, sink: &mut dyn RenderSink) -> Result<Step> {
    self.actor.move_by(
      dir,
      &mut self.grid,
      &self.registry,
      &self.metrics,
      sink,
    )
  }

  /// Adapts to a terminal which is now `cols` by `rows`, and redraws
  /// everything.
  pub fn resize(
    &mut self,
    cols: u16,
    rows: u16,
    sink: &mut dyn RenderSink,
  ) -> Result<()> {
    self.metrics = TileMetrics::for_terminal(
      cols,
      rows,
      self.metrics.tile_width,
      self.metrics.tile_height,
    );
    info!(cols, rows, "resized");
    self.redraw(sink)
  }

  /// Pushes every tile, the actor, and the camera to `sink`.
  pub fn redraw(&self, sink: &mut dyn RenderSink) -> Result<()> {
    let viewer = self.actor.pos();
    for tile in self.grid.tiles() {
      sink.update_tile(render::tile_update(
        &self.grid,
        &self.registry,
        viewer,
        self.actor.vision(),
        &self.metrics,
        tile.pos(),
      )?);
    }
    sink.update_actor(render::actor_update(
      &self.grid,
      &self.registry,
      &self.metrics,
      viewer,
    )?);
    sink.update_camera(camera::offset(viewer, &self.metrics));
    Ok(())
  }
}
