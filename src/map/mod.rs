//! Tile maps.

use crate::error::Error;
use crate::error::Result;
use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;

pub mod gen;
pub mod tiles;

pub use gen::MapProvider;
pub use tiles::TileType;
pub use tiles::TileTypeRegistry;

/// A single cell of a [`Grid`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tile {
  pos: Point,
  symbol: char,
  pub(crate) visible: bool,
}

impl Tile {
  /// Returns this tile's grid coordinates.
  pub fn pos(&self) -> Point {
    self.pos
  }

  /// Returns this tile's symbol, a key into the [`TileTypeRegistry`].
  pub fn symbol(&self) -> char {
    self.symbol
  }

  /// Returns whether this tile was lit by the most recent vision cast.
  pub fn is_visible(&self) -> bool {
    self.visible
  }
}

/// A fixed-size rectangular map of [`Tile`]s.
///
/// The grid's shape is fixed at construction. Tiles are stored in row-major
/// order, and every tile's position matches its storage slot.
#[derive(Clone, Debug)]
pub struct Grid {
  tiles: RectVec<Tile>,
}

impl Grid {
  /// Builds a grid from a [`MapProvider`], checking every symbol against
  /// `registry`.
  ///
  /// All tiles start out hidden.
  pub fn generate(
    provider: &dyn MapProvider,
    registry: &TileTypeRegistry,
  ) -> Result<Grid> {
    let (width, height) = provider.dims();
    if width <= 0 || height <= 0 {
      return Err(Error::Config(format!(
        "map dimensions must be positive, got {}x{}",
        width, height
      )));
    }

    let rect = Rect::with_dims(width, height);
    for p in rect.points() {
      registry.lookup(provider.symbol(p))?;
    }

    let tiles = RectVec::from_fn(rect, |pos| Tile {
      pos,
      symbol: provider.symbol(pos),
      visible: false,
    });
    Ok(Grid { tiles })
  }

  /// Returns the width of this grid.
  pub fn width(&self) -> i64 {
    self.tiles.dims().width()
  }

  /// Returns the height of this grid.
  pub fn height(&self) -> i64 {
    self.tiles.dims().height()
  }

  /// Returns the grid's extents as a rectangle anchored at the origin.
  pub fn rect(&self) -> Rect {
    self.tiles.dims()
  }

  /// Returns the center tile's coordinates, rounding down.
  pub fn center(&self) -> Point {
    self.rect().center()
  }

  /// Returns whether `p` lies within `[0, width) x [0, height)`.
  pub fn contains(&self, p: Point) -> bool {
    self.rect().contains(p)
  }

  /// Returns the row-major storage index of `p`.
  pub fn index(&self, p: Point) -> Result<usize> {
    self.tiles.index_of(p).ok_or_else(|| self.out_of_bounds(p))
  }

  /// Returns the tile at `p`.
  pub fn get(&self, p: Point) -> Result<&Tile> {
    match self.tiles.get(p) {
      Some(tile) => Ok(tile),
      None => Err(self.out_of_bounds(p)),
    }
  }

  /// Returns the tile at `p`, mutably.
  pub fn get_mut(&mut self, p: Point) -> Result<&mut Tile> {
    let err = self.out_of_bounds(p);
    self.tiles.get_mut(p).ok_or(err)
  }

  /// Returns the depth index of the tile at `p`.
  ///
  /// Tiles earlier in storage order get larger depths, so renderers that stack
  /// overlapping tiles by depth draw the upper-left tiles on top.
  pub fn depth(&self, p: Point) -> Result<i64> {
    Ok(self.rect().area() - self.index(p)? as i64)
  }

  /// Returns an iterator over every tile, in row-major order.
  pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
    self.tiles.data().iter()
  }

  fn out_of_bounds(&self, p: Point) -> Error {
    Error::OutOfBounds {
      x: p.x(),
      y: p.y(),
      width: self.width(),
      height: self.height(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::gen::Lattice;
  use super::tiles::symbols;
  use super::*;

  fn lattice() -> Grid {
    Grid::generate(&Lattice::new(25), &TileTypeRegistry::standard()).unwrap()
  }

  #[test]
  fn tiles_match_their_slots() {
    let grid = lattice();
    assert_eq!(grid.tiles().count(), 25 * 25);
    for (i, tile) in grid.tiles().enumerate() {
      assert_eq!(grid.index(tile.pos()).unwrap(), i);
      assert!(!tile.is_visible());
    }
  }

  #[test]
  fn out_of_bounds_access_fails() {
    let mut grid = lattice();
    for &p in &[
      Point::new(-1, 0),
      Point::new(0, -1),
      Point::new(25, 3),
      Point::new(3, 25),
    ] {
      assert!(!grid.contains(p));
      match grid.get(p) {
        Err(Error::OutOfBounds { x, y, width: 25, height: 25 }) => {
          assert_eq!(Point::new(x, y), p)
        }
        other => panic!("unexpected result: {:?}", other),
      }
      assert!(grid.get_mut(p).is_err());
    }
    assert!(grid.get(Point::new(24, 24)).is_ok());
  }

  #[test]
  fn depth_decreases_in_storage_order() {
    let grid = lattice();
    assert_eq!(grid.depth(Point::new(0, 0)).unwrap(), 625);
    assert_eq!(grid.depth(Point::new(1, 0)).unwrap(), 624);
    assert_eq!(grid.depth(Point::new(24, 24)).unwrap(), 1);
  }

  #[test]
  fn unknown_symbols_are_fatal() {
    struct Bogus;
    impl MapProvider for Bogus {
      fn dims(&self) -> (i64, i64) {
        (3, 3)
      }
      fn symbol(&self, p: Point) -> char {
        if p == Point::new(1, 1) {
          'X'
        } else {
          symbols::WALL
        }
      }
    }

    match Grid::generate(&Bogus, &TileTypeRegistry::standard()) {
      Err(Error::UnknownTileType('X')) => {}
      other => panic!("unexpected result: {:?}", other),
    }
  }
}
