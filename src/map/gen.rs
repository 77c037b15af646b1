//! Map generation.

use rand::distributions::Bernoulli;
use rand::distributions::Distribution as _;
use rand::rngs::StdRng;
use rand::SeedableRng as _;

use crate::error::Error;
use crate::error::Result;
use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;
use crate::map::tiles::symbols;

/// A source of map layouts.
///
/// A provider only decides which symbol goes where; [`Grid::generate()`]
/// validates the symbols and builds the actual tiles.
///
/// [`Grid::generate()`]: crate::map::Grid::generate
pub trait MapProvider {
  /// Returns the `(width, height)` of the map.
  fn dims(&self) -> (i64, i64);

  /// Returns the tile symbol at `p`, which is always within [`dims()`].
  ///
  /// [`dims()`]: MapProvider::dims
  fn symbol(&self, p: Point) -> char;
}

/// A square room walled on all sides, with a lattice of pillars on every
/// point whose coordinates are both multiples of four.
///
/// The exact center is always left open, since that's where the actor
/// spawns.
#[derive(Copy, Clone, Debug)]
pub struct Lattice {
  size: i64,
}

impl Lattice {
  /// Spacing between pillars.
  pub const SPACING: i64 = 4;

  /// Creates a new `size` by `size` lattice map.
  pub fn new(size: i64) -> Self {
    Self { size }
  }
}

impl MapProvider for Lattice {
  fn dims(&self) -> (i64, i64) {
    (self.size, self.size)
  }

  fn symbol(&self, p: Point) -> char {
    let rect = Rect::with_dims(self.size, self.size);
    let pillar = p.x() % Self::SPACING == 0
      && p.y() % Self::SPACING == 0
      && p != rect.center();
    if rect.boundary_contains(p) || pillar {
      symbols::WALL
    } else {
      symbols::FLOOR
    }
  }
}

/// A square room walled on all sides, with walls scattered randomly through
/// its interior.
///
/// The layout is fully determined by the seed. The center is always left
/// open.
#[derive(Clone, Debug)]
pub struct Scatter {
  symbols: RectVec<char>,
}

impl Scatter {
  /// Generates a `size` by `size` map where each interior tile is a wall with
  /// probability `density`.
  pub fn new(size: i64, density: f64, seed: u64) -> Result<Self> {
    let walls = Bernoulli::new(density).map_err(|_| {
      Error::Config(format!(
        "scatter density must lie in [0, 1], got {}",
        density
      ))
    })?;

    let mut rng = StdRng::seed_from_u64(seed);
    let rect = Rect::with_dims(size, size);
    let center = rect.center();
    let layout = RectVec::from_fn(rect, |p| {
      if rect.boundary_contains(p) {
        symbols::WALL
      } else if p != center && walls.sample(&mut rng) {
        symbols::WALL
      } else {
        symbols::FLOOR
      }
    });
    Ok(Self { symbols: layout })
  }
}

impl MapProvider for Scatter {
  fn dims(&self) -> (i64, i64) {
    let rect = self.symbols.dims();
    (rect.width(), rect.height())
  }

  fn symbol(&self, p: Point) -> char {
    self.symbols.get(p).copied().unwrap_or(symbols::WALL)
  }
}
