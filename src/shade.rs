//! Distance shading.
//!
//! Visible tiles fade towards black as they get further from the viewer, and
//! hidden tiles are black outright. Shading is always recomputed from a tile
//! type's static base color, so it is idempotent: shading the same tile twice
//! from the same place yields the same color.

use crate::error::Error;
use crate::error::Result;
use crate::geo::Point;
use crate::map::Tile;
use crate::map::TileType;
use crate::render::texel::colors;
use crate::render::texel::Rgb;

/// Computes the brightness factor for a tile at distance `dist` from a viewer
/// who can see `radius` tiles far.
///
/// Tiles within half the radius are at full brightness; from there brightness
/// falls off linearly, reaching zero at the radius itself. The factor is
/// clamped to `[0, 1]`, so tiles beyond the radius are black rather than
/// inverted.
pub fn falloff(dist: f64, radius: u32) -> f64 {
  let percent = (1.0 - dist / f64::from(radius)) * 2.0;
  percent.max(0.0).min(1.0)
}

/// Scales each channel of `color` by `percent`, rounding to nearest.
pub fn scale(color: Rgb, percent: f64) -> Rgb {
  let channel = |c: u8| (f64::from(c) * percent).round().max(0.0).min(255.0) as u8;
  Rgb::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Computes the color `tile` should be drawn with, given the viewer's
/// position and vision radius.
///
/// `ty` must be the tile's registered type.
pub fn compute_color(
  tile: &Tile,
  ty: &TileType,
  viewer: Point,
  radius: u32,
) -> Rgb {
  if !tile.is_visible() {
    return colors::BLACK;
  }
  let dist = (tile.pos() - viewer).norm();
  scale(ty.color, falloff(dist, radius))
}

/// Parses a color of the form `#rrggbb`.
///
/// The leading `#` is optional, and hex digits may be of either case.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
  let bad = || Error::BadColor(hex.into());
  let digits = hex.strip_prefix('#').unwrap_or(hex);
  if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
    return Err(bad());
  }

  let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
  match (channel(0), channel(2), channel(4)) {
    (Ok(r), Ok(g), Ok(b)) => Ok(Rgb::new(r, g, b)),
    _ => Err(bad()),
  }
}

/// Formats a color as `#rrggbb`, with lowercase hex digits.
pub fn to_hex(color: Rgb) -> String {
  format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::map::gen::Lattice;
  use crate::map::tiles::symbols;
  use crate::map::Grid;
  use crate::map::TileTypeRegistry;

  fn lit(grid: &mut Grid, p: Point) -> Tile {
    let tile = grid.get_mut(p).unwrap();
    tile.visible = true;
    *tile
  }

  #[test]
  fn falloff_boundaries() {
    assert_eq!(falloff(0.0, 8), 1.0);
    assert_eq!(falloff(4.0, 8), 1.0);
    assert_eq!(falloff(6.0, 8), 0.5);
    assert_eq!(falloff(8.0, 8), 0.0);
  }

  #[test]
  fn falloff_is_clamped_beyond_the_radius() {
    // Unclamped, a tile at 1.5 radii would come out at -1.
    assert_eq!(falloff(12.0, 8), 0.0);
    assert_eq!(falloff(100.0, 8), 0.0);
  }

  #[test]
  fn hidden_tiles_are_black() {
    let reg = TileTypeRegistry::standard();
    let grid = Grid::generate(&Lattice::new(25), &reg).unwrap();
    let tile = grid.get(Point::new(12, 12)).unwrap();
    let floor = reg.lookup(symbols::FLOOR).unwrap();
    assert_eq!(compute_color(tile, floor, Point::new(12, 12), 8), colors::BLACK);
  }

  #[test]
  fn viewer_tile_keeps_its_base_color() {
    let reg = TileTypeRegistry::standard();
    let mut grid = Grid::generate(&Lattice::new(25), &reg).unwrap();
    let tile = lit(&mut grid, Point::new(12, 12));
    let floor = reg.lookup(symbols::FLOOR).unwrap();
    assert_eq!(compute_color(&tile, floor, Point::new(12, 12), 8), floor.color);
  }

  #[test]
  fn shading_darkens_with_distance() {
    let reg = TileTypeRegistry::standard();
    let mut grid = Grid::generate(&Lattice::new(25), &reg).unwrap();
    let wall = reg.lookup(symbols::WALL).unwrap();

    // (12, 16) is four tiles away: still within full brightness.
    let near = lit(&mut grid, Point::new(12, 16));
    assert_eq!(compute_color(&near, wall, Point::new(12, 12), 8), wall.color);

    // (12, 18) is six tiles away: half brightness.
    let far = lit(&mut grid, Point::new(12, 18));
    assert_eq!(
      compute_color(&far, wall, Point::new(12, 12), 8),
      Rgb::new(24, 40, 40)
    );
  }

  #[test]
  fn shading_is_idempotent() {
    let reg = TileTypeRegistry::standard();
    let mut grid = Grid::generate(&Lattice::new(25), &reg).unwrap();
    let floor = reg.lookup(symbols::FLOOR).unwrap();
    let tile = lit(&mut grid, Point::new(15, 14));
    let first = compute_color(&tile, floor, Point::new(12, 12), 8);
    let second = compute_color(&tile, floor, Point::new(12, 12), 8);
    assert_eq!(first, second);
  }

  #[test]
  fn hex_round_trip() {
    for &hex in &["#2f4f4f", "#a52a2a", "#808000", "#ffffff", "#000000"] {
      assert_eq!(to_hex(parse_hex(hex).unwrap()), hex);
    }
    assert_eq!(parse_hex("#2F4F4F").unwrap(), parse_hex("2f4f4f").unwrap());
  }

  #[test]
  fn malformed_hex_is_rejected() {
    for &hex in &["", "#", "#12345", "#1234567", "#12345g", "#+12345"] {
      assert!(parse_hex(hex).is_err(), "{:?}", hex);
    }
  }
}
