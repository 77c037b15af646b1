//! Tile types.
//!
//! Every tile on a [`Grid`](crate::map::Grid) carries only a symbol; what that
//! symbol *means* (whether it blocks movement or sight, what color it is) is
//! looked up in a [`TileTypeRegistry`], which is loaded once at startup and
//! never mutated afterwards.

use std::collections::HashMap;

use crate::error::Error;
use crate::error::Result;
use crate::render::texel::Rgb;

/// Symbols of the standard tile types.
pub mod symbols {
  /// An impassable, opaque wall.
  pub const WALL: char = '#';
  /// A closed door.
  pub const DOOR: char = '+';
  /// An open passage, such as an open door.
  pub const PASSAGE: char = '/';
  /// Open floor.
  pub const FLOOR: char = '\u{b7}';
  /// The marker drawn for the actor itself.
  pub const ACTOR: char = '@';
}

/// The physical and visual properties shared by all tiles of one kind.
#[derive(Clone, PartialEq, Debug)]
pub struct TileType {
  /// The symbol tiles of this type are drawn with.
  pub symbol: char,
  /// A human-readable name, used in diagnostics.
  pub name: String,
  /// Whether this tile blocks movement.
  pub solid: bool,
  /// Whether this tile blocks sight. Opaque tiles are themselves visible.
  pub opaque: bool,
  /// The color of this tile when seen from up close.
  pub color: Rgb,
  /// The render class, for renderers that style tiles by class.
  pub class: String,
}

impl TileType {
  fn standard(
    symbol: char,
    name: &str,
    solid: bool,
    opaque: bool,
    color: Rgb,
  ) -> Self {
    Self {
      symbol,
      name: name.into(),
      solid,
      opaque,
      color,
      class: name.into(),
    }
  }
}

/// An immutable table from tile symbols to [`TileType`]s.
#[derive(Clone, Debug)]
pub struct TileTypeRegistry {
  types: HashMap<char, TileType>,
}

impl TileTypeRegistry {
  /// Builds a registry from a list of tile types.
  ///
  /// Fails if two types share a symbol.
  pub fn new(types: impl IntoIterator<Item = TileType>) -> Result<Self> {
    let mut table = HashMap::new();
    for ty in types {
      if let Some(old) = table.insert(ty.symbol, ty) {
        return Err(Error::Config(format!(
          "tile symbol {:?} is defined more than once",
          old.symbol
        )));
      }
    }
    Ok(Self { types: table })
  }

  /// Returns the registry of the standard tile types: walls, doors, open
  /// passages, floor, and the actor marker.
  pub fn standard() -> Self {
    use symbols::*;
    let types = vec![
      TileType::standard(WALL, "wall", true, true, Rgb::new(0x2f, 0x4f, 0x4f)),
      TileType::standard(DOOR, "door", true, true, Rgb::new(0xa5, 0x2a, 0x2a)),
      TileType::standard(
        PASSAGE,
        "passage",
        false,
        false,
        Rgb::new(0xa5, 0x2a, 0x2a),
      ),
      TileType::standard(
        FLOOR,
        "floor",
        false,
        false,
        Rgb::new(0x80, 0x80, 0x00),
      ),
      TileType::standard(ACTOR, "actor", false, false, Rgb::new(0xff, 0xff, 0xff)),
    ];
    Self {
      types: types.into_iter().map(|ty| (ty.symbol, ty)).collect(),
    }
  }

  /// Looks up the type for `symbol`.
  ///
  /// An unknown symbol means the map data is corrupt; callers are not
  /// expected to recover from it.
  pub fn lookup(&self, symbol: char) -> Result<&TileType> {
    self
      .types
      .get(&symbol)
      .ok_or(Error::UnknownTileType(symbol))
  }

  /// Iterates over every registered type, in symbol order.
  pub fn iter(&self) -> impl Iterator<Item = &TileType> + '_ {
    let mut types: Vec<_> = self.types.values().collect();
    types.sort_by_key(|ty| ty.symbol);
    types.into_iter()
  }

  /// Returns the number of registered types.
  pub fn len(&self) -> usize {
    self.types.len()
  }

  /// Returns whether the registry is empty.
  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_table() {
    let reg = TileTypeRegistry::standard();
    assert_eq!(reg.len(), 5);

    let wall = reg.lookup(symbols::WALL).unwrap();
    assert!(wall.solid && wall.opaque);
    let door = reg.lookup(symbols::DOOR).unwrap();
    assert!(door.solid && door.opaque);
    let passage = reg.lookup(symbols::PASSAGE).unwrap();
    assert!(!passage.solid && !passage.opaque);
    let floor = reg.lookup(symbols::FLOOR).unwrap();
    assert!(!floor.solid && !floor.opaque);
    assert_eq!(floor.color, Rgb::new(128, 128, 0));
  }

  #[test]
  fn unknown_symbols_fail() {
    let reg = TileTypeRegistry::standard();
    match reg.lookup('?') {
      Err(Error::UnknownTileType('?')) => {}
      other => panic!("unexpected lookup result: {:?}", other),
    }
  }

  #[test]
  fn duplicate_symbols_are_rejected() {
    let wall = TileTypeRegistry::standard()
      .lookup(symbols::WALL)
      .unwrap()
      .clone();
    assert!(TileTypeRegistry::new(vec![wall.clone(), wall]).is_err());
  }
}
