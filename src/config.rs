//! Configuration files.
//!
//! Settings are read from a TOML file. Every field has a default, so an empty
//! file (or no file at all) gives a 25x25 lattice seen with a radius of 8.
//!
//! ```toml
//! vision_radius = 10
//! angle_step = 2.0
//!
//! [map]
//! kind = "scatter"
//! density = 0.15
//! seed = 42
//!
//! [log]
//! file = "lantern.log"
//! filter = "lantern=debug"
//! ```

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::camera::TileMetrics;
use crate::error::Error;
use crate::error::Result;
use crate::map::gen::Lattice;
use crate::map::gen::Scatter;
use crate::map::tiles::symbols;
use crate::map::MapProvider;
use crate::map::TileType;
use crate::map::TileTypeRegistry;
use crate::shade;
use crate::vision::Vision;

/// Everything that can be tuned from a configuration file.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  /// How many tiles far the actor can see.
  pub vision_radius: u32,
  /// Degrees between successive vision rays.
  pub angle_step: f64,
  /// The side length of the (square) map.
  pub grid_size: i64,
  /// Terminal columns per tile.
  pub tile_width: f64,
  /// Terminal rows per tile.
  pub tile_height: f64,
  /// Which map to generate.
  pub map: MapSettings,
  /// The tile type table. Replaces the standard table wholesale if given.
  pub tiles: Vec<TileSpec>,
  /// Where logs go.
  pub log: LogSettings,
}

/// Map generator selection.
#[derive(Deserialize, Copy, Clone, PartialEq, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MapSettings {
  /// See [`Lattice`].
  Lattice,
  /// See [`Scatter`].
  Scatter {
    /// Chance of an interior tile being a wall.
    density: f64,
    /// RNG seed.
    seed: u64,
  },
}

impl Default for MapSettings {
  fn default() -> Self {
    MapSettings::Lattice
  }
}

/// One row of the tile type table, as written in a configuration file.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub struct TileSpec {
  /// A single character, e.g. `"#"`.
  pub symbol: char,
  /// A human-readable name.
  pub name: String,
  /// Blocks movement; `false` if omitted.
  #[serde(default)]
  pub solid: bool,
  /// Blocks sight; `false` if omitted.
  #[serde(default)]
  pub opaque: bool,
  /// A `#rrggbb` color.
  pub color: String,
  /// Defaults to `name`.
  #[serde(default)]
  pub class: Option<String>,
}

impl From<&TileType> for TileSpec {
  fn from(ty: &TileType) -> Self {
    Self {
      symbol: ty.symbol,
      name: ty.name.clone(),
      solid: ty.solid,
      opaque: ty.opaque,
      color: shade::to_hex(ty.color),
      class: Some(ty.class.clone()),
    }
  }
}

/// Logging settings.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
  /// The file to log to. Without one, nothing is logged, since the terminal
  /// itself is busy drawing the game.
  pub file: Option<PathBuf>,
  /// A `tracing` filter directive; overridden by `LANTERN_LOG`.
  pub filter: String,
}

impl Default for LogSettings {
  fn default() -> Self {
    Self {
      file: None,
      filter: "lantern=info".into(),
    }
  }
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      vision_radius: Vision::DEFAULT_RADIUS,
      angle_step: Vision::DEFAULT_ANGLE_STEP,
      grid_size: 25,
      tile_width: 2.0,
      tile_height: 1.0,
      map: MapSettings::default(),
      tiles: TileTypeRegistry::standard().iter().map(TileSpec::from).collect(),
      log: LogSettings::default(),
    }
  }
}

impl Settings {
  /// Loads settings from the file at `path`, or the defaults if there is no
  /// path.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::parse(&fs::read_to_string(path)?),
      None => Ok(Self::default()),
    }
  }

  /// Parses and validates settings from TOML text.
  pub fn parse(text: &str) -> Result<Self> {
    let settings: Settings = toml::from_str(text)?;
    settings.validate()?;
    Ok(settings)
  }

  /// Checks that these settings describe a playable world.
  pub fn validate(&self) -> Result<()> {
    if self.grid_size < 3 {
      return Err(Error::Config(format!(
        "grid_size must be at least 3, got {}",
        self.grid_size
      )));
    }
    for (name, len) in &[
      ("tile_width", self.tile_width),
      ("tile_height", self.tile_height),
    ] {
      if !len.is_finite() || *len <= 0.0 {
        return Err(Error::Config(format!(
          "{} must be positive, got {}",
          name, len
        )));
      }
    }

    self.vision()?;
    let registry = self.registry()?;
    if registry.is_empty() {
      return Err(Error::Config("tile table is empty".into()));
    }
    for &required in &[symbols::WALL, symbols::FLOOR, symbols::ACTOR] {
      registry.lookup(required).map_err(|_| {
        Error::Config(format!("tile table is missing {:?}", required))
      })?;
    }
    self.provider()?;
    Ok(())
  }

  /// Builds the vision parameters.
  pub fn vision(&self) -> Result<Vision> {
    Vision::new(self.vision_radius, self.angle_step)
  }

  /// Builds the tile type registry, decoding every color.
  pub fn registry(&self) -> Result<TileTypeRegistry> {
    let types = self
      .tiles
      .iter()
      .map(|spec| {
        Ok(TileType {
          symbol: spec.symbol,
          name: spec.name.clone(),
          solid: spec.solid,
          opaque: spec.opaque,
          color: shade::parse_hex(&spec.color)?,
          class: spec.class.clone().unwrap_or_else(|| spec.name.clone()),
        })
      })
      .collect::<Result<Vec<_>>>()?;
    TileTypeRegistry::new(types)
  }

  /// Builds the configured map generator.
  pub fn provider(&self) -> Result<Box<dyn MapProvider>> {
    let provider: Box<dyn MapProvider> = match self.map {
      MapSettings::Lattice => Box::new(Lattice::new(self.grid_size)),
      MapSettings::Scatter { density, seed } => {
        Box::new(Scatter::new(self.grid_size, density, seed)?)
      }
    };
    Ok(provider)
  }

  /// Builds tile metrics for a `cols` by `rows` terminal.
  pub fn metrics(&self, cols: u16, rows: u16) -> TileMetrics {
    TileMetrics::for_terminal(cols, rows, self.tile_width, self.tile_height)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_gives_defaults() {
    let settings = Settings::parse("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.vision_radius, 8);
    assert_eq!(settings.angle_step, 3.0);
    assert_eq!(settings.grid_size, 25);
    assert_eq!(settings.log.filter, "lantern=info");
    assert_eq!(settings.registry().unwrap().len(), 5);
  }

  #[test]
  fn no_path_gives_defaults() {
    assert_eq!(Settings::load(None).unwrap(), Settings::default());
  }

  #[test]
  fn default_table_round_trips() {
    let reg = Settings::default().registry().unwrap();
    let standard = TileTypeRegistry::standard();
    for ty in standard.iter() {
      assert_eq!(reg.lookup(ty.symbol).unwrap(), ty);
    }
  }

  #[test]
  fn overrides() {
    let settings = Settings::parse(
      r##"
        vision_radius = 5
        tile_width = 1.0

        [map]
        kind = "scatter"
        density = 0.25
        seed = 7

        [[tiles]]
        symbol = "#"
        name = "wall"
        solid = true
        opaque = true
        color = "#FF0000"

        [[tiles]]
        symbol = "."
        name = "floor"
        color = "#00ff00"

        [[tiles]]
        symbol = "@"
        name = "actor"
        color = "#ffffff"
      "##,
    );
    // The floor symbol is not the standard one.
    assert!(settings.is_err());

    let settings = Settings::parse(
      r##"
        vision_radius = 5

        [map]
        kind = "scatter"
        density = 0.25
        seed = 7
      "##,
    )
    .unwrap();
    assert_eq!(settings.vision().unwrap().radius(), 5);
    assert_eq!(
      settings.map,
      MapSettings::Scatter {
        density: 0.25,
        seed: 7
      }
    );
    assert_eq!(settings.provider().unwrap().dims(), (25, 25));
  }

  #[test]
  fn custom_tiles() {
    let settings = Settings::parse(
      "
        [[tiles]]
        symbol = '#'
        name = 'rock'
        solid = true
        opaque = true
        color = '#FF0000'

        [[tiles]]
        symbol = '\u{b7}'
        name = 'sand'
        color = 'c2b280'

        [[tiles]]
        symbol = '@'
        name = 'actor'
        color = '#ffffff'
        class = 'hero'
      ",
    )
    .unwrap();
    let reg = settings.registry().unwrap();
    assert_eq!(reg.len(), 3);
    let rock = reg.lookup(symbols::WALL).unwrap();
    assert_eq!(rock.name, "rock");
    assert_eq!(rock.class, "rock");
    assert_eq!(shade::to_hex(rock.color), "#ff0000");
    assert!(!reg.lookup(symbols::FLOOR).unwrap().solid);
    assert_eq!(reg.lookup(symbols::ACTOR).unwrap().class, "hero");
  }

  #[test]
  fn invalid_settings() {
    for text in &[
      "vision_radius = 0",
      "angle_step = 0.0",
      "angle_step = 1e-300",
      "angle_step = 400.0",
      "grid_size = 2",
      "tile_height = -1.0",
      "bogus = 1",
      "tiles = []",
      "[map]\nkind = \"scatter\"\ndensity = 1.5\nseed = 0",
      "[[tiles]]\nsymbol = '#'\nname = 'wall'\ncolor = 'red'",
    ] {
      assert!(Settings::parse(text).is_err(), "accepted {:?}", text);
    }
  }

  #[test]
  fn sample_file_is_valid() {
    let settings = Settings::parse(include_str!("../lantern.toml")).unwrap();
    let reg = settings.registry().unwrap();
    for ty in TileTypeRegistry::standard().iter() {
      assert_eq!(reg.lookup(ty.symbol).unwrap(), ty);
    }
    assert_eq!(settings.log.file, Some(PathBuf::from("lantern.log")));
  }

  #[test]
  fn terminal_metrics() {
    let metrics = Settings::default().metrics(80, 24);
    assert_eq!(metrics.tile_width, 2.0);
    assert_eq!(metrics.tile_height, 1.0);
    assert_eq!(metrics.center.x(), 40.0);
  }
}
