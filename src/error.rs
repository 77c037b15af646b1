//! Error types.

use std::io;

use thiserror::Error;

/// Errors that can occur while building or updating the world.
#[derive(Error, Debug)]
pub enum Error {
  /// A grid coordinate outside of the grid's extents was accessed.
  #[error("({x}, {y}) is outside of the {width}x{height} grid")]
  OutOfBounds {
    /// The offending x coordinate.
    x: i64,
    /// The offending y coordinate.
    y: i64,
    /// The grid width.
    width: i64,
    /// The grid height.
    height: i64,
  },

  /// A tile symbol with no entry in the tile type registry.
  ///
  /// This always indicates corrupt map data.
  #[error("unknown tile type {0:?}")]
  UnknownTileType(char),

  /// A color string that is not of the form `#rrggbb`.
  #[error("malformed color {0:?}, expected #rrggbb")]
  BadColor(String),

  /// A configuration value that failed validation.
  #[error("invalid configuration: {0}")]
  Config(String),

  /// A configuration file that could not be parsed.
  #[error("could not parse configuration: {0}")]
  Toml(#[from] toml::de::Error),

  /// The terminal refused a command.
  #[error("terminal error: {0}")]
  Terminal(#[from] crossterm::ErrorKind),

  /// An I/O error.
  #[error(transparent)]
  Io(#[from] io::Error),
}

/// Result type for world operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
