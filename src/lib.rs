//! A small tile world seen through a lantern.
//!
//! An actor walks a grid of tiles. After every step, rays are cast outwards
//! from it to work out which tiles it can see; visible tiles are shaded by
//! their distance, and everything else is left in the dark. The world pushes
//! what changed to a [`render::RenderSink`], and never draws anything itself.

#![deny(unused)]

pub mod actor;
pub mod camera;
pub mod config;
pub mod error;
pub mod game;
pub mod geo;
pub mod input;
pub mod logging;
pub mod map;
pub mod render;
pub mod shade;
pub mod vision;

pub use error::Error;
pub use error::Result;
