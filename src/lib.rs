//! **amaze** is a maze generation, route finding and wall tracing library.
//!
//! Mazes are grids of polygonal rooms joined by doors. Square, hexagonal
//! and triangular room shapes share one container and one set of
//! algorithms; the shape-specific wall tables live in [`topology`].

#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;

pub mod display;
pub mod errors;
pub mod generators;
pub mod maze;
pub mod pathing;
pub mod rooms;
pub mod topology;
pub mod tracing;
pub mod units;
pub mod walls;
mod utils;
