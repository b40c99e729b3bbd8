//! Conway's Game of Life on an unbounded grid with two interchangeable
//! sparse engines: a change-driven one and a full neighbor recount.

pub mod change_set;
pub mod config;
pub mod coord;
pub mod driver;
pub mod engine;
pub mod error;
pub mod full_rescan;
pub mod patterns;
pub mod render;
pub mod rle;
pub mod rule;

pub use change_set::{Board, Change, ChangeKind, ChangeSetEngine};
pub use config::LifeConfig;
pub use coord::{Coord, LiveSet};
pub use engine::{Engine, EngineKind, Simulation};
pub use full_rescan::FullRescanEngine;
pub use rule::{Rule, GAME_OF_LIFE};
