//! Static level definitions for both mini-games
//!
//! Pure configuration: unlock flags, attempt counters, and scores live in
//! the caller's game state, keyed by these level ids.

pub mod adventure;
pub mod lab;

pub use adventure::{adventure_levels, build_level_equations, AdventureLevelDef};
pub use lab::{lab_levels, LabLevelDef};
