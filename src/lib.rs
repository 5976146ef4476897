//! # Manabiya - educational mini-game core
//!
//! Pure game logic for two classroom mini-games:
//! - An algebra adventure built on procedurally generated linear equations
//! - A chemistry lab where two reactants are mixed against a target reaction
//!
//! Only computation and static configuration data live here. UI state, level
//! unlocking, and persistence are owned by the caller.

pub mod algebra;
pub mod chemistry;
pub mod levels;
pub mod rng;

pub use algebra::{generate_equation, solution_steps, validate_answer, Equation};
pub use chemistry::{
    blend_colors, calculate_optimal_volumes, mix_chemicals, Chemical, ChemicalRegistry,
    MixingResult, OptimalVolumes, Reactant, Reaction, ReactionRegistry,
};
pub use rng::{seeded_rng, GameRng};
