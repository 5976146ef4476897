//! Chemistry lab core - stock chemicals, target reactions, and mixing

pub mod chemicals;
pub mod mixing;

pub use chemicals::{Chemical, ChemicalRegistry, Reactant, Reaction, ReactionRegistry};
pub use mixing::{
    blend_colors, calculate_optimal_volumes, mix_chemicals, MixingResult, OptimalVolumes,
    RATIO_TOLERANCE,
};
