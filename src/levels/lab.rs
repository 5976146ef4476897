//! Chemistry lab levels
//!
//! Each level targets one reaction from the registry and names the chemicals
//! on the bench by registry id.

/// A chemistry lab level definition
pub struct LabLevelDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Target reaction id in the `ReactionRegistry`
    pub reaction_id: &'static str,
    /// Bench chemicals, by `ChemicalRegistry` id
    pub chemical_ids: &'static [&'static str],
    pub max_attempts: u32,
    pub score_multiplier: f64,
}

/// All lab levels, in play order
pub fn lab_levels() -> Vec<LabLevelDef> {
    vec![
        LabLevelDef {
            id: "level1",
            title: "Basic Neutralization",
            description: "Mix H₂SO₄ and NaOH in the correct 1:2 ratio to neutralize the solution",
            reaction_id: "acid_base_1",
            chemical_ids: &["H2SO4", "NaOH"],
            max_attempts: 3,
            score_multiplier: 1.0,
        },
        LabLevelDef {
            id: "level2",
            title: "Simple Salt Formation",
            description: "Create salt water by mixing HCl and NaOH in equal proportions",
            reaction_id: "acid_base_2",
            chemical_ids: &["HCl", "NaOH"],
            max_attempts: 3,
            score_multiplier: 1.5,
        },
    ]
}
