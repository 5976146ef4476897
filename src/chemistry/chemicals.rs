//! Chemical and reaction definitions and registries
//!
//! Static configuration data for the chemistry lab. Reactions pair an
//! expected reactant ratio with the products and result color shown on a
//! successful mix; nothing here is mutated at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A chemical as presented on the lab bench
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chemical {
    pub id: String,
    pub name: String,
    /// Display formula, e.g. `H₂SO₄`
    pub formula: String,
    /// RGB hex color, e.g. `#FFE135`
    pub color: String,
    pub concentration: f64,
    /// Volume in mL
    pub volume: f64,
    pub description: String,
}

/// One side of a reaction equation: a formula with its stoichiometric ratio
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reactant {
    pub formula: String,
    pub ratio: f64,
}

/// Definition of a target reaction between two reactants
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reactants: Vec<Reactant>,
    pub products: Vec<Reactant>,
    /// Expected volume ratio for the two reactants
    pub correct_ratio: [f64; 2],
    /// Color of the product on a successful mix
    pub result_color: String,
}

/// Registry of all stock chemicals
pub struct ChemicalRegistry {
    chemicals: HashMap<String, Chemical>,
}

impl ChemicalRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            chemicals: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Chemical {
            id: "H2SO4".to_string(),
            name: "Sulfuric Acid".to_string(),
            formula: "H₂SO₄".to_string(),
            color: "#FFE135".to_string(), // Pale yellow
            concentration: 1.0,
            volume: 100.0,
            description: "A strong acid used in many industrial processes".to_string(),
        });

        self.register(Chemical {
            id: "NaOH".to_string(),
            name: "Sodium Hydroxide".to_string(),
            formula: "NaOH".to_string(),
            color: "#E3F2FD".to_string(), // Pale blue
            concentration: 1.0,
            volume: 100.0,
            description: "A strong base, also known as caustic soda".to_string(),
        });

        self.register(Chemical {
            id: "HCl".to_string(),
            name: "Hydrochloric Acid".to_string(),
            formula: "HCl".to_string(),
            color: "#FFCDD2".to_string(), // Pale red
            concentration: 1.0,
            volume: 100.0,
            description: "A strong acid found in stomach acid".to_string(),
        });

        self.register(Chemical {
            id: "NH3".to_string(),
            name: "Ammonia".to_string(),
            formula: "NH₃".to_string(),
            color: "#E8F5E8".to_string(), // Pale green
            concentration: 1.0,
            volume: 100.0,
            description: "A weak base with a pungent smell".to_string(),
        });
    }

    fn register(&mut self, chemical: Chemical) {
        self.chemicals.insert(chemical.id.clone(), chemical);
    }

    pub fn get(&self, id: &str) -> Option<&Chemical> {
        self.chemicals.get(id)
    }

    pub fn len(&self) -> usize {
        self.chemicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chemicals.is_empty()
    }
}

impl Default for ChemicalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of all target reactions
pub struct ReactionRegistry {
    reactions: HashMap<String, Reaction>,
}

impl ReactionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            reactions: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Sulfuric acid + sodium hydroxide, 1:2
        self.register(Reaction {
            id: "acid_base_1".to_string(),
            name: "Acid-Base Neutralization".to_string(),
            description: "Sulfuric acid reacts with sodium hydroxide".to_string(),
            reactants: vec![
                Reactant {
                    formula: "H₂SO₄".to_string(),
                    ratio: 1.0,
                },
                Reactant {
                    formula: "NaOH".to_string(),
                    ratio: 2.0,
                },
            ],
            products: vec![
                Reactant {
                    formula: "Na₂SO₄".to_string(),
                    ratio: 1.0,
                },
                Reactant {
                    formula: "H₂O".to_string(),
                    ratio: 2.0,
                },
            ],
            correct_ratio: [1.0, 2.0],
            result_color: "#C8E6C9".to_string(), // Light green for successful neutralization
        });

        // Hydrochloric acid + sodium hydroxide, 1:1
        self.register(Reaction {
            id: "acid_base_2".to_string(),
            name: "Simple Neutralization".to_string(),
            description: "Hydrochloric acid reacts with sodium hydroxide".to_string(),
            reactants: vec![
                Reactant {
                    formula: "HCl".to_string(),
                    ratio: 1.0,
                },
                Reactant {
                    formula: "NaOH".to_string(),
                    ratio: 1.0,
                },
            ],
            products: vec![
                Reactant {
                    formula: "NaCl".to_string(),
                    ratio: 1.0,
                },
                Reactant {
                    formula: "H₂O".to_string(),
                    ratio: 1.0,
                },
            ],
            correct_ratio: [1.0, 1.0],
            result_color: "#E1F5FE".to_string(), // Light blue for salt formation
        });
    }

    fn register(&mut self, reaction: Reaction) {
        self.reactions.insert(reaction.id.clone(), reaction);
    }

    pub fn get(&self, id: &str) -> Option<&Reaction> {
        self.reactions.get(id)
    }

    /// Find a reaction whose reactant list covers both formulas.
    /// Order doesn't matter.
    pub fn find_for_reactants(&self, formula_a: &str, formula_b: &str) -> Option<&Reaction> {
        self.reactions.values().find(|reaction| {
            let has = |formula: &str| reaction.reactants.iter().any(|r| r.formula == formula);
            has(formula_a) && has(formula_b)
        })
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

impl Default for ReactionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
