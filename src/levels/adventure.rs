//! Adventure map levels for the algebra mini-game

use crate::algebra::{generate_equation, Equation};
use crate::rng::GameRng;

/// An adventure level definition with metadata and equation recipe
pub struct AdventureLevelDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub reward: &'static str,
    pub story_text: &'static str,
    /// Difficulty tier of each equation in this level, in order
    pub equation_difficulties: &'static [u8],
}

/// All adventure levels, in play order
pub fn adventure_levels() -> Vec<AdventureLevelDef> {
    vec![
        AdventureLevelDef {
            id: "dungeon-entrance",
            name: "The Dungeon Entrance",
            description: "A mysterious door blocks your path. Solve the magical equation to unlock it.",
            reward: "Ancient Key",
            story_text: "You stand before an ancient stone door covered in glowing runes. The magic responds to mathematical truth...",
            equation_difficulties: &[1, 1],
        },
        AdventureLevelDef {
            id: "treasure-chamber",
            name: "The First Treasure Chamber",
            description: "Golden chests await, but each requires solving an equation to open.",
            reward: "Magic Scroll",
            story_text: "The chamber gleams with golden light. Three treasure chests pulse with magical energy, each sealed with a mathematical lock.",
            equation_difficulties: &[2, 2, 1],
        },
        AdventureLevelDef {
            id: "bridge-puzzle",
            name: "The Bridge of Variables",
            description: "A mystical bridge appears only when you solve the guardian's riddles.",
            reward: "Crystal of Power",
            story_text: "Before you lies a chasm spanned by shimmering magical energy. The bridge guardian speaks: \"Answer my riddles to cross.\"",
            equation_difficulties: &[3, 3],
        },
        AdventureLevelDef {
            id: "dragons-lair",
            name: "The Dragon's Mathematical Lair",
            description: "Face the ancient dragon in a battle of wits and equations.",
            reward: "Dragon Scale Shield",
            story_text: "The dragon raises its mighty head, eyes glowing with ancient wisdom. \"Prove your mathematical prowess, young adventurer!\"",
            equation_difficulties: &[4, 4, 3],
        },
        AdventureLevelDef {
            id: "final-sanctuary",
            name: "The Ultimate Sanctuary",
            description: "The final challenge awaits. Master the most complex equations to claim victory.",
            reward: "Crown of Mathematical Mastery",
            story_text: "At the heart of the dungeon lies the Ultimate Sanctuary, where only the most skilled mathematicians may enter...",
            equation_difficulties: &[5, 5, 4, 4],
        },
    ]
}

/// Generate the equation set for a level from its difficulty recipe
pub fn build_level_equations<R: GameRng + ?Sized>(
    def: &AdventureLevelDef,
    rng: &mut R,
) -> Vec<Equation> {
    let equations: Vec<Equation> = def
        .equation_difficulties
        .iter()
        .map(|&difficulty| generate_equation(difficulty, rng))
        .collect();

    log::info!(
        "built {} equations for level {}",
        equations.len(),
        def.id
    );
    equations
}
