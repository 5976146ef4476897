//! Mixing evaluation - scoring a two-reactant mix against a target reaction
//!
//! The mix succeeds when the poured volume ratio lands within a ±20% band
//! around the reaction's expected ratio. A successful mix synthesizes the
//! product; a failed mix with known reactants produces an incomplete mixture
//! whose color is the volume-weighted blend of the inputs.

use serde::{Deserialize, Serialize};

use super::chemicals::{Chemical, Reaction};

/// Allowed relative deviation from the expected ratio
pub const RATIO_TOLERANCE: f64 = 0.2;

/// Outcome of a single mixing attempt. Produced fresh per attempt; callers
/// replace the previous result rather than mutating it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixingResult {
    pub success: bool,
    /// Synthesized product, or the incomplete mixture on a ratio miss.
    /// Absent when the chemicals don't react at all.
    pub result_chemical: Option<Chemical>,
    pub feedback: String,
    /// 0-100
    pub score_earned: u32,
    pub is_optimal_ratio: bool,
}

/// Optimal volume split for a reaction's expected ratio
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimalVolumes {
    pub volume_a: f64,
    pub volume_b: f64,
}

/// Evaluate mixing `volume_a` of `chemical_a` with `volume_b` of
/// `chemical_b` against `target`.
///
/// Total function: unknown reactants short-circuit to a zero-score failure
/// before any ratio math, and degenerate volumes (zero, NaN) fall through
/// the failure path with the score clamped to its floor.
pub fn mix_chemicals(
    chemical_a: &Chemical,
    volume_a: f64,
    chemical_b: &Chemical,
    volume_b: f64,
    target: &Reaction,
) -> MixingResult {
    // Both formulas must appear in the target's reactant list
    let reactant_a = target
        .reactants
        .iter()
        .find(|r| r.formula == chemical_a.formula);
    let reactant_b = target
        .reactants
        .iter()
        .find(|r| r.formula == chemical_b.formula);

    let (reactant_a, reactant_b) = match (reactant_a, reactant_b) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return MixingResult {
                success: false,
                result_chemical: None,
                feedback: "These chemicals don't react according to the target reaction!"
                    .to_string(),
                score_earned: 0,
                is_optimal_ratio: false,
            };
        }
    };

    let actual_ratio = volume_a / volume_b;
    let expected_ratio = reactant_a.ratio / reactant_b.ratio;
    let deviation = (actual_ratio - expected_ratio).abs() / expected_ratio;

    let total_volume = volume_a + volume_b;

    if deviation <= RATIO_TOLERANCE {
        // Product formula concatenates the reaction's product formulas
        let product_formula = target
            .products
            .iter()
            .map(|p| p.formula.as_str())
            .collect::<Vec<_>>()
            .join(" + ");

        let result_chemical = Chemical {
            id: "result".to_string(),
            name: product_formula.clone(),
            formula: product_formula,
            color: target.result_color.clone(),
            concentration: 1.0,
            volume: total_volume,
            description: format!("Product of {}", target.name),
        };

        // Within tolerance every mix scores at least 50, scaling to 100
        // as the deviation approaches zero.
        let score = (100.0 * (1.0 - deviation)).floor().max(50.0);

        MixingResult {
            success: true,
            result_chemical: Some(result_chemical),
            feedback: format!("Perfect! You successfully performed {}!", target.name),
            score_earned: score as u32,
            is_optimal_ratio: true,
        }
    } else {
        let mixed_color = blend_colors(&chemical_a.color, &chemical_b.color, volume_a / total_volume);

        let result_chemical = Chemical {
            id: "mixture".to_string(),
            name: "Incomplete Mixture".to_string(),
            formula: format!("{} + {}", chemical_a.formula, chemical_b.formula),
            color: mixed_color,
            concentration: 0.5,
            volume: total_volume,
            description: "The reaction was incomplete due to incorrect ratio".to_string(),
        };

        // The penalty intentionally uses the unnormalized ratio gap,
        // unlike the success-path deviation.
        let penalty = ((actual_ratio - expected_ratio).abs() * 10.0).floor();
        let score = (50.0 - penalty).max(20.0);

        MixingResult {
            success: false,
            result_chemical: Some(result_chemical),
            feedback: format!(
                "Close, but the ratio isn't quite right. Try {:.1}:1 ratio.",
                expected_ratio
            ),
            score_earned: score as u32,
            is_optimal_ratio: false,
        }
    }
}

/// Split `total_volume` across the two reactants proportionally to the
/// reaction's expected ratio. Used for hint text only.
pub fn calculate_optimal_volumes(reaction: &Reaction, total_volume: f64) -> OptimalVolumes {
    let [ratio_a, ratio_b] = reaction.correct_ratio;
    let total = ratio_a + ratio_b;

    OptimalVolumes {
        volume_a: (ratio_a / total) * total_volume,
        volume_b: (ratio_b / total) * total_volume,
    }
}

/// Blend two RGB hex colors, weighting the first by `weight` and the second
/// by `1 - weight`. Boundary weights pass the respective color through
/// unchanged; malformed channel bytes read as 0.
pub fn blend_colors(color_a: &str, color_b: &str, weight: f64) -> String {
    let a = parse_hex_rgb(color_a);
    let b = parse_hex_rgb(color_b);

    let blend = |ca: u8, cb: u8| (ca as f64 * weight + cb as f64 * (1.0 - weight)).round() as u8;

    format!(
        "#{:02x}{:02x}{:02x}",
        blend(a[0], b[0]),
        blend(a[1], b[1]),
        blend(a[2], b[2])
    )
}

fn parse_hex_rgb(color: &str) -> [u8; 3] {
    let hex = color.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i * 2..i * 2 + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    [channel(0), channel(1), channel(2)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::chemicals::{ChemicalRegistry, Reactant, ReactionRegistry};

    /// Reaction expecting A:B at 2:1 (expected ratio 2.0)
    fn two_to_one_reaction() -> Reaction {
        Reaction {
            id: "test".to_string(),
            name: "Test Reaction".to_string(),
            description: "A reacts with B".to_string(),
            reactants: vec![
                Reactant {
                    formula: "A".to_string(),
                    ratio: 2.0,
                },
                Reactant {
                    formula: "B".to_string(),
                    ratio: 1.0,
                },
            ],
            products: vec![Reactant {
                formula: "AB".to_string(),
                ratio: 1.0,
            }],
            correct_ratio: [2.0, 1.0],
            result_color: "#336699".to_string(),
        }
    }

    fn chemical(formula: &str, color: &str) -> Chemical {
        Chemical {
            id: formula.to_string(),
            name: formula.to_string(),
            formula: formula.to_string(),
            color: color.to_string(),
            concentration: 1.0,
            volume: 100.0,
            description: String::new(),
        }
    }

    #[test]
    fn test_exact_ratio_scores_100() {
        let reaction = two_to_one_reaction();
        let a = chemical("A", "#ff0000");
        let b = chemical("B", "#0000ff");

        let result = mix_chemicals(&a, 100.0, &b, 50.0, &reaction);

        assert!(result.success);
        assert!(result.is_optimal_ratio);
        assert_eq!(result.score_earned, 100);

        let product = result.result_chemical.unwrap();
        assert_eq!(product.formula, "AB");
        assert_eq!(product.color, "#336699");
        assert_eq!(product.volume, 150.0);
        assert_eq!(product.concentration, 1.0);
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let reaction = two_to_one_reaction();
        let a = chemical("A", "#ff0000");
        let b = chemical("B", "#0000ff");

        // 120/50 = 2.4, exactly 20% above the expected ratio of 2
        let result = mix_chemicals(&a, 120.0, &b, 50.0, &reaction);

        assert!(result.success);
        assert_eq!(result.score_earned, 80);
    }

    #[test]
    fn test_outside_tolerance_fails() {
        let reaction = two_to_one_reaction();
        let a = chemical("A", "#ff0000");
        let b = chemical("B", "#0000ff");

        // 130/50 = 2.6, 30% above the expected ratio
        let result = mix_chemicals(&a, 130.0, &b, 50.0, &reaction);

        assert!(!result.success);
        assert!(!result.is_optimal_ratio);
        // 50 - floor(0.6 * 10) = 44
        assert_eq!(result.score_earned, 44);

        let mixture = result.result_chemical.unwrap();
        assert_eq!(mixture.name, "Incomplete Mixture");
        assert_eq!(mixture.formula, "A + B");
        assert_eq!(mixture.concentration, 0.5);
        assert_eq!(mixture.volume, 180.0);
    }

    #[test]
    fn test_failure_feedback_states_expected_ratio() {
        let reaction = two_to_one_reaction();
        let a = chemical("A", "#ff0000");
        let b = chemical("B", "#0000ff");

        let result = mix_chemicals(&a, 10.0, &b, 50.0, &reaction);

        assert!(!result.success);
        assert!(result.feedback.contains("2.0:1"));
    }

    #[test]
    fn test_failure_score_floor_is_20() {
        let reaction = two_to_one_reaction();
        let a = chemical("A", "#ff0000");
        let b = chemical("B", "#0000ff");

        // 500/10 = 50, wildly off - penalty clamps at the floor
        let result = mix_chemicals(&a, 500.0, &b, 10.0, &reaction);

        assert!(!result.success);
        assert_eq!(result.score_earned, 20);
    }

    #[test]
    fn test_unknown_reactant_always_fails_with_zero_score() {
        let registry = ReactionRegistry::new();
        let chemicals = ChemicalRegistry::new();

        // HCl against the sulfuric acid reaction
        let reaction = registry.get("acid_base_1").unwrap();
        let hcl = chemicals.get("HCl").unwrap();
        let naoh = chemicals.get("NaOH").unwrap();

        for (va, vb) in [(50.0, 100.0), (1.0, 2.0), (0.0, 0.0)] {
            let result = mix_chemicals(hcl, va, naoh, vb, reaction);
            assert!(!result.success);
            assert_eq!(result.score_earned, 0);
            assert!(result.result_chemical.is_none());
            assert!(result.feedback.contains("don't react"));
        }
    }

    #[test]
    fn test_stock_neutralization_at_optimal_volumes() {
        let registry = ReactionRegistry::new();
        let chemicals = ChemicalRegistry::new();

        let reaction = registry.get("acid_base_1").unwrap();
        let acid = chemicals.get("H2SO4").unwrap();
        let base = chemicals.get("NaOH").unwrap();

        let optimal = calculate_optimal_volumes(reaction, 100.0);
        let result = mix_chemicals(acid, optimal.volume_a, base, optimal.volume_b, reaction);

        assert!(result.success);
        assert!(result.score_earned >= 99);
        assert_eq!(
            result.result_chemical.unwrap().formula,
            "Na₂SO₄ + H₂O"
        );
        assert!(result.feedback.contains("Acid-Base Neutralization"));
    }

    #[test]
    fn test_degenerate_volumes_do_not_panic() {
        let reaction = two_to_one_reaction();
        let a = chemical("A", "#ff0000");
        let b = chemical("B", "#0000ff");

        // Division by zero volume: infinite ratio, clamped failure score
        let result = mix_chemicals(&a, 100.0, &b, 0.0, &reaction);
        assert!(!result.success);
        assert_eq!(result.score_earned, 20);

        // 0/0 volume: NaN ratio, still a well-formed failure
        let result = mix_chemicals(&a, 0.0, &b, 0.0, &reaction);
        assert!(!result.success);
        assert_eq!(result.score_earned, 20);
    }

    #[test]
    fn test_optimal_volumes_split_proportionally() {
        let mut reaction = two_to_one_reaction();
        reaction.correct_ratio = [1.0, 2.0];

        let optimal = calculate_optimal_volumes(&reaction, 90.0);

        assert!((optimal.volume_a - 30.0).abs() < 1e-9);
        assert!((optimal.volume_b - 60.0).abs() < 1e-9);
        assert!((optimal.volume_a + optimal.volume_b - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_blend_boundary_weights_pass_through() {
        assert_eq!(blend_colors("#ff0000", "#00ff00", 1.0), "#ff0000");
        assert_eq!(blend_colors("#ff0000", "#00ff00", 0.0), "#00ff00");
    }

    #[test]
    fn test_blend_midpoint() {
        // Each channel rounds half away from zero: 255/2 -> 128
        assert_eq!(blend_colors("#ff0000", "#0000ff", 0.5), "#800080");
    }

    #[test]
    fn test_blend_commutative_complementary() {
        // Dyadic weights keep 1 - (1 - w) exact in binary floating point
        for w in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(
                blend_colors("#ffe135", "#e3f2fd", w),
                blend_colors("#e3f2fd", "#ffe135", 1.0 - w)
            );
        }
    }

    #[test]
    fn test_blend_tolerates_malformed_hex() {
        // Bad channel bytes read as 0 rather than panicking
        assert_eq!(blend_colors("#zzff00", "#00ff00", 1.0), "#00ff00");
        assert_eq!(blend_colors("#12", "#000000", 1.0), "#120000");
    }
}
