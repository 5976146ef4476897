//! Procedural linear equation generation
//!
//! Every equation is constructed root-first: the answer is drawn before the
//! coefficients, and the displayed right-hand side is derived from it, so the
//! generated expression is always exactly solvable. Five difficulty tiers map
//! to five structural templates, from single-step addition up to distributive
//! equations with the variable on both sides.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// Highest difficulty tier with its own template
pub const MAX_DIFFICULTY: u8 = 5;

/// Tolerance when comparing a candidate answer against the stored root.
/// Wide enough to absorb float rounding in parsed free-text input.
pub const ANSWER_EPSILON: f64 = 0.001;

const ID_LENGTH: usize = 9;
const ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A generated equation with its known root embedded at construction time.
/// Immutable once generated; callers persist it verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    /// Opaque token identifying this equation instance
    pub id: String,
    /// Human-readable expression, e.g. `3x + 5 = 17`
    pub expression: String,
    /// The root the expression was constructed from
    pub answer: f64,
    /// Difficulty tier (1-5)
    pub difficulty: u8,
    /// High-level isolation steps for this tier
    pub hint: Option<String>,
}

/// Generate an equation for the given difficulty tier.
///
/// Difficulties outside 1-5 silently degrade to tier 1; the returned
/// equation records the tier actually used.
pub fn generate_equation<R: GameRng + ?Sized>(difficulty: u8, rng: &mut R) -> Equation {
    match difficulty {
        1 => generate_single_step_additive(rng),
        2 => generate_single_step_multiplicative(rng),
        3 => generate_two_step(rng),
        4 => generate_both_sides(rng),
        5 => generate_distributive(rng),
        other => {
            log::warn!("invalid difficulty {}, falling back to tier 1", other);
            generate_single_step_additive(rng)
        }
    }
}

/// Validate a candidate answer against the equation's stored root.
///
/// Assumes the caller already rejected non-numeric input.
pub fn validate_answer(equation: &Equation, candidate: f64) -> bool {
    (equation.answer - candidate).abs() < ANSWER_EPSILON
}

/// Step-by-step solution text: currently the hint, or a generic
/// isolation instruction when the equation carries none.
pub fn solution_steps(equation: &Equation) -> Vec<String> {
    vec![equation
        .hint
        .clone()
        .unwrap_or_else(|| "Solve for x by isolating the variable.".to_string())]
}

/// Tier 1: `x + a = r` or `x - a = r`
fn generate_single_step_additive<R: GameRng + ?Sized>(rng: &mut R) -> Equation {
    let id = random_id(rng);
    let answer = rng.gen_i64(1, 20);
    let addend = rng.gen_i64(1, 15);

    if rng.gen_bool() {
        let result = answer + addend;
        Equation {
            id,
            expression: format!("x + {} = {}", addend, result),
            answer: answer as f64,
            difficulty: 1,
            hint: Some(format!(
                "To solve x + {} = {}, subtract {} from both sides.",
                addend, result, addend
            )),
        }
    } else {
        let result = answer - addend;
        Equation {
            id,
            expression: format!("x - {} = {}", addend, result),
            answer: answer as f64,
            difficulty: 1,
            hint: Some(format!(
                "To solve x - {} = {}, add {} to both sides.",
                addend, result, addend
            )),
        }
    }
}

/// Tier 2: `cx = r` or `x ÷ c = r`
///
/// The division branch integer-divides the sampled answer by the coefficient
/// and re-derives the actual answer as `quotient × coefficient`, so the
/// displayed quotient is always exact. The returned answer is the re-derived
/// value, which can differ from the sampled one (and can be 0). Downstream
/// validation depends on the corrected value; do not "fix" this.
fn generate_single_step_multiplicative<R: GameRng + ?Sized>(rng: &mut R) -> Equation {
    let id = random_id(rng);
    let answer = rng.gen_i64(1, 10);
    let coefficient = rng.gen_i64(2, 9);

    if rng.gen_bool() {
        let result = answer * coefficient;
        Equation {
            id,
            expression: format!("{}x = {}", coefficient, result),
            answer: answer as f64,
            difficulty: 2,
            hint: Some(format!(
                "To solve {}x = {}, divide both sides by {}.",
                coefficient, result, coefficient
            )),
        }
    } else {
        let quotient = answer / coefficient;
        let actual_answer = quotient * coefficient;
        Equation {
            id,
            expression: format!("x ÷ {} = {}", coefficient, quotient),
            answer: actual_answer as f64,
            difficulty: 2,
            hint: Some(format!(
                "To solve x ÷ {} = {}, multiply both sides by {}.",
                coefficient, quotient, coefficient
            )),
        }
    }
}

/// Tier 3: `cx + k = r` or `cx - k = r`
fn generate_two_step<R: GameRng + ?Sized>(rng: &mut R) -> Equation {
    let id = random_id(rng);
    let answer = rng.gen_i64(1, 15);
    let coefficient = rng.gen_i64(2, 6);
    let constant = rng.gen_i64(1, 20);

    if rng.gen_bool() {
        let result = coefficient * answer + constant;
        Equation {
            id,
            expression: format!("{}x + {} = {}", coefficient, constant, result),
            answer: answer as f64,
            difficulty: 3,
            hint: Some(format!(
                "First subtract {} from both sides, then divide by {}.",
                constant, coefficient
            )),
        }
    } else {
        let result = coefficient * answer - constant;
        Equation {
            id,
            expression: format!("{}x - {} = {}", coefficient, constant, result),
            answer: answer as f64,
            difficulty: 3,
            hint: Some(format!(
                "First add {} to both sides, then divide by {}.",
                constant, coefficient
            )),
        }
    }
}

/// Tier 4: `px + q = sx + t`, with t solved from the chosen root
fn generate_both_sides<R: GameRng + ?Sized>(rng: &mut R) -> Equation {
    let id = random_id(rng);
    let answer = rng.gen_i64(1, 12);
    let left_coeff = rng.gen_i64(2, 5);
    let left_const = rng.gen_i64(1, 15);
    let right_coeff = rng.gen_i64(1, 3);

    let right_const = left_coeff * answer + left_const - right_coeff * answer;

    Equation {
        id,
        expression: format!(
            "{}x + {} = {}x + {}",
            left_coeff, left_const, right_coeff, right_const
        ),
        answer: answer as f64,
        difficulty: 4,
        hint: Some("Move all x terms to one side and constants to the other side.".to_string()),
    }
}

/// Tier 5: `m(x + k) = sx - t`, with t solved from the chosen root.
/// The derived constant can be negative and is formatted as-is.
fn generate_distributive<R: GameRng + ?Sized>(rng: &mut R) -> Equation {
    let id = random_id(rng);
    let answer = rng.gen_i64(1, 8);
    let outer_coeff = rng.gen_i64(2, 4);
    let inner_const = rng.gen_i64(1, 5);
    let right_coeff = rng.gen_i64(2, 6);

    let right_const = outer_coeff * (answer + inner_const) - right_coeff * answer;

    Equation {
        id,
        expression: format!(
            "{}(x + {}) = {}x - {}",
            outer_coeff, inner_const, right_coeff, right_const
        ),
        answer: answer as f64,
        difficulty: 5,
        hint: Some("First distribute, then solve like a regular equation.".to_string()),
    }
}

/// Opaque 9-character base-36 token
fn random_id<R: GameRng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| ID_CHARS[rng.gen_i64(0, ID_CHARS.len() as i64 - 1) as usize] as char)
        .collect()
}
