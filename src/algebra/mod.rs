//! Algebra adventure core - equation generation and answer validation

pub mod equations;

pub use equations::{
    generate_equation, solution_steps, validate_answer, Equation, ANSWER_EPSILON, MAX_DIFFICULTY,
};
