//! # Practice Exercises
//!
//! Randomised exercises generated from a reference formula. Three formula
//! names have bespoke templates (Circle Area, Speed, Force); every other
//! formula falls back to the Circle Area template.
//!
//! `correct_answer` is always the unrounded value. Question and explanation
//! text show parameters to one decimal and the answer to two decimals.
//!
//! ## Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use study_core::catalog;
//! use study_core::exercises::generate_exercise_with;
//!
//! let speed = catalog::find("speed").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let exercise = generate_exercise_with(speed, &mut rng);
//!
//! let s = exercise.given_values["s"];
//! let t = exercise.given_values["t"];
//! assert!((exercise.correct_answer - s / t).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculators::formulas;
use crate::calculators::parse_number;
use crate::catalog::ReferenceFormula;

/// Default absolute tolerance when checking an answer
pub const DEFAULT_ANSWER_TOLERANCE: f64 = 0.01;

/// A generated practice problem. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique per generation
    pub id: Uuid,
    /// Id of the reference formula this exercise was generated from
    pub formula_id: String,
    pub question: String,
    /// Exact answer, not rounded
    pub correct_answer: f64,
    pub explanation: String,
    /// Parameters drawn for this exercise, keyed by symbol
    pub given_values: BTreeMap<String, f64>,
}

/// Generator selected by formula name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseTemplate {
    /// r ∈ [1, 10]
    CircleArea,
    /// s ∈ [10, 100], t ∈ [2, 20]
    Speed,
    /// m ∈ [1, 50], a ∈ [1, 10]
    Force,
}

impl ExerciseTemplate {
    /// Template for a formula name; unknown names use `CircleArea`.
    pub fn for_formula_name(name: &str) -> Self {
        match name {
            "Speed" => ExerciseTemplate::Speed,
            "Force" => ExerciseTemplate::Force,
            _ => ExerciseTemplate::CircleArea,
        }
    }

    fn build<R: Rng + ?Sized>(self, formula_id: &str, rng: &mut R) -> Exercise {
        let mut given_values = BTreeMap::new();

        let (question, correct_answer, explanation) = match self {
            ExerciseTemplate::CircleArea => {
                let r = rng.gen_range(1.0..=10.0);
                let answer = formulas::circle_area(r);
                given_values.insert("r".to_string(), r);
                (
                    format!("Calculate the area of a circle with radius {:.1} m.", r),
                    answer,
                    format!(
                        "We use the formula S = π × r². Substituting: S = π × {:.1}² = {:.2} m²",
                        r, answer
                    ),
                )
            }
            ExerciseTemplate::Speed => {
                let s = rng.gen_range(10.0..=100.0);
                let t = rng.gen_range(2.0..=20.0);
                let answer = formulas::speed(s, t);
                given_values.insert("s".to_string(), s);
                given_values.insert("t".to_string(), t);
                (
                    format!("A body traveled a distance of {:.1} m in {:.1} s. Find the speed.", s, t),
                    answer,
                    format!(
                        "We use the formula v = s / t. Substituting: v = {:.1} / {:.1} = {:.2} m/s",
                        s, t, answer
                    ),
                )
            }
            ExerciseTemplate::Force => {
                let m = rng.gen_range(1.0..=50.0);
                let a = rng.gen_range(1.0..=10.0);
                let answer = formulas::force(m, a);
                given_values.insert("m".to_string(), m);
                given_values.insert("a".to_string(), a);
                (
                    format!(
                        "A body with mass {:.1} kg moves with acceleration {:.1} m/s². Find the force.",
                        m, a
                    ),
                    answer,
                    format!(
                        "We use the formula F = m × a. Substituting: F = {:.1} × {:.1} = {:.2} N",
                        m, a, answer
                    ),
                )
            }
        };

        Exercise {
            id: Uuid::new_v4(),
            formula_id: formula_id.to_string(),
            question,
            correct_answer,
            explanation,
            given_values,
        }
    }
}

/// Generate an exercise for `formula` using the thread-local RNG.
pub fn generate_exercise(formula: &ReferenceFormula) -> Exercise {
    generate_exercise_with(formula, &mut rand::thread_rng())
}

/// Generate an exercise for `formula` drawing parameters from `rng`.
pub fn generate_exercise_with<R: Rng + ?Sized>(formula: &ReferenceFormula, rng: &mut R) -> Exercise {
    let template = ExerciseTemplate::for_formula_name(formula.name);
    info!(formula = formula.name, ?template, "Generating exercise");
    template.build(formula.id, rng)
}

// ============================================================================
// Answer Checking
// ============================================================================

/// Outcome of checking a typed answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnswerCheck {
    Correct { answer: f64, explanation: String },
    Incorrect { answer: f64, expected: f64, explanation: String },
    /// The text was not a number; nothing was checked
    InvalidFormat { input: String },
}

impl AnswerCheck {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerCheck::Correct { .. })
    }
}

/// Check `text` against the exercise answer.
///
/// The answer is correct when `|answer - correct_answer| < tolerance`.
pub fn check_answer(exercise: &Exercise, text: &str, tolerance: f64) -> AnswerCheck {
    let Some(answer) = parse_number(text) else {
        warn!(input = text, "Invalid answer format");
        return AnswerCheck::InvalidFormat { input: text.to_string() };
    };

    if (answer - exercise.correct_answer).abs() < tolerance {
        info!(answer, correct = exercise.correct_answer, "Exercise solved correctly");
        AnswerCheck::Correct {
            answer,
            explanation: exercise.explanation.clone(),
        }
    } else {
        debug!(answer, correct = exercise.correct_answer, "Exercise solved incorrectly");
        AnswerCheck::Incorrect {
            answer,
            expected: exercise.correct_answer,
            explanation: exercise.explanation.clone(),
        }
    }
}
