//! Achievement rule table.
//!
//! Achievements are never stored. Each read evaluates every rule against the
//! current counters, so the result is always consistent with `ProgressState`.

use serde::Serialize;

use super::ProgressState;

/// Minimum counter values for a rule. A zero threshold is always met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub formulas: u64,
    pub calculations: u64,
    pub exercises: u64,
}

impl Requirement {
    const fn formulas(n: u64) -> Self {
        Self::all(n, 0, 0)
    }

    const fn calculations(n: u64) -> Self {
        Self::all(0, n, 0)
    }

    const fn exercises(n: u64) -> Self {
        Self::all(0, 0, n)
    }

    const fn all(formulas: u64, calculations: u64, exercises: u64) -> Self {
        Self {
            formulas,
            calculations,
            exercises,
        }
    }

    pub fn is_met(&self, state: &ProgressState) -> bool {
        state.viewed_formulas_count >= self.formulas
            && state.calculations_count >= self.calculations
            && state.solved_exercises_count >= self.exercises
    }
}

/// A static achievement rule.
#[derive(Debug, Clone, Copy)]
pub struct AchievementRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: Requirement,
}

const fn rule(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    requirement: Requirement,
) -> AchievementRule {
    AchievementRule {
        id,
        name,
        description,
        requirement,
    }
}

/// Every achievement in display order.
pub const ACHIEVEMENT_RULES: &[AchievementRule] = &[
    // Formula milestones
    rule("first_formula", "First Formula", "View your first formula", Requirement::formulas(1)),
    rule("curious", "Curious", "View 5 formulas", Requirement::formulas(5)),
    rule("formula_expert", "Formula Expert", "View 10 formulas", Requirement::formulas(10)),
    rule("erudite", "Erudite", "View 20 formulas", Requirement::formulas(20)),
    rule("formula_master", "Formula Master", "View 30 formulas", Requirement::formulas(30)),
    rule("formula_legend", "Formula Legend", "View 50 formulas", Requirement::formulas(50)),
    // Calculation milestones
    rule(
        "first_calculation",
        "First Calculation",
        "Perform your first calculation",
        Requirement::calculations(1),
    ),
    rule("beginner_calculator", "Beginner Calculator", "Perform 5 calculations", Requirement::calculations(5)),
    rule("active_calculator", "Active Calculator", "Perform 10 calculations", Requirement::calculations(10)),
    rule("calculation_master", "Calculation Master", "Perform 20 calculations", Requirement::calculations(20)),
    rule(
        "calculation_virtuoso",
        "Calculation Virtuoso",
        "Perform 50 calculations",
        Requirement::calculations(50),
    ),
    rule("calculation_genius", "Calculation Genius", "Perform 100 calculations", Requirement::calculations(100)),
    // Exercise milestones
    rule("first_exercise", "First Exercise", "Solve your first exercise", Requirement::exercises(1)),
    rule("beginner_solver", "Beginner Solver", "Solve 5 exercises", Requirement::exercises(5)),
    rule("experienced_solver", "Experienced Solver", "Solve 10 exercises", Requirement::exercises(10)),
    rule("solver", "Solver", "Solve 15 exercises", Requirement::exercises(15)),
    rule("exercise_master", "Exercise Master", "Solve 25 exercises", Requirement::exercises(25)),
    rule("great_solver", "Great Solver", "Solve 50 exercises", Requirement::exercises(50)),
    rule("legendary_solver", "Legendary Solver", "Solve 100 exercises", Requirement::exercises(100)),
    // All three counters
    rule(
        "well_rounded",
        "Well-Rounded Student",
        "5 formulas, 10 calculations, 5 exercises",
        Requirement::all(5, 10, 5),
    ),
    rule(
        "universal_knower",
        "Universal Knower",
        "15 formulas, 25 calculations, 15 exercises",
        Requirement::all(15, 25, 15),
    ),
    rule(
        "master_of_all",
        "Master of All Sciences",
        "30 formulas, 50 calculations, 30 exercises",
        Requirement::all(30, 50, 30),
    ),
    rule(
        "absolute_champion",
        "Absolute Champion",
        "50 formulas, 100 calculations, 50 exercises",
        Requirement::all(50, 100, 50),
    ),
    // Pairs
    rule(
        "practitioner",
        "Practitioner",
        "10 calculations and 10 exercises",
        Requirement::all(0, 10, 10),
    ),
    rule(
        "theorist_practitioner",
        "Theorist and Practitioner",
        "20 formulas and 20 exercises",
        Requirement::all(20, 0, 20),
    ),
    rule(
        "tireless_student",
        "Tireless Student",
        "30 calculations and 30 exercises",
        Requirement::all(0, 30, 30),
    ),
];

/// An achievement evaluated against a progress snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub is_earned: bool,
}

/// Evaluate every rule, in display order.
pub fn evaluate(state: &ProgressState) -> Vec<Achievement> {
    ACHIEVEMENT_RULES
        .iter()
        .map(|rule| Achievement {
            id: rule.id,
            name: rule.name,
            description: rule.description,
            is_earned: rule.requirement.is_met(state),
        })
        .collect()
}

/// Names of earned achievements, in display order.
pub fn earned_names(state: &ProgressState) -> Vec<&'static str> {
    ACHIEVEMENT_RULES
        .iter()
        .filter(|rule| rule.requirement.is_met(state))
        .map(|rule| rule.name)
        .collect()
}
