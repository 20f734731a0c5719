//! # Calculator Engine
//!
//! Registry of the interactive calculators. Each [`CalculatorKind`] maps to a
//! [`CalculatorDefinition`] holding its ordered input schema, a display
//! formula and the evaluation function for that kind.
//!
//! ## Architecture
//!
//! - Type-safe calculator identification via the `CalculatorKind` enum
//! - One evaluation function per kind, selected by an exhaustive `match`
//! - Input failures come back as [`CalculatorResult::Failure`], never as errors
//!
//! ## Usage
//!
//! ```rust
//! use study_core::calculators::{evaluate, CalculatorKind, CalculatorResult};
//!
//! let result = evaluate(CalculatorKind::Speed, &[100.0, 20.0]);
//! assert_eq!(result, CalculatorResult::success(5.0, "m/s"));
//!
//! let result = evaluate(CalculatorKind::Speed, &[100.0, 0.0]);
//! assert_eq!(result, CalculatorResult::failure("Time cannot be zero"));
//! ```

pub mod formulas;
pub mod input;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StudyError;
use formulas::QuadraticRoots;

pub use input::{parse_inputs, parse_number};

/// Failure message for a value count that does not match the calculator arity
pub const INSUFFICIENT_DATA: &str = "Insufficient data";

// ============================================================================
// Input Schema
// ============================================================================

/// One input of a calculator. Order in the definition is argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputField {
    /// Label shown next to the field (e.g., "Distance (s)")
    pub name: &'static str,
    /// Symbol used in the formula (e.g., "s")
    pub symbol: &'static str,
    /// Unit of the value, empty for dimensionless inputs
    pub unit: &'static str,
}

impl InputField {
    pub const fn new(name: &'static str, symbol: &'static str, unit: &'static str) -> Self {
        Self { name, symbol, unit }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Outcome of evaluating a calculator.
///
/// A success carries either a physical unit ("m/s") or, for the quadratic
/// equation, a formatted root label in the same slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculatorResult {
    Success { value: f64, unit_or_label: String },
    Failure { message: String },
}

impl CalculatorResult {
    pub fn success(value: f64, unit_or_label: impl Into<String>) -> Self {
        CalculatorResult::Success {
            value,
            unit_or_label: unit_or_label.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        CalculatorResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CalculatorResult::Success { .. })
    }

    /// Text as presented to the user: the value to two decimals followed by
    /// the unit or label, or the failure message.
    pub fn display(&self) -> String {
        match self {
            CalculatorResult::Success { value, unit_or_label } => {
                format!("{:.2} {}", value, unit_or_label).trim_end().to_string()
            }
            CalculatorResult::Failure { message } => message.clone(),
        }
    }
}

impl fmt::Display for CalculatorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

// ============================================================================
// Calculator Definition
// ============================================================================

type Evaluator = fn(&[f64]) -> CalculatorResult;

/// Everything the UI needs to render and run one calculator.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorDefinition {
    pub kind: CalculatorKind,
    /// Human-readable name (e.g., "Ohm's Law")
    pub name: &'static str,
    /// Ordered input schema
    pub inputs: &'static [InputField],
    /// Formula for display only (e.g., "v = s / t")
    pub formula_display: &'static str,
    evaluator: Evaluator,
}

impl CalculatorDefinition {
    /// Number of values `evaluate` expects
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Evaluate with positional values matching `inputs`.
    ///
    /// A value count that differs from the arity yields
    /// `Failure("Insufficient data")` before any per-kind guard runs.
    pub fn evaluate(&self, values: &[f64]) -> CalculatorResult {
        if values.len() != self.arity() {
            return CalculatorResult::failure(INSUFFICIENT_DATA);
        }
        (self.evaluator)(values)
    }
}

// ============================================================================
// Calculator Kind
// ============================================================================

/// All calculators offered by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    Speed,
    Force,
    CircleArea,
    KineticEnergy,
    Volume,
    QuadraticEquation,
    PotentialEnergy,
    Momentum,
    Work,
    Power,
    Density,
    Pressure,
    OhmsLaw,
    TriangleArea,
    RectanglePerimeter,
    CylinderVolume,
    SphereSurfaceArea,
    TrapezoidArea,
    Pythagorean,
}

/// Every calculator in display order
pub const ALL_CALCULATORS: &[CalculatorKind] = &[
    CalculatorKind::Speed,
    CalculatorKind::Force,
    CalculatorKind::CircleArea,
    CalculatorKind::KineticEnergy,
    CalculatorKind::Volume,
    CalculatorKind::QuadraticEquation,
    CalculatorKind::PotentialEnergy,
    CalculatorKind::Momentum,
    CalculatorKind::Work,
    CalculatorKind::Power,
    CalculatorKind::Density,
    CalculatorKind::Pressure,
    CalculatorKind::OhmsLaw,
    CalculatorKind::TriangleArea,
    CalculatorKind::RectanglePerimeter,
    CalculatorKind::CylinderVolume,
    CalculatorKind::SphereSurfaceArea,
    CalculatorKind::TrapezoidArea,
    CalculatorKind::Pythagorean,
];

const MASS: InputField = InputField::new("Mass (m)", "m", "kg");
const VELOCITY: InputField = InputField::new("Velocity (v)", "v", "m/s");
const TIME: InputField = InputField::new("Time (t)", "t", "s");
const DISTANCE: InputField = InputField::new("Distance (s)", "s", "m");
const RADIUS: InputField = InputField::new("Radius (r)", "r", "m");
const HEIGHT: InputField = InputField::new("Height (h)", "h", "m");
const FORCE: InputField = InputField::new("Force (F)", "F", "N");
const LENGTH: InputField = InputField::new("Length (a)", "a", "m");
const WIDTH: InputField = InputField::new("Width (b)", "b", "m");

const SPEED_INPUTS: &[InputField] = &[DISTANCE, TIME];
const FORCE_INPUTS: &[InputField] = &[MASS, InputField::new("Acceleration (a)", "a", "m/s²")];
const RADIUS_INPUTS: &[InputField] = &[RADIUS];
const MASS_VELOCITY_INPUTS: &[InputField] = &[MASS, VELOCITY];
const VOLUME_INPUTS: &[InputField] = &[LENGTH, WIDTH, HEIGHT];
const QUADRATIC_INPUTS: &[InputField] = &[
    InputField::new("Coefficient a", "a", ""),
    InputField::new("Coefficient b", "b", ""),
    InputField::new("Coefficient c", "c", ""),
];
const POTENTIAL_ENERGY_INPUTS: &[InputField] = &[MASS, HEIGHT];
const WORK_INPUTS: &[InputField] = &[FORCE, DISTANCE];
const POWER_INPUTS: &[InputField] = &[InputField::new("Work (A)", "A", "J"), TIME];
const DENSITY_INPUTS: &[InputField] = &[MASS, InputField::new("Volume (V)", "V", "m³")];
const PRESSURE_INPUTS: &[InputField] = &[FORCE, InputField::new("Area (S)", "S", "m²")];
const OHMS_LAW_INPUTS: &[InputField] = &[
    InputField::new("Voltage (U)", "U", "V"),
    InputField::new("Current (I)", "I", "A"),
];
const TRIANGLE_INPUTS: &[InputField] = &[InputField::new("Base (a)", "a", "m"), HEIGHT];
const RECTANGLE_INPUTS: &[InputField] = &[LENGTH, WIDTH];
const CYLINDER_INPUTS: &[InputField] = &[RADIUS, HEIGHT];
const TRAPEZOID_INPUTS: &[InputField] = &[
    InputField::new("Base a", "a", "m"),
    InputField::new("Base b", "b", "m"),
    HEIGHT,
];
const PYTHAGOREAN_INPUTS: &[InputField] = &[
    InputField::new("Leg a", "a", "m"),
    InputField::new("Leg b", "b", "m"),
];

impl CalculatorKind {
    /// Get the full definition for this calculator
    pub fn definition(&self) -> CalculatorDefinition {
        let (name, inputs, formula_display, evaluator): (&'static str, &'static [InputField], &'static str, Evaluator) =
            match self {
                CalculatorKind::Speed => ("Speed", SPEED_INPUTS, "v = s / t", eval_speed),
                CalculatorKind::Force => ("Force", FORCE_INPUTS, "F = m × a", eval_force),
                CalculatorKind::CircleArea => ("Circle Area", RADIUS_INPUTS, "S = π × r²", eval_circle_area),
                CalculatorKind::KineticEnergy => {
                    ("Kinetic Energy", MASS_VELOCITY_INPUTS, "E = (m × v²) / 2", eval_kinetic_energy)
                }
                CalculatorKind::Volume => ("Volume", VOLUME_INPUTS, "V = a × b × h", eval_volume),
                CalculatorKind::QuadraticEquation => {
                    ("Quadratic Equation", QUADRATIC_INPUTS, "ax² + bx + c = 0", eval_quadratic)
                }
                CalculatorKind::PotentialEnergy => {
                    ("Potential Energy", POTENTIAL_ENERGY_INPUTS, "E = m × g × h", eval_potential_energy)
                }
                CalculatorKind::Momentum => ("Momentum", MASS_VELOCITY_INPUTS, "p = m × v", eval_momentum),
                CalculatorKind::Work => ("Work", WORK_INPUTS, "A = F × s", eval_work),
                CalculatorKind::Power => ("Power", POWER_INPUTS, "P = A / t", eval_power),
                CalculatorKind::Density => ("Density", DENSITY_INPUTS, "ρ = m / V", eval_density),
                CalculatorKind::Pressure => ("Pressure", PRESSURE_INPUTS, "p = F / S", eval_pressure),
                CalculatorKind::OhmsLaw => ("Ohm's Law", OHMS_LAW_INPUTS, "U = I × R", eval_ohms_law),
                CalculatorKind::TriangleArea => {
                    ("Triangle Area", TRIANGLE_INPUTS, "S = (a × h) / 2", eval_triangle_area)
                }
                CalculatorKind::RectanglePerimeter => {
                    ("Rectangle Perimeter", RECTANGLE_INPUTS, "P = 2 × (a + b)", eval_rectangle_perimeter)
                }
                CalculatorKind::CylinderVolume => {
                    ("Cylinder Volume", CYLINDER_INPUTS, "V = π × r² × h", eval_cylinder_volume)
                }
                CalculatorKind::SphereSurfaceArea => {
                    ("Sphere Surface Area", RADIUS_INPUTS, "S = 4 × π × r²", eval_sphere_surface_area)
                }
                CalculatorKind::TrapezoidArea => {
                    ("Trapezoid Area", TRAPEZOID_INPUTS, "S = ((a + b) × h) / 2", eval_trapezoid_area)
                }
                CalculatorKind::Pythagorean => {
                    ("Pythagorean Theorem", PYTHAGOREAN_INPUTS, "a² + b² = c²", eval_pythagorean)
                }
            };

        CalculatorDefinition {
            kind: *self,
            name,
            inputs,
            formula_display,
            evaluator,
        }
    }

    /// Display name (e.g., "Ohm's Law")
    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    /// Stable kebab-case identifier (e.g., "ohms-law")
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::Speed => "speed",
            CalculatorKind::Force => "force",
            CalculatorKind::CircleArea => "circle-area",
            CalculatorKind::KineticEnergy => "kinetic-energy",
            CalculatorKind::Volume => "volume",
            CalculatorKind::QuadraticEquation => "quadratic-equation",
            CalculatorKind::PotentialEnergy => "potential-energy",
            CalculatorKind::Momentum => "momentum",
            CalculatorKind::Work => "work",
            CalculatorKind::Power => "power",
            CalculatorKind::Density => "density",
            CalculatorKind::Pressure => "pressure",
            CalculatorKind::OhmsLaw => "ohms-law",
            CalculatorKind::TriangleArea => "triangle-area",
            CalculatorKind::RectanglePerimeter => "rectangle-perimeter",
            CalculatorKind::CylinderVolume => "cylinder-volume",
            CalculatorKind::SphereSurfaceArea => "sphere-surface-area",
            CalculatorKind::TrapezoidArea => "trapezoid-area",
            CalculatorKind::Pythagorean => "pythagorean",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculatorKind {
    type Err = StudyError;

    /// Accepts the slug or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_CALCULATORS
            .iter()
            .copied()
            .find(|kind| kind.slug().eq_ignore_ascii_case(wanted) || kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StudyError::unknown_calculator(s))
    }
}

/// Definitions of every calculator in display order.
pub fn list() -> Vec<CalculatorDefinition> {
    ALL_CALCULATORS.iter().map(|kind| kind.definition()).collect()
}

/// Evaluate `kind` with positional `values`.
pub fn evaluate(kind: CalculatorKind, values: &[f64]) -> CalculatorResult {
    kind.definition().evaluate(values)
}

// ============================================================================
// Evaluators
// ============================================================================
//
// Each evaluator receives exactly `arity` values. Only the divisions listed in
// the guarded set (speed, power, density, pressure) reject a zero divisor;
// Ohm's law divides unguarded and passes inf/NaN through as a success.

fn eval_speed(v: &[f64]) -> CalculatorResult {
    if v[1] == 0.0 {
        return CalculatorResult::failure("Time cannot be zero");
    }
    CalculatorResult::success(formulas::speed(v[0], v[1]), "m/s")
}

fn eval_force(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::force(v[0], v[1]), "N")
}

fn eval_circle_area(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::circle_area(v[0]), "m²")
}

fn eval_kinetic_energy(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::kinetic_energy(v[0], v[1]), "J")
}

fn eval_volume(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::box_volume(v[0], v[1], v[2]), "m³")
}

fn eval_quadratic(v: &[f64]) -> CalculatorResult {
    let (a, b, c) = (v[0], v[1], v[2]);
    if a == 0.0 {
        return CalculatorResult::failure("Coefficient a cannot be zero");
    }
    match formulas::quadratic_roots(a, b, c) {
        QuadraticRoots::None => CalculatorResult::failure("Negative discriminant, no real roots"),
        QuadraticRoots::One(x) => CalculatorResult::success(x, format!("x = {:.2}", x)),
        // The numeric payload is x₁; the label carries both roots
        QuadraticRoots::Two(x1, x2) => {
            CalculatorResult::success(x1, format!("x₁ = {:.2}, x₂ = {:.2}", x1, x2))
        }
    }
}

fn eval_potential_energy(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::potential_energy(v[0], v[1]), "J")
}

fn eval_momentum(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::momentum(v[0], v[1]), "kg·m/s")
}

fn eval_work(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::work(v[0], v[1]), "J")
}

fn eval_power(v: &[f64]) -> CalculatorResult {
    if v[1] == 0.0 {
        return CalculatorResult::failure("Time cannot be zero");
    }
    CalculatorResult::success(formulas::power(v[0], v[1]), "W")
}

fn eval_density(v: &[f64]) -> CalculatorResult {
    if v[1] == 0.0 {
        return CalculatorResult::failure("Volume cannot be zero");
    }
    CalculatorResult::success(formulas::density(v[0], v[1]), "kg/m³")
}

fn eval_pressure(v: &[f64]) -> CalculatorResult {
    if v[1] == 0.0 {
        return CalculatorResult::failure("Area cannot be zero");
    }
    CalculatorResult::success(formulas::pressure(v[0], v[1]), "Pa")
}

fn eval_ohms_law(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::resistance(v[0], v[1]), "Ω")
}

fn eval_triangle_area(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::triangle_area(v[0], v[1]), "m²")
}

fn eval_rectangle_perimeter(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::rectangle_perimeter(v[0], v[1]), "m")
}

fn eval_cylinder_volume(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::cylinder_volume(v[0], v[1]), "m³")
}

fn eval_sphere_surface_area(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::sphere_surface_area(v[0]), "m²")
}

fn eval_trapezoid_area(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::trapezoid_area(v[0], v[1], v[2]), "m²")
}

fn eval_pythagorean(v: &[f64]) -> CalculatorResult {
    CalculatorResult::success(formulas::hypotenuse(v[0], v[1]), "m")
}

// ============================================================================
// Tests
// ============================================================================
