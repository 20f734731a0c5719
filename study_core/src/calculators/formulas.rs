//! # Closed-Form Formulas
//!
//! One pure function per calculator kind. These functions do no validation:
//! arity checks and divisor guards live in the per-kind evaluators in
//! [`super`], which decide what counts as a user-facing failure.
//!
//! ## Units
//!
//! All physics formulas assume SI base units (m, s, kg, N, J, W, Pa, V, A).
//! Geometry formulas are unit-agnostic but are labelled in metres.

use std::f64::consts::PI;

/// Standard gravity used by the potential energy formula (m/s²)
pub const GRAVITY: f64 = 9.8;

// =============================================================================
// MECHANICS
// =============================================================================

/// Average speed of uniform motion
///
/// # Formula
/// v = s / t
#[inline]
pub fn speed(distance: f64, time: f64) -> f64 {
    distance / time
}

/// Newton's second law
///
/// # Formula
/// F = m × a
#[inline]
pub fn force(mass: f64, acceleration: f64) -> f64 {
    mass * acceleration
}

/// Kinetic energy of a moving body
///
/// # Formula
/// E = (m × v²) / 2
#[inline]
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    (mass * velocity * velocity) / 2.0
}

/// Potential energy in a uniform gravitational field
///
/// # Formula
/// E = m × g × h, with g = 9.8 m/s²
#[inline]
pub fn potential_energy(mass: f64, height: f64) -> f64 {
    mass * GRAVITY * height
}

/// Linear momentum
///
/// # Formula
/// p = m × v
#[inline]
pub fn momentum(mass: f64, velocity: f64) -> f64 {
    mass * velocity
}

/// Work done by a constant force along the displacement
///
/// # Formula
/// A = F × s
#[inline]
pub fn work(force: f64, distance: f64) -> f64 {
    force * distance
}

/// Average power
///
/// # Formula
/// P = A / t
#[inline]
pub fn power(work: f64, time: f64) -> f64 {
    work / time
}

/// Density of a substance
///
/// # Formula
/// ρ = m / V
#[inline]
pub fn density(mass: f64, volume: f64) -> f64 {
    mass / volume
}

/// Pressure exerted by a force over an area
///
/// # Formula
/// p = F / S
#[inline]
pub fn pressure(force: f64, area: f64) -> f64 {
    force / area
}

/// Resistance from Ohm's law, R = U / I
#[inline]
pub fn resistance(voltage: f64, current: f64) -> f64 {
    voltage / current
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Area of a circle
///
/// # Formula
/// S = π × r²
///
/// # Example
/// ```rust
/// use study_core::calculators::formulas::circle_area;
///
/// let area = circle_area(2.0);
/// assert!((area - 12.566_370_614_359_172).abs() < 1e-9);
/// ```
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Volume of a rectangular box
///
/// # Formula
/// V = a × b × h
#[inline]
pub fn box_volume(length: f64, width: f64, height: f64) -> f64 {
    length * width * height
}

#[inline]
pub fn triangle_area(base: f64, height: f64) -> f64 {
    (base * height) / 2.0
}

#[inline]
pub fn rectangle_perimeter(length: f64, width: f64) -> f64 {
    2.0 * (length + width)
}

/// Volume of a right circular cylinder
///
/// # Formula
/// V = π × r² × h
#[inline]
pub fn cylinder_volume(radius: f64, height: f64) -> f64 {
    PI * radius * radius * height
}

/// Surface area of a sphere
///
/// # Formula
/// S = 4 × π × r²
#[inline]
pub fn sphere_surface_area(radius: f64) -> f64 {
    4.0 * PI * radius * radius
}

#[inline]
pub fn trapezoid_area(base_a: f64, base_b: f64, height: f64) -> f64 {
    ((base_a + base_b) * height) / 2.0
}

/// Hypotenuse of a right triangle
///
/// # Formula
/// c = √(a² + b²)
#[inline]
pub fn hypotenuse(leg_a: f64, leg_b: f64) -> f64 {
    (leg_a * leg_a + leg_b * leg_b).sqrt()
}

// =============================================================================
// ALGEBRA
// =============================================================================

/// Real roots of ax² + bx + c = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// D < 0
    None,
    /// D = 0
    One(f64),
    /// D > 0, ordered as (−b + √D) / 2a then (−b − √D) / 2a
    Two(f64, f64),
}

/// Discriminant D = b² − 4ac
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve ax² + bx + c = 0 over the reals.
///
/// The caller must ensure `a != 0`.
///
/// # Example
/// ```rust
/// use study_core::calculators::formulas::{quadratic_roots, QuadraticRoots};
///
/// assert_eq!(quadratic_roots(1.0, -3.0, 2.0), QuadraticRoots::Two(2.0, 1.0));
/// assert_eq!(quadratic_roots(1.0, 2.0, 1.0), QuadraticRoots::One(-1.0));
/// assert_eq!(quadratic_roots(1.0, 0.0, 1.0), QuadraticRoots::None);
/// ```
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> QuadraticRoots {
    let d = discriminant(a, b, c);
    if d < 0.0 {
        QuadraticRoots::None
    } else if d == 0.0 {
        QuadraticRoots::One(-b / (2.0 * a))
    } else {
        let sqrt_d = d.sqrt();
        QuadraticRoots::Two((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_mechanics() {
        assert!((speed(100.0, 20.0) - 5.0).abs() < TOL);
        assert!((force(10.0, 9.8) - 98.0).abs() < TOL);
        assert!((kinetic_energy(2.0, 3.0) - 9.0).abs() < TOL);
        assert!((potential_energy(2.0, 10.0) - 196.0).abs() < TOL);
        assert!((momentum(3.0, 4.0) - 12.0).abs() < TOL);
        assert!((work(5.0, 4.0) - 20.0).abs() < TOL);
        assert!((power(100.0, 4.0) - 25.0).abs() < TOL);
    }

    #[test]
    fn test_geometry() {
        assert!((circle_area(1.0) - PI).abs() < TOL);
        assert!((box_volume(2.0, 3.0, 4.0) - 24.0).abs() < TOL);
        assert!((triangle_area(6.0, 4.0) - 12.0).abs() < TOL);
        assert!((rectangle_perimeter(3.0, 4.0) - 14.0).abs() < TOL);
        assert!((cylinder_volume(1.0, 2.0) - 2.0 * PI).abs() < TOL);
        assert!((sphere_surface_area(1.0) - 4.0 * PI).abs() < TOL);
        assert!((trapezoid_area(3.0, 5.0, 2.0) - 8.0).abs() < TOL);
        assert!((hypotenuse(3.0, 4.0) - 5.0).abs() < TOL);
    }

    #[test]
    fn test_unguarded_division_passes_through_infinity() {
        assert!(resistance(12.0, 0.0).is_infinite());
        assert!(resistance(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_quadratic_root_ordering() {
        // Negative leading coefficient flips which root is larger
        match quadratic_roots(-1.0, 3.0, -2.0) {
            QuadraticRoots::Two(x1, x2) => {
                assert!((x1 - 1.0).abs() < TOL);
                assert!((x2 - 2.0).abs() < TOL);
            }
            other => panic!("expected two roots, got {:?}", other),
        }
    }
}
