//! Static reference formula data, grouped by subject in display order.

use super::{FormulaVariable as V, ReferenceFormula, Subject};

const PI: V = V::new("π", "Pi", "Mathematical constant, approximately 3.14159");

pub(super) const REFERENCE_FORMULAS: &[ReferenceFormula] = &[
    // ---------------------------------------------------------------------
    // Mathematics
    // ---------------------------------------------------------------------
    ReferenceFormula {
        id: "circle_area",
        subject: Subject::Mathematics,
        name: "Circle Area",
        formula_display: "S = π × r²",
        description: "Formula for calculating the area of a circle by radius",
        variables: &[
            V::new("S", "Area", "Area of the circle"),
            PI,
            V::new("r", "Radius", "Distance from the center of the circle to its edge"),
        ],
    },
    ReferenceFormula {
        id: "rectangle_perimeter",
        subject: Subject::Mathematics,
        name: "Rectangle Perimeter",
        formula_display: "P = 2 × (a + b)",
        description: "Formula for calculating the perimeter of a rectangle",
        variables: &[
            V::new("P", "Perimeter", "Sum of all sides of the rectangle"),
            V::new("a", "Length", "Length of the rectangle"),
            V::new("b", "Width", "Width of the rectangle"),
        ],
    },
    ReferenceFormula {
        id: "quadratic_equation",
        subject: Subject::Mathematics,
        name: "Quadratic Equation",
        formula_display: "ax² + bx + c = 0",
        description: "General form of a quadratic equation",
        variables: &[
            V::new("a", "Coefficient a", "Coefficient of x²"),
            V::new("b", "Coefficient b", "Coefficient of x"),
            V::new("c", "Constant term", "Constant term of the equation"),
        ],
    },
    ReferenceFormula {
        id: "triangle_area",
        subject: Subject::Mathematics,
        name: "Triangle Area",
        formula_display: "S = (a × h) / 2",
        description: "Formula for calculating the area of a triangle",
        variables: &[
            V::new("S", "Area", "Area of the triangle"),
            V::new("a", "Base", "Length of the triangle base"),
            V::new("h", "Height", "Height of the triangle dropped to the base"),
        ],
    },
    ReferenceFormula {
        id: "parallelepiped_volume",
        subject: Subject::Mathematics,
        name: "Parallelepiped Volume",
        formula_display: "V = a × b × c",
        description: "Formula for calculating the volume of a rectangular parallelepiped",
        variables: &[
            V::new("V", "Volume", "Volume of the parallelepiped"),
            V::new("a", "Length", "Length of the parallelepiped"),
            V::new("b", "Width", "Width of the parallelepiped"),
            V::new("c", "Height", "Height of the parallelepiped"),
        ],
    },
    ReferenceFormula {
        id: "pythagorean_theorem",
        subject: Subject::Mathematics,
        name: "Pythagorean Theorem",
        formula_display: "a² + b² = c²",
        description: "Pythagorean theorem for a right triangle",
        variables: &[
            V::new("a", "Leg a", "First leg of the right triangle"),
            V::new("b", "Leg b", "Second leg of the right triangle"),
            V::new("c", "Hypotenuse", "Hypotenuse of the right triangle"),
        ],
    },
    ReferenceFormula {
        id: "trapezoid_area",
        subject: Subject::Mathematics,
        name: "Trapezoid Area",
        formula_display: "S = ((a + b) × h) / 2",
        description: "Formula for calculating the area of a trapezoid",
        variables: &[
            V::new("S", "Area", "Area of the trapezoid"),
            V::new("a", "Base a", "First base of the trapezoid"),
            V::new("b", "Base b", "Second base of the trapezoid"),
            V::new("h", "Height", "Height of the trapezoid"),
        ],
    },
    ReferenceFormula {
        id: "cylinder_volume",
        subject: Subject::Mathematics,
        name: "Cylinder Volume",
        formula_display: "V = π × r² × h",
        description: "Formula for calculating the volume of a cylinder",
        variables: &[
            V::new("V", "Volume", "Volume of the cylinder"),
            PI,
            V::new("r", "Radius", "Radius of the cylinder base"),
            V::new("h", "Height", "Height of the cylinder"),
        ],
    },
    ReferenceFormula {
        id: "sphere_surface_area",
        subject: Subject::Mathematics,
        name: "Sphere Surface Area",
        formula_display: "S = 4 × π × r²",
        description: "Formula for calculating the surface area of a sphere",
        variables: &[
            V::new("S", "Area", "Surface area of the sphere"),
            PI,
            V::new("r", "Radius", "Radius of the sphere"),
        ],
    },
    // ---------------------------------------------------------------------
    // Physics
    // ---------------------------------------------------------------------
    ReferenceFormula {
        id: "speed",
        subject: Subject::Physics,
        name: "Speed",
        formula_display: "v = s / t",
        description: "Formula for calculating speed in uniform motion",
        variables: &[
            V::new("v", "Speed", "Speed of motion, measured in m/s"),
            V::new("s", "Distance", "Distance traveled, measured in meters"),
            V::new("t", "Time", "Time of motion, measured in seconds"),
        ],
    },
    ReferenceFormula {
        id: "force",
        subject: Subject::Physics,
        name: "Force",
        formula_display: "F = m × a",
        description: "Newton's second law: force equals mass times acceleration",
        variables: &[
            V::new("F", "Force", "Force, measured in Newtons (N)"),
            V::new("m", "Mass", "Body mass, measured in kilograms (kg)"),
            V::new("a", "Acceleration", "Acceleration, measured in m/s²"),
        ],
    },
    ReferenceFormula {
        id: "kinetic_energy",
        subject: Subject::Physics,
        name: "Kinetic Energy",
        formula_display: "E = (m × v²) / 2",
        description: "Formula for calculating the kinetic energy of a moving body",
        variables: &[
            V::new("E", "Energy", "Kinetic energy, measured in Joules (J)"),
            V::new("m", "Mass", "Body mass, measured in kilograms (kg)"),
            V::new("v", "Velocity", "Body velocity, measured in m/s"),
        ],
    },
    ReferenceFormula {
        id: "potential_energy",
        subject: Subject::Physics,
        name: "Potential Energy",
        formula_display: "E = m × g × h",
        description: "Formula for calculating the potential energy of a body in a gravitational field",
        variables: &[
            V::new("E", "Energy", "Potential energy, measured in Joules (J)"),
            V::new("m", "Mass", "Body mass, measured in kilograms (kg)"),
            V::new("g", "Gravitational acceleration", "Gravitational acceleration, approximately 9.8 m/s²"),
            V::new("h", "Height", "Height above reference level, measured in meters"),
        ],
    },
    ReferenceFormula {
        id: "momentum",
        subject: Subject::Physics,
        name: "Momentum",
        formula_display: "p = m × v",
        description: "Formula for calculating the momentum of a body",
        variables: &[
            V::new("p", "Momentum", "Body momentum, measured in kg·m/s"),
            V::new("m", "Mass", "Body mass, measured in kilograms (kg)"),
            V::new("v", "Velocity", "Body velocity, measured in m/s"),
        ],
    },
    ReferenceFormula {
        id: "work",
        subject: Subject::Physics,
        name: "Work",
        formula_display: "A = F × s",
        description: "Formula for calculating work done by a force",
        variables: &[
            V::new("A", "Work", "Work done by force, measured in Joules (J)"),
            V::new("F", "Force", "Force, measured in Newtons (N)"),
            V::new("s", "Distance", "Displacement, measured in meters"),
        ],
    },
    ReferenceFormula {
        id: "power",
        subject: Subject::Physics,
        name: "Power",
        formula_display: "P = A / t",
        description: "Formula for calculating power",
        variables: &[
            V::new("P", "Power", "Power, measured in Watts (W)"),
            V::new("A", "Work", "Work, measured in Joules (J)"),
            V::new("t", "Time", "Time to perform work, measured in seconds"),
        ],
    },
    ReferenceFormula {
        id: "density",
        subject: Subject::Physics,
        name: "Density",
        formula_display: "ρ = m / V",
        description: "Formula for calculating the density of a substance",
        variables: &[
            V::new("ρ", "Density", "Substance density, measured in kg/m³"),
            V::new("m", "Mass", "Substance mass, measured in kilograms (kg)"),
            V::new("V", "Volume", "Substance volume, measured in m³"),
        ],
    },
    ReferenceFormula {
        id: "pressure",
        subject: Subject::Physics,
        name: "Pressure",
        formula_display: "p = F / S",
        description: "Formula for calculating pressure",
        variables: &[
            V::new("p", "Pressure", "Pressure, measured in Pascals (Pa)"),
            V::new("F", "Force", "Force, measured in Newtons (N)"),
            V::new("S", "Area", "Surface area, measured in m²"),
        ],
    },
    ReferenceFormula {
        id: "ohms_law",
        subject: Subject::Physics,
        name: "Ohm's Law",
        formula_display: "U = I × R",
        description: "Ohm's law for a circuit section",
        variables: &[
            V::new("U", "Voltage", "Voltage, measured in Volts (V)"),
            V::new("I", "Current", "Current, measured in Amperes (A)"),
            V::new("R", "Resistance", "Resistance, measured in Ohms (Ω)"),
        ],
    },
    // ---------------------------------------------------------------------
    // Chemistry
    // ---------------------------------------------------------------------
    ReferenceFormula {
        id: "amount_of_substance",
        subject: Subject::Chemistry,
        name: "Amount of Substance",
        formula_display: "n = m / M",
        description: "Formula for calculating the amount of substance",
        variables: &[
            V::new("n", "Amount of substance", "Amount of substance, measured in moles (mol)"),
            V::new("m", "Mass", "Substance mass, measured in grams (g)"),
            V::new("M", "Molar mass", "Molar mass of substance, measured in g/mol"),
        ],
    },
    ReferenceFormula {
        id: "solution_concentration",
        subject: Subject::Chemistry,
        name: "Solution Concentration",
        formula_display: "C = n / V",
        description: "Formula for calculating the molar concentration of a solution",
        variables: &[
            V::new("C", "Concentration", "Molar concentration, measured in mol/L"),
            V::new("n", "Amount of substance", "Amount of substance, measured in moles (mol)"),
            V::new("V", "Volume", "Solution volume, measured in liters (L)"),
        ],
    },
    ReferenceFormula {
        id: "mass_fraction",
        subject: Subject::Chemistry,
        name: "Mass Fraction",
        formula_display: "ω = (m₁ / m) × 100%",
        description: "Formula for calculating the mass fraction of a substance in a solution",
        variables: &[
            V::new("ω", "Mass fraction", "Mass fraction of substance, measured in percent (%)"),
            V::new("m₁", "Substance mass", "Mass of dissolved substance, measured in grams (g)"),
            V::new("m", "Solution mass", "Total solution mass, measured in grams (g)"),
        ],
    },
    ReferenceFormula {
        id: "volume_fraction",
        subject: Subject::Chemistry,
        name: "Volume Fraction",
        formula_display: "φ = (V₁ / V) × 100%",
        description: "Formula for calculating the volume fraction of a substance in a mixture",
        variables: &[
            V::new("φ", "Volume fraction", "Volume fraction of substance, measured in percent (%)"),
            V::new("V₁", "Substance volume", "Component volume, measured in liters (L)"),
            V::new("V", "Mixture volume", "Total mixture volume, measured in liters (L)"),
        ],
    },
    ReferenceFormula {
        id: "avogadros_law",
        subject: Subject::Chemistry,
        name: "Avogadro's Law",
        formula_display: "V = n × Vₘ",
        description: "Avogadro's law: equal volumes of gases contain the same number of molecules",
        variables: &[
            V::new("V", "Gas volume", "Gas volume, measured in liters (L)"),
            V::new("n", "Amount of substance", "Amount of substance, measured in moles (mol)"),
            V::new("Vₘ", "Molar volume", "Molar volume of gas at STP, equals 22.4 L/mol"),
        ],
    },
    ReferenceFormula {
        id: "substance_density",
        subject: Subject::Chemistry,
        name: "Substance Density",
        formula_display: "ρ = m / V",
        description: "Formula for calculating the density of a substance",
        variables: &[
            V::new("ρ", "Density", "Substance density, measured in g/cm³ or g/mL"),
            V::new("m", "Mass", "Substance mass, measured in grams (g)"),
            V::new("V", "Volume", "Substance volume, measured in cm³ or mL"),
        ],
    },
    ReferenceFormula {
        id: "product_yield",
        subject: Subject::Chemistry,
        name: "Product Yield",
        formula_display: "η = (mₚ / mₜ) × 100%",
        description: "Formula for calculating the yield of a reaction product",
        variables: &[
            V::new("η", "Product yield", "Product yield, measured in percent (%)"),
            V::new("mₚ", "Practical mass", "Practically obtained product mass, measured in grams (g)"),
            V::new("mₜ", "Theoretical mass", "Theoretically calculated product mass, measured in grams (g)"),
        ],
    },
    ReferenceFormula {
        id: "equivalent_molar_concentration",
        subject: Subject::Chemistry,
        name: "Equivalent Molar Concentration",
        formula_display: "Cₑ = nₑ / V",
        description: "Formula for calculating the equivalent molar concentration",
        variables: &[
            V::new("Cₑ", "Equivalent concentration", "Equivalent molar concentration, measured in mol/L"),
            V::new("nₑ", "Amount of equivalents", "Amount of substance equivalents, measured in mol-equiv"),
            V::new("V", "Volume", "Solution volume, measured in liters (L)"),
        ],
    },
];
