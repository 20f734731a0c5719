//! # Formula Catalog
//!
//! Static registry of reference formulas grouped by [`Subject`]. Entries are
//! immutable and their ids are stable, so progress records and generated
//! exercises can refer to them across restarts.
//!
//! ## Usage
//!
//! ```rust
//! use study_core::catalog::{self, Subject};
//!
//! let physics = catalog::list_by_subject(Subject::Physics);
//! assert_eq!(physics[0].name, "Speed");
//!
//! let circle = catalog::find("circle_area").unwrap();
//! assert_eq!(circle.formula_display, "S = π × r²");
//! ```

mod formulas;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::StudyError;
use formulas::REFERENCE_FORMULAS;

// ============================================================================
// Subjects
// ============================================================================

/// Grouping tag for reference formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
}

/// Every subject in display order
pub const ALL_SUBJECTS: &[Subject] = &[Subject::Mathematics, Subject::Physics, Subject::Chemistry];

impl Subject {
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Subject {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SUBJECTS
            .iter()
            .copied()
            .find(|subject| subject.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StudyError::invalid_input("subject", s, "Expected mathematics, physics or chemistry"))
    }
}

// ============================================================================
// Reference Formula
// ============================================================================

/// A symbol appearing in a reference formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaVariable {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl FormulaVariable {
    pub const fn new(symbol: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            symbol,
            name,
            description,
        }
    }
}

/// One entry of the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceFormula {
    /// Stable snake_case identifier (e.g., "circle_area")
    pub id: &'static str,
    pub subject: Subject,
    pub name: &'static str,
    /// Formula for display only
    pub formula_display: &'static str,
    pub description: &'static str,
    /// Ordered variable legend
    pub variables: &'static [FormulaVariable],
}

// ============================================================================
// Lookups
// ============================================================================

static BY_ID: Lazy<HashMap<&'static str, &'static ReferenceFormula>> = Lazy::new(|| {
    let index: HashMap<_, _> = REFERENCE_FORMULAS.iter().map(|f| (f.id, f)).collect();
    info!(
        total = REFERENCE_FORMULAS.len(),
        mathematics = count_for(Subject::Mathematics),
        physics = count_for(Subject::Physics),
        chemistry = count_for(Subject::Chemistry),
        "Loaded formula catalog"
    );
    index
});

fn count_for(subject: Subject) -> usize {
    REFERENCE_FORMULAS.iter().filter(|f| f.subject == subject).count()
}

/// The whole catalog in insertion order
pub fn all() -> &'static [ReferenceFormula] {
    REFERENCE_FORMULAS
}

/// Entries for `subject`, insertion order preserved
pub fn list_by_subject(subject: Subject) -> Vec<&'static ReferenceFormula> {
    REFERENCE_FORMULAS.iter().filter(|f| f.subject == subject).collect()
}

/// Look up an entry by its stable id
pub fn find(id: &str) -> Option<&'static ReferenceFormula> {
    BY_ID.get(id).copied()
}

/// Look up an entry by display name, ignoring case
pub fn find_by_name(name: &str) -> Option<&'static ReferenceFormula> {
    REFERENCE_FORMULAS.iter().find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}

// ============================================================================
// Markdown Generation for FORMULAS.md
// ============================================================================

/// Generate a Markdown reference sheet of the whole catalog.
///
/// ```rust
/// use study_core::catalog::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("## Physics"));
/// assert!(markdown.contains("### Ohm's Law"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# StudyLab Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

"#,
    );

    for subject in ALL_SUBJECTS {
        let formulas = list_by_subject(*subject);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", subject.display_name()));

        for formula in formulas {
            output.push_str(&format!("### {}\n\n", formula.name));
            output.push_str(&format!("{}\n\n", formula.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", formula.formula_display));

            if !formula.variables.is_empty() {
                output.push_str("| Symbol | Name | Description |\n");
                output.push_str("|--------|------|-------------|\n");
                for var in formula.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.name, var.description));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Id:** `{}`\n\n---\n\n", formula.id));
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Subjects:** {}\n",
        REFERENCE_FORMULAS.len(),
        ALL_SUBJECTS.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_split() {
        assert_eq!(all().len(), 27);
        assert_eq!(list_by_subject(Subject::Mathematics).len(), 9);
        assert_eq!(list_by_subject(Subject::Physics).len(), 10);
        assert_eq!(list_by_subject(Subject::Chemistry).len(), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), all().len(), "Duplicate formula id in catalog");
    }

    #[test]
    fn test_every_entry_is_complete() {
        for formula in all() {
            assert!(!formula.name.is_empty(), "{} has no name", formula.id);
            assert!(!formula.formula_display.is_empty(), "{} has no formula", formula.id);
            assert!(!formula.description.is_empty(), "{} has no description", formula.id);
            assert!(!formula.variables.is_empty(), "{} has no variables", formula.id);
        }
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let names: Vec<_> = list_by_subject(Subject::Chemistry).iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "Amount of Substance",
                "Solution Concentration",
                "Mass Fraction",
                "Volume Fraction",
                "Avogadro's Law",
                "Substance Density",
                "Product Yield",
                "Equivalent Molar Concentration",
            ]
        );
        assert_eq!(list_by_subject(Subject::Physics)[0].id, "speed");
    }

    #[test]
    fn test_find() {
        assert_eq!(find("ohms_law").map(|f| f.name), Some("Ohm's Law"));
        assert!(find("warp_drive").is_none());
        assert_eq!(find_by_name("circle area").map(|f| f.id), Some("circle_area"));
    }

    #[test]
    fn test_subject_parsing() {
        assert_eq!("physics".parse::<Subject>().unwrap(), Subject::Physics);
        assert_eq!("Chemistry".parse::<Subject>().unwrap(), Subject::Chemistry);
        assert!("biology".parse::<Subject>().is_err());
    }

    #[test]
    fn test_generate_formulas_markdown() {
        let markdown = generate_formulas_markdown();
        assert!(markdown.contains("# StudyLab Formula Reference"));
        assert!(markdown.contains("## Mathematics"));
        assert!(markdown.contains("## Chemistry"));
        assert!(markdown.contains("`S = π × r²`"));
        assert!(markdown.contains("**Total Formulas:** 27"));
    }
}
