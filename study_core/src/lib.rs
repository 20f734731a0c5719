//! # study_core - StudyLab Learning Engine
//!
//! `study_core` is the logic behind StudyLab, a reference-and-practice app for
//! school science. It holds the calculators, the formula reference, the
//! exercise generator and the progress tracker; front ends (the `studylab`
//! CLI, a GUI) only collect input and render results.
//!
//! ## Design Philosophy
//!
//! - **Stateless engines**: calculators, catalog and exercise generation are pure
//! - **One owner for state**: progress changes only through [`progress::ProgressTracker`]
//! - **Failures are values**: bad user input is a [`CalculatorResult::Failure`], not an error
//! - **Swappable persistence**: the tracker writes through [`storage::KeyValueStore`]
//!
//! ## Quick Start
//!
//! ```rust
//! use study_core::calculators::{self, CalculatorKind};
//! use study_core::session::StudySession;
//! use study_core::storage::MemoryStore;
//!
//! // Stateless evaluation
//! let result = calculators::evaluate(CalculatorKind::QuadraticEquation, &[1.0, -3.0, 2.0]);
//! assert_eq!(result.display(), "2.00 x₁ = 2.00, x₂ = 1.00");
//!
//! // Tracked usage
//! let mut session = StudySession::new(MemoryStore::new());
//! session.open_formula("speed")?;
//! session.calculate(CalculatorKind::Speed, &["120", "4"]);
//! assert_eq!(session.earned_achievements(), vec!["First Formula", "First Calculation"]);
//! # Ok::<(), study_core::errors::StudyError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculators`] - The 19 calculators and their evaluation table
//! - [`catalog`] - Reference formulas grouped by subject
//! - [`exercises`] - Randomised practice problems and answer checking
//! - [`progress`] - Usage counters, persistence and achievements
//! - [`storage`] - Key-value backends (memory, file)
//! - [`session`] - Façade tying the engines to the tracker
//! - [`settings`] - TOML configuration
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod catalog;
pub mod errors;
pub mod exercises;
pub mod progress;
pub mod session;
pub mod settings;
pub mod storage;

// Re-export commonly used types at crate root for convenience
pub use calculators::{CalculatorDefinition, CalculatorKind, CalculatorResult};
pub use catalog::{ReferenceFormula, Subject};
pub use errors::{StudyError, StudyResult};
pub use exercises::{AnswerCheck, Exercise};
pub use progress::{Achievement, ProgressState, ProgressTracker};
pub use session::StudySession;
pub use settings::Settings;
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
