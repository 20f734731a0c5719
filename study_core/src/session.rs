//! # Study Session
//!
//! [`StudySession`] connects the stateless catalogs to the progress tracker:
//! opening a formula marks it viewed, a successful calculation and a correct
//! answer bump their counters. Front ends call into a session and never
//! touch the tracker directly.
//!
//! ## Example
//!
//! ```rust
//! use study_core::calculators::CalculatorKind;
//! use study_core::session::StudySession;
//! use study_core::storage::MemoryStore;
//!
//! let mut session = StudySession::new(MemoryStore::new());
//!
//! let result = session.calculate(CalculatorKind::Speed, &["100", "20"]);
//! assert_eq!(result.display(), "5.00 m/s");
//!
//! let failed = session.calculate(CalculatorKind::Speed, &["100", "0"]);
//! assert_eq!(failed.display(), "Time cannot be zero");
//!
//! assert_eq!(session.progress().calculations_count, 1);
//! ```

use rand::Rng;
use tracing::{debug, warn};

use crate::calculators::{parse_inputs, CalculatorKind, CalculatorResult};
use crate::catalog::{self, ReferenceFormula};
use crate::errors::{StudyError, StudyResult};
use crate::exercises::{self, AnswerCheck, Exercise, DEFAULT_ANSWER_TOLERANCE};
use crate::progress::{Achievement, ProgressState, ProgressTracker};
use crate::settings::Settings;
use crate::storage::KeyValueStore;

#[cfg(not(target_arch = "wasm32"))]
use crate::storage::FileStore;

#[derive(Debug)]
pub struct StudySession<S: KeyValueStore> {
    tracker: ProgressTracker<S>,
    answer_tolerance: f64,
}

#[cfg(not(target_arch = "wasm32"))]
impl StudySession<FileStore> {
    /// Open the file store named by `settings` and load progress from it.
    pub fn open(settings: &Settings) -> StudyResult<Self> {
        let store = settings.open_store()?;
        Ok(Self::with_settings(store, settings))
    }
}

impl<S: KeyValueStore> StudySession<S> {
    /// Session over `store` with default key and tolerance.
    pub fn new(store: S) -> Self {
        StudySession {
            tracker: ProgressTracker::new(store),
            answer_tolerance: DEFAULT_ANSWER_TOLERANCE,
        }
    }

    /// Session over `store` using the key and tolerance from `settings`.
    pub fn with_settings(store: S, settings: &Settings) -> Self {
        StudySession {
            tracker: ProgressTracker::with_key(store, settings.progress_key.clone()),
            answer_tolerance: settings.answer_tolerance,
        }
    }

    /// Look a formula up by id and mark it viewed.
    pub fn open_formula(&mut self, formula_id: &str) -> StudyResult<&'static ReferenceFormula> {
        let formula = catalog::find(formula_id).ok_or_else(|| StudyError::formula_not_found(formula_id))?;
        self.tracker.mark_formula_viewed(formula.id);
        Ok(formula)
    }

    /// Parse raw field text and evaluate. Only a success is counted.
    pub fn calculate(&mut self, kind: CalculatorKind, fields: &[&str]) -> CalculatorResult {
        let result = match parse_inputs(kind, fields) {
            Ok(values) => kind.definition().evaluate(&values),
            Err(failure) => failure,
        };

        match &result {
            CalculatorResult::Success { value, unit_or_label } => {
                debug!(calculator = kind.slug(), value, unit_or_label = %unit_or_label, "Calculation succeeded");
                self.tracker.increment_calculations();
            }
            CalculatorResult::Failure { message } => {
                warn!(calculator = kind.slug(), message = %message, "Calculation error");
            }
        }
        result
    }

    /// Generate an exercise for the formula with `formula_id`.
    pub fn new_exercise(&self, formula_id: &str) -> StudyResult<Exercise> {
        self.new_exercise_with(formula_id, &mut rand::thread_rng())
    }

    /// Like [`new_exercise`](Self::new_exercise) with an explicit RNG.
    pub fn new_exercise_with<R: Rng + ?Sized>(&self, formula_id: &str, rng: &mut R) -> StudyResult<Exercise> {
        let formula = catalog::find(formula_id).ok_or_else(|| StudyError::formula_not_found(formula_id))?;
        Ok(exercises::generate_exercise_with(formula, rng))
    }

    /// Check an answer. Only a correct answer is counted.
    pub fn submit_answer(&mut self, exercise: &Exercise, text: &str) -> AnswerCheck {
        let check = exercises::check_answer(exercise, text, self.answer_tolerance);
        if check.is_correct() {
            self.tracker.increment_solved_exercises();
        }
        check
    }

    pub fn reset_progress(&mut self) {
        self.tracker.reset();
    }

    pub fn progress(&self) -> ProgressState {
        self.tracker.snapshot()
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        self.tracker.achievements()
    }

    pub fn earned_achievements(&self) -> Vec<&'static str> {
        self.tracker.earned_achievements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn session() -> StudySession<MemoryStore> {
        StudySession::new(MemoryStore::new())
    }

    #[test]
    fn test_open_formula_marks_viewed_once() {
        let mut session = session();
        let formula = session.open_formula("ohms_law").unwrap();
        assert_eq!(formula.name, "Ohm's Law");
        session.open_formula("ohms_law").unwrap();

        let progress = session.progress();
        assert_eq!(progress.viewed_formulas_count, 1);
        assert!(progress.viewed_formulas.contains("ohms_law"));
    }

    #[test]
    fn test_open_unknown_formula() {
        let mut session = session();
        let err = session.open_formula("perpetual_motion").unwrap_err();
        assert_eq!(err, StudyError::formula_not_found("perpetual_motion"));
        assert_eq!(session.progress().viewed_formulas_count, 0);
    }

    #[test]
    fn test_calculate_counts_only_successes() {
        let mut session = session();

        assert!(session.calculate(CalculatorKind::Force, &["2", "3"]).is_success());
        assert!(!session.calculate(CalculatorKind::Force, &["2", ""]).is_success());
        assert!(!session.calculate(CalculatorKind::Force, &["2"]).is_success());
        assert!(!session.calculate(CalculatorKind::QuadraticEquation, &["1", "0", "1"]).is_success());

        assert_eq!(session.progress().calculations_count, 1);
        assert_eq!(session.earned_achievements(), vec!["First Calculation"]);
    }

    #[test]
    fn test_calculate_accepts_comma_decimals() {
        let mut session = session();
        let result = session.calculate(CalculatorKind::Density, &["7,5", "2,5"]);
        assert_eq!(result.display(), "3.00 kg/m³");
    }

    #[test]
    fn test_submit_answer_counts_only_correct() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(3);
        let exercise = session.new_exercise_with("force", &mut rng).unwrap();

        let exact = format!("{}", exercise.correct_answer);
        let wrong = format!("{}", exercise.correct_answer + 1.0);

        assert!(matches!(session.submit_answer(&exercise, "abc"), AnswerCheck::InvalidFormat { .. }));
        assert!(!session.submit_answer(&exercise, &wrong).is_correct());
        assert!(session.submit_answer(&exercise, &exact).is_correct());

        assert_eq!(session.progress().solved_exercises_count, 1);
    }

    #[test]
    fn test_new_exercise_unknown_formula() {
        let session = session();
        assert!(session.new_exercise("nope").is_err());
        assert_eq!(session.new_exercise("speed").unwrap().formula_id, "speed");
    }

    #[test]
    fn test_tolerance_from_settings() {
        let settings = Settings {
            answer_tolerance: 1.0,
            ..Settings::default()
        };
        let mut session = StudySession::with_settings(MemoryStore::new(), &settings);
        let exercise = session.new_exercise("circle_area").unwrap();
        let close = format!("{}", exercise.correct_answer + 0.5);
        assert!(session.submit_answer(&exercise, &close).is_correct());
    }

    #[test]
    fn test_reset_progress() {
        let mut session = session();
        session.open_formula("speed").unwrap();
        session.calculate(CalculatorKind::Speed, &["10", "2"]);
        session.reset_progress();
        assert_eq!(session.progress(), ProgressState::default());
        assert!(session.achievements().iter().all(|a| !a.is_earned));
    }

    #[test]
    fn test_file_backed_session_survives_restart() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            data_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };

        {
            let mut session = StudySession::open(&settings).unwrap();
            session.open_formula("circle_area").unwrap();
            session.calculate(CalculatorKind::CircleArea, &["2"]);
        }

        let session = StudySession::open(&settings).unwrap();
        let progress = session.progress();
        assert_eq!(progress.viewed_formulas_count, 1);
        assert_eq!(progress.calculations_count, 1);
        assert!(dir.path().join("study_progress.json").exists());
    }
}
