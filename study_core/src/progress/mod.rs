//! # Progress Tracking
//!
//! [`ProgressTracker`] owns the single [`ProgressState`] record, mediates
//! every mutation and writes the whole record back to its
//! [`KeyValueStore`] after each one.
//!
//! Persistence is best-effort. A record that cannot be read or decoded is
//! replaced by a fresh state, and a failed write is logged while the
//! in-memory state stays authoritative for the running session.
//!
//! ## Example
//!
//! ```rust
//! use study_core::progress::ProgressTracker;
//! use study_core::storage::MemoryStore;
//!
//! let mut tracker = ProgressTracker::new(MemoryStore::new());
//! tracker.mark_formula_viewed("circle_area");
//! tracker.mark_formula_viewed("circle_area");
//! tracker.increment_calculations();
//!
//! assert_eq!(tracker.snapshot().viewed_formulas_count, 1);
//! assert_eq!(tracker.earned_achievements(), vec!["First Formula", "First Calculation"]);
//! ```

pub mod achievements;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::errors::{StudyError, StudyResult};
use crate::storage::KeyValueStore;

pub use achievements::{Achievement, ACHIEVEMENT_RULES};

/// Key of the persisted progress record
pub const PROGRESS_KEY: &str = "study_progress";

/// Cumulative usage counters.
///
/// `viewed_formulas_count` counts first-time views only, so it equals the
/// size of `viewed_formulas` for every state produced by the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    pub viewed_formulas_count: u64,
    pub calculations_count: u64,
    pub solved_exercises_count: u64,
    pub viewed_formulas: BTreeSet<String>,
}

impl ProgressState {
    /// Encode as the JSON record written to the store
    pub fn to_bytes(&self) -> StudyResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| StudyError::serialization(e.to_string()))
    }

    /// Decode a record previously produced by [`to_bytes`](Self::to_bytes)
    pub fn from_bytes(bytes: &[u8]) -> StudyResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| StudyError::serialization(e.to_string()))
    }
}

/// Owner of the progress record.
#[derive(Debug)]
pub struct ProgressTracker<S: KeyValueStore> {
    state: ProgressState,
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    /// Load progress from `store` under [`PROGRESS_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, PROGRESS_KEY)
    }

    /// Load progress from `store` under a custom key.
    ///
    /// Never fails: a missing, unreadable or undecodable record yields a
    /// fresh state.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load_state(&store, &key);
        ProgressTracker { state, store, key }
    }

    /// Record that a formula was opened. Only the first view of an id counts.
    pub fn mark_formula_viewed(&mut self, formula_id: &str) {
        if self.state.viewed_formulas.insert(formula_id.to_string()) {
            self.state.viewed_formulas_count = self.state.viewed_formulas_count.saturating_add(1);
            info!(
                formula_id,
                total = self.state.viewed_formulas_count,
                "Formula viewed"
            );
            self.persist();
        }
    }

    pub fn increment_calculations(&mut self) {
        self.state.calculations_count = self.state.calculations_count.saturating_add(1);
        info!(total = self.state.calculations_count, "Calculation performed");
        self.persist();
    }

    pub fn increment_solved_exercises(&mut self) {
        self.state.solved_exercises_count = self.state.solved_exercises_count.saturating_add(1);
        info!(total = self.state.solved_exercises_count, "Exercise solved");
        self.persist();
    }

    /// Zero every counter and forget viewed formulas.
    pub fn reset(&mut self) {
        warn!("Resetting all progress");
        self.state = ProgressState::default();
        self.persist();
        info!("Progress reset complete");
    }

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> ProgressState {
        self.state.clone()
    }

    /// Every achievement with its earned flag, in display order
    pub fn achievements(&self) -> Vec<Achievement> {
        achievements::evaluate(&self.state)
    }

    /// Names of earned achievements, in display order
    pub fn earned_achievements(&self) -> Vec<&'static str> {
        achievements::earned_names(&self.state)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write the whole state to the store. Failures are logged only.
    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            error!(key = %self.key, error = %e, code = e.error_code(), "Failed to save progress");
        }
    }

    fn try_persist(&mut self) -> StudyResult<()> {
        let bytes = self.state.to_bytes()?;
        self.store.put(&self.key, bytes)?;
        debug!(key = %self.key, "Progress saved");
        Ok(())
    }
}

fn load_state<S: KeyValueStore>(store: &S, key: &str) -> ProgressState {
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            info!(key, "No saved progress, starting fresh");
            return ProgressState::default();
        }
        Err(e) => {
            warn!(key, error = %e, "Could not read saved progress, starting fresh");
            return ProgressState::default();
        }
    };

    match ProgressState::from_bytes(&bytes) {
        Ok(state) => {
            info!(
                key,
                formulas = state.viewed_formulas_count,
                calculations = state.calculations_count,
                exercises = state.solved_exercises_count,
                "Loaded saved progress"
            );
            state
        }
        Err(e) => {
            warn!(key, error = %e, "Saved progress is corrupt, starting fresh");
            ProgressState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Store whose writes always fail
    #[derive(Default)]
    struct BrokenStore {
        puts: usize,
    }

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StudyResult<Option<Vec<u8>>> {
            Err(StudyError::file_error("read", "broken", "disk on fire"))
        }

        fn put(&mut self, _key: &str, _bytes: Vec<u8>) -> StudyResult<()> {
            self.puts += 1;
            Err(StudyError::file_error("write", "broken", "disk on fire"))
        }
    }

    /// Store that counts writes
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        puts: usize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> StudyResult<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn put(&mut self, key: &str, bytes: Vec<u8>) -> StudyResult<()> {
            self.puts += 1;
            self.inner.put(key, bytes)
        }
    }

    #[test]
    fn test_fresh_tracker_is_zeroed() {
        let tracker = ProgressTracker::new(MemoryStore::new());
        assert_eq!(tracker.snapshot(), ProgressState::default());
        assert_eq!(tracker.key(), PROGRESS_KEY);
    }

    #[test]
    fn test_mark_formula_viewed_is_idempotent() {
        let mut tracker = ProgressTracker::new(CountingStore::default());
        tracker.mark_formula_viewed("speed");
        tracker.mark_formula_viewed("speed");

        let state = tracker.snapshot();
        assert_eq!(state.viewed_formulas_count, 1);
        assert_eq!(state.viewed_formulas.len(), 1);
        assert!(state.viewed_formulas.contains("speed"));
        // Repeat view must not trigger a write
        assert_eq!(tracker.store().puts, 1);
    }

    #[test]
    fn test_counters_increment_and_persist() {
        let mut tracker = ProgressTracker::new(CountingStore::default());
        tracker.increment_calculations();
        tracker.increment_calculations();
        tracker.increment_solved_exercises();

        let state = tracker.snapshot();
        assert_eq!(state.calculations_count, 2);
        assert_eq!(state.solved_exercises_count, 1);
        assert_eq!(tracker.store().puts, 3);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = ProgressTracker::new(MemoryStore::new());
        tracker.mark_formula_viewed("force");
        tracker.increment_calculations();
        tracker.increment_solved_exercises();

        tracker.reset();
        assert_eq!(tracker.snapshot(), ProgressState::default());

        let reloaded = ProgressTracker::new(tracker.into_store());
        assert_eq!(reloaded.snapshot(), ProgressState::default());
    }

    #[test]
    fn test_state_survives_reload() {
        let mut tracker = ProgressTracker::new(MemoryStore::new());
        tracker.mark_formula_viewed("ohms_law");
        tracker.mark_formula_viewed("circle_area");
        tracker.increment_calculations();
        let before = tracker.snapshot();

        let reloaded = ProgressTracker::new(tracker.into_store());
        assert_eq!(reloaded.snapshot(), before);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut state = ProgressState {
            viewed_formulas_count: 2,
            calculations_count: 7,
            solved_exercises_count: 3,
            ..ProgressState::default()
        };
        state.viewed_formulas.insert("work".to_string());
        state.viewed_formulas.insert("density".to_string());

        let bytes = state.to_bytes().unwrap();
        assert_eq!(ProgressState::from_bytes(&bytes).unwrap(), state);

        let json = String::from_utf8(bytes).unwrap();
        assert!(json.contains("\"viewed_formulas_count\": 2"));
        assert!(json.contains("\"solved_exercises_count\": 3"));
    }

    #[test]
    fn test_corrupt_record_falls_back_to_fresh() {
        let mut store = MemoryStore::new();
        store.put(PROGRESS_KEY, b"not json at all".to_vec()).unwrap();
        let tracker = ProgressTracker::new(store);
        assert_eq!(tracker.snapshot(), ProgressState::default());
    }

    #[test]
    fn test_schema_mismatch_falls_back_to_fresh() {
        let mut store = MemoryStore::new();
        store.put(PROGRESS_KEY, br#"{"calculations_count": "many"}"#.to_vec()).unwrap();
        let tracker = ProgressTracker::new(store);
        assert_eq!(tracker.snapshot(), ProgressState::default());
    }

    #[test]
    fn test_failed_writes_keep_in_memory_state() {
        let mut tracker = ProgressTracker::new(BrokenStore::default());
        tracker.increment_calculations();
        tracker.mark_formula_viewed("speed");

        assert_eq!(tracker.snapshot().calculations_count, 1);
        assert_eq!(tracker.snapshot().viewed_formulas_count, 1);
        assert_eq!(tracker.store().puts, 2);
    }

    #[test]
    fn test_counters_saturate_at_max() {
        let mut store = MemoryStore::new();
        let saved = format!(
            r#"{{"viewed_formulas_count":{max},"calculations_count":{max},"solved_exercises_count":{max},"viewed_formulas":[]}}"#,
            max = u64::MAX
        );
        store.put(PROGRESS_KEY, saved.into_bytes()).unwrap();

        let mut tracker = ProgressTracker::new(store);
        assert_eq!(tracker.snapshot().calculations_count, u64::MAX);

        tracker.increment_calculations();
        tracker.increment_solved_exercises();
        tracker.mark_formula_viewed("speed");

        let state = tracker.snapshot();
        assert_eq!(state.calculations_count, u64::MAX);
        assert_eq!(state.solved_exercises_count, u64::MAX);
        assert_eq!(state.viewed_formulas_count, u64::MAX);
        assert!(state.viewed_formulas.contains("speed"));
    }

    #[test]
    fn test_custom_key() {
        let mut tracker = ProgressTracker::with_key(MemoryStore::new(), "profile-2");
        tracker.increment_solved_exercises();
        let store = tracker.into_store();
        assert!(store.get("profile-2").unwrap().is_some());
        assert!(store.get(PROGRESS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_achievements_follow_counters() {
        let mut tracker = ProgressTracker::new(MemoryStore::new());
        assert!(tracker.earned_achievements().is_empty());

        tracker.increment_solved_exercises();
        assert_eq!(tracker.earned_achievements(), vec!["First Exercise"]);
        assert_eq!(tracker.achievements().len(), ACHIEVEMENT_RULES.len());
    }
}
