//! Persisted adherence tracker.

use std::sync::Arc;

use crate::models::{AdherenceBand, AdherenceScore};
use crate::store::{load_json, save_json, KeyValueStore, StoreResult, FOOD_ADHERENCE_KEY};

/// Percentage added by a single "I ate this" click.
pub const DEFAULT_CLICK_STEP: i64 = 5;

/// Adherence percentages mirrored to durable storage.
///
/// Every mutation writes the full mapping back under
/// [`FOOD_ADHERENCE_KEY`]. The in-memory value is updated even if that
/// write fails.
pub struct AdherenceTracker {
    store: Arc<dyn KeyValueStore>,
    scores: AdherenceScore,
    click_step: i64,
}

impl AdherenceTracker {
    /// Load the persisted mapping. Absent or corrupt data starts empty.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let scores: AdherenceScore =
            load_json(store.as_ref(), FOOD_ADHERENCE_KEY).unwrap_or_default();
        tracing::debug!(entries = scores.len(), "adherence loaded");
        Self {
            store,
            scores,
            click_step: DEFAULT_CLICK_STEP,
        }
    }

    /// Override the click increment.
    pub fn with_click_step(mut self, step: i64) -> Self {
        self.click_step = step;
        self
    }

    /// Current percentage for `key`, 0 when never set.
    pub fn get(&self, key: &str) -> u8 {
        self.scores.value(key)
    }

    pub fn band(&self, key: &str) -> AdherenceBand {
        AdherenceBand::from_percent(self.get(key))
    }

    pub fn scores(&self) -> &AdherenceScore {
        &self.scores
    }

    /// Overwrite `key` with `value` clamped to `[0, 100]` and persist.
    pub fn set(&mut self, key: &str, value: i64) -> StoreResult<u8> {
        let stored = self.scores.set(key, value);
        tracing::debug!(key, value, stored, "adherence set");
        self.persist()?;
        Ok(stored)
    }

    /// Add `delta` to `key` (0 when absent), clamp, and persist.
    pub fn bump(&mut self, key: &str, delta: i64) -> StoreResult<u8> {
        let stored = self.scores.bump(key, delta);
        tracing::debug!(key, delta, stored, "adherence bumped");
        self.persist()?;
        Ok(stored)
    }

    /// Record that a recommended food for `disease` was chosen.
    pub fn record_food_choice(&mut self, disease: &str) -> StoreResult<u8> {
        self.bump(disease, self.click_step)
    }

    fn persist(&self) -> StoreResult<()> {
        save_json(self.store.as_ref(), FOOD_ADHERENCE_KEY, &self.scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn tracker() -> (Arc<MemoryStore>, AdherenceTracker) {
        let store = Arc::new(MemoryStore::new());
        let tracker = AdherenceTracker::load(store.clone());
        (store, tracker)
    }

    #[test]
    fn test_set_persists() {
        let (store, mut tracker) = tracker();
        assert_eq!(tracker.set("diabetes", 70).unwrap(), 70);

        let raw = store.get(FOOD_ADHERENCE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"diabetes":70}"#);
    }

    #[test]
    fn test_set_clamps() {
        let (_, mut tracker) = tracker();
        assert_eq!(tracker.set("diabetes", 140).unwrap(), 100);
        assert_eq!(tracker.set("diabetes", -1).unwrap(), 0);
    }

    #[test]
    fn test_food_choice_increments_by_five() {
        let (_, mut tracker) = tracker();
        assert_eq!(tracker.record_food_choice("hypertension").unwrap(), 5);
        assert_eq!(tracker.record_food_choice("hypertension").unwrap(), 10);

        tracker.set("hypertension", 97).unwrap();
        assert_eq!(tracker.record_food_choice("hypertension").unwrap(), 100);
        assert_eq!(tracker.band("hypertension"), AdherenceBand::High);
    }

    #[test]
    fn test_custom_click_step() {
        let store = Arc::new(MemoryStore::new());
        let mut tracker = AdherenceTracker::load(store).with_click_step(10);
        assert_eq!(tracker.record_food_choice("obesity").unwrap(), 10);
    }

    #[test]
    fn test_reload_reads_back() {
        let (store, mut tracker) = tracker();
        tracker.set("diabetes", 55).unwrap();
        tracker.set("cholesterol", 80).unwrap();

        let reloaded = AdherenceTracker::load(store);
        assert_eq!(reloaded.scores(), tracker.scores());
    }

    #[test]
    fn test_corrupt_data_fails_open() {
        let store = Arc::new(MemoryStore::new());
        store.set(FOOD_ADHERENCE_KEY, "[1, 2").unwrap();

        let mut tracker = AdherenceTracker::load(store.clone());
        assert!(tracker.scores().is_empty());

        // The next write replaces the corrupt value
        tracker.set("obesity", 30).unwrap();
        assert_eq!(store.get(FOOD_ADHERENCE_KEY).unwrap().unwrap(), r#"{"obesity":30}"#);
    }
}
