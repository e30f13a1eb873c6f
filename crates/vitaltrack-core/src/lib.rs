//! VitalTrack Core Library
//!
//! Local-first health record and adherence tracking behind a client-only
//! health dashboard.
//!
//! # Architecture
//!
//! ```text
//!   Form submit / click / slider / timer tick
//!                     │
//!     ┌───────────────┼─────────────────────────┐
//!     ▼               ▼                         ▼
//! Record stores   Adherence tracker      Knowledge tables
//! (vitals, meds)  (food sliders, plan)   (diseases, contacts)
//!     │               │
//!     │               ▼
//!     │       ┌───────────────────┐
//!     │       │   KeyValueStore   │  medicalDetails, foodAdherence
//!     │       │ (memory / SQLite) │
//!     │       └───────────────────┘
//!     ▼
//!  in memory only
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (VitalsRecord, Medicine, MedicalProfile, etc.)
//! - [`store`]: Key-value persistence port with memory and SQLite backends
//! - [`records`]: Vitals log and medication schedule
//! - [`adherence`]: Adherence tracker and nutrition planner
//! - [`knowledge`]: Disease food guides and emergency contacts
//! - [`profile`]: Medical profile persistence
//! - [`wellness`]: Step/water counters and hydration reminder

pub mod adherence;
pub mod config;
pub mod knowledge;
pub mod logging;
pub mod models;
pub mod profile;
pub mod records;
pub mod store;
pub mod wellness;

// Re-export commonly used types
pub use adherence::{AdherenceTracker, NutritionPlanner};
pub use config::{ConfigError, TrackerConfig};
pub use knowledge::{match_conditions, DiseaseGuide};
pub use models::{
    AdherenceBand, AdherenceScore, MedicalProfile, Medicine, MedicineForm, MedicineId, Mood,
    Suggestion, SuggestionKind, VitalsForm, VitalsRecord,
};
pub use profile::ProfileStore;
pub use records::{MedicationSchedule, VitalsLog};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
pub use wellness::{HydrationReminder, WellnessDay};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

// =========================================================================
// Factory Functions
// =========================================================================

/// Open a tracker using the configured storage.
///
/// Installs the `tracing` subscriber with `config.log_level` as the default
/// filter unless one is already set.
pub fn open(config: TrackerConfig) -> TrackerResult<VitalTrack> {
    config.validate()?;
    logging::init(&config.log_level);
    let store: Arc<dyn KeyValueStore> = match &config.storage_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening SQLite store");
            Arc::new(SqliteStore::open(path)?)
        }
        None => Arc::new(MemoryStore::new()),
    };
    Ok(VitalTrack::with_store(store, config, Utc::now()))
}

/// Open a tracker from a JSON config file.
pub fn open_from_config_file(path: &str) -> TrackerResult<VitalTrack> {
    open(TrackerConfig::load(path)?)
}

/// Tracker with volatile storage (for testing).
pub fn open_in_memory() -> VitalTrack {
    VitalTrack::with_store(
        Arc::new(MemoryStore::new()),
        TrackerConfig::default(),
        Utc::now(),
    )
}

// =========================================================================
// Main API Object
// =========================================================================

/// All page-level state of one user session.
///
/// Each component owns its state; only the profile and adherence mapping
/// reach durable storage.
pub struct VitalTrack {
    config: TrackerConfig,
    profiles: ProfileStore,
    profile: MedicalProfile,
    vitals: VitalsLog,
    medications: MedicationSchedule,
    adherence: AdherenceTracker,
    planner: NutritionPlanner,
    wellness: WellnessDay,
    reminder: HydrationReminder,
}

impl VitalTrack {
    /// Build a session over `store`, loading persisted state once.
    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        config: TrackerConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let profiles = ProfileStore::new(store.clone());
        let profile = profiles.load_or_demo();
        let adherence =
            AdherenceTracker::load(store).with_click_step(config.adherence_click_step);
        let planner = NutritionPlanner::default()
            .with_completion_bonus(config.completion_bonus)
            .with_saved_baselines(&adherence);
        let wellness = WellnessDay::new(config.step_goal, config.water_goal).with_counts(8432, 6);
        let reminder =
            HydrationReminder::new(config.hydration_interval(), config.notification_ttl(), now);

        Self {
            config,
            profiles,
            profile,
            vitals: VitalsLog::with_sample_records(),
            medications: MedicationSchedule::with_sample_medicines(),
            adherence,
            planner,
            wellness,
            reminder,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    // =========================================================================
    // Medical Profile
    // =========================================================================

    pub fn profile(&self) -> &MedicalProfile {
        &self.profile
    }

    /// Replace and persist the medical profile.
    pub fn save_profile(&mut self, profile: MedicalProfile) -> TrackerResult<()> {
        self.profiles.save(&profile)?;
        self.profile = profile;
        Ok(())
    }

    /// Diseases matched from the saved profile's conditions.
    pub fn detected_diseases(&self) -> Vec<&'static DiseaseGuide> {
        self.profiles.detected_diseases()
    }

    // =========================================================================
    // Records
    // =========================================================================

    pub fn vitals(&self) -> &VitalsLog {
        &self.vitals
    }

    /// Log today's vitals. Incomplete input is ignored.
    pub fn add_vitals(&mut self, form: &VitalsForm) -> Option<&VitalsRecord> {
        self.vitals.add_today(form)
    }

    pub fn medications(&self) -> &MedicationSchedule {
        &self.medications
    }

    /// Schedule a medicine. Incomplete input is ignored.
    pub fn add_medicine(&mut self, form: &MedicineForm) -> Option<MedicineId> {
        self.medications.add(form)
    }

    pub fn toggle_medicine_taken(&mut self, id: MedicineId) -> Option<bool> {
        self.medications.toggle_taken(id)
    }

    pub fn remove_medicine(&mut self, id: MedicineId) -> bool {
        self.medications.remove(id)
    }

    // =========================================================================
    // Adherence
    // =========================================================================

    pub fn adherence(&self) -> &AdherenceTracker {
        &self.adherence
    }

    /// Slider update for a disease food plan.
    pub fn set_food_adherence(&mut self, disease: &str, value: i64) -> TrackerResult<u8> {
        Ok(self.adherence.set(disease, value)?)
    }

    /// Click on a recommended food for `disease`.
    pub fn record_food_choice(&mut self, disease: &str) -> TrackerResult<u8> {
        Ok(self.adherence.record_food_choice(disease)?)
    }

    pub fn planner(&self) -> &NutritionPlanner {
        &self.planner
    }

    pub fn toggle_suggestion(&mut self, id: &str) -> bool {
        self.planner.toggle_completion(id)
    }

    /// Persist today's plan completions and reset the daily counters.
    pub fn close_day(&mut self) -> TrackerResult<()> {
        self.planner.close_day(&mut self.adherence)?;
        self.wellness.reset();
        Ok(())
    }

    // =========================================================================
    // Wellness
    // =========================================================================

    pub fn wellness(&self) -> &WellnessDay {
        &self.wellness
    }

    pub fn wellness_mut(&mut self) -> &mut WellnessDay {
        &mut self.wellness
    }

    /// Timer tick. Returns the hydration message while it is visible.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<&'static str> {
        self.reminder.poll(now);
        self.reminder.message(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_seeds_demo_state() {
        let tracker = open_in_memory();
        assert_eq!(tracker.profile(), &MedicalProfile::demo());
        assert_eq!(tracker.vitals().len(), 3);
        assert_eq!(tracker.medications().len(), 3);
        assert!(tracker.adherence().scores().is_empty());
        assert_eq!(tracker.wellness().steps(), 8432);
        assert_eq!(tracker.wellness().water(), 6);
        // Demo profile is not saved, so nothing is detected yet
        assert!(tracker.detected_diseases().is_empty());
    }

    #[test]
    fn test_config_flows_into_components() {
        let config = TrackerConfig {
            adherence_click_step: 7,
            water_goal: 10,
            ..Default::default()
        };
        let mut tracker = VitalTrack::with_store(Arc::new(MemoryStore::new()), config, Utc::now());

        assert_eq!(tracker.record_food_choice("diabetes").unwrap(), 7);
        // Seeded with 6 glasses
        for _ in 0..4 {
            assert!(tracker.wellness_mut().add_water());
        }
        assert!(!tracker.wellness_mut().add_water());
    }

    #[test]
    fn test_seeded_water_capped_by_small_goal() {
        let config = TrackerConfig {
            water_goal: 2,
            ..Default::default()
        };
        let tracker = VitalTrack::with_store(Arc::new(MemoryStore::new()), config, Utc::now());
        assert_eq!(tracker.wellness().water(), 2);
        assert!(tracker.wellness().water_goal_reached());
    }

    #[test]
    fn test_open_installs_logging() {
        let config = TrackerConfig {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert!(open(config).is_ok());
        // The subscriber from `open` is already in place
        assert!(!logging::init("info"));
    }

    #[test]
    fn test_open_rejects_invalid_config() {
        let config = TrackerConfig {
            notification_ttl_secs: 9_000_000_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            open(config),
            Err(TrackerError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn test_tick_shows_reminder() {
        let start = Utc::now();
        let mut tracker =
            VitalTrack::with_store(Arc::new(MemoryStore::new()), TrackerConfig::default(), start);

        assert_eq!(tracker.tick(start + chrono::Duration::seconds(10)), None);
        assert!(tracker.tick(start + chrono::Duration::minutes(5)).is_some());
    }
}
