//! Medical profile persistence.

use std::sync::Arc;

use crate::knowledge::{match_conditions, DiseaseGuide};
use crate::models::MedicalProfile;
use crate::store::{load_json, save_json, KeyValueStore, StoreResult, MEDICAL_DETAILS_KEY};

/// Reads and writes the singleton [`MedicalProfile`].
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved profile, or `None` if nothing valid is stored.
    pub fn load(&self) -> Option<MedicalProfile> {
        load_json(self.store.as_ref(), MEDICAL_DETAILS_KEY)
    }

    /// The saved profile, falling back to the demo profile.
    pub fn load_or_demo(&self) -> MedicalProfile {
        self.load().unwrap_or_else(MedicalProfile::demo)
    }

    /// Overwrite the stored profile.
    pub fn save(&self, profile: &MedicalProfile) -> StoreResult<()> {
        save_json(self.store.as_ref(), MEDICAL_DETAILS_KEY, profile)?;
        tracing::info!("medical profile saved");
        Ok(())
    }

    /// Diseases detected in the saved profile's conditions.
    ///
    /// Empty when no profile has been saved.
    pub fn detected_diseases(&self) -> Vec<&'static DiseaseGuide> {
        self.load()
            .map(|p| match_conditions(&p.conditions))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_save_and_load() {
        let profiles = ProfileStore::new(Arc::new(MemoryStore::new()));
        assert!(profiles.load().is_none());
        assert_eq!(profiles.load_or_demo(), MedicalProfile::demo());

        let mut profile = MedicalProfile::demo();
        profile.conditions = "Hypertension".into();
        profiles.save(&profile).unwrap();

        assert_eq!(profiles.load(), Some(profile));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let profiles = ProfileStore::new(Arc::new(MemoryStore::new()));
        profiles.save(&MedicalProfile::demo()).unwrap();

        let replacement = MedicalProfile {
            name: "Ana".into(),
            ..Default::default()
        };
        profiles.save(&replacement).unwrap();

        let loaded = profiles.load().unwrap();
        assert_eq!(loaded.name, "Ana");
        assert!(loaded.allergies.is_empty());
    }

    #[test]
    fn test_corrupt_profile_is_absent() {
        let store = Arc::new(MemoryStore::new());
        store.set(MEDICAL_DETAILS_KEY, "not json").unwrap();

        let profiles = ProfileStore::new(store);
        assert!(profiles.load().is_none());
        assert!(profiles.detected_diseases().is_empty());
    }

    #[test]
    fn test_detected_diseases() {
        let profiles = ProfileStore::new(Arc::new(MemoryStore::new()));
        assert!(profiles.detected_diseases().is_empty());

        let profile = MedicalProfile {
            conditions: "Obesity, high cholesterol".into(),
            ..MedicalProfile::demo()
        };
        profiles.save(&profile).unwrap();

        let names: Vec<_> = profiles.detected_diseases().iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["cholesterol", "obesity"]);
    }
}
