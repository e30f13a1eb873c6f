//! Medical profile model.

use serde::{Deserialize, Serialize};

/// The user's medical profile. A single instance per user, saved wholesale.
///
/// Fields are kept as entered; `age` stays textual so stored profiles read
/// back exactly as they were written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalProfile {
    pub name: String,
    pub age: String,
    pub gender: String,
    /// ABO/Rh group (e.g., "O+")
    pub blood_group: String,
    /// Free-text allergies
    pub allergies: String,
    /// Free-text current medications
    pub medications: String,
    /// Free-text chronic conditions, scanned by the disease matcher
    pub conditions: String,
}

impl MedicalProfile {
    /// Profile shown before anything has been saved.
    pub fn demo() -> Self {
        Self {
            name: "John Doe".into(),
            age: "28".into(),
            gender: "Male".into(),
            blood_group: "O+".into(),
            allergies: "Penicillin, Shellfish".into(),
            medications: "Vitamin D, Multivitamin".into(),
            conditions: "None".into(),
        }
    }

    /// Parsed age in years, if the field holds a number.
    pub fn age_years(&self) -> Option<u8> {
        self.age.trim().parse().ok()
    }

    /// Allergies split on commas, trimmed, empties dropped.
    pub fn allergy_list(&self) -> Vec<&str> {
        self.allergies
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile() {
        let profile = MedicalProfile::demo();
        assert_eq!(profile.age_years(), Some(28));
        assert_eq!(profile.allergy_list(), vec!["Penicillin", "Shellfish"]);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(MedicalProfile::demo()).unwrap();
        assert_eq!(json["bloodGroup"], "O+");
        assert!(json.get("blood_group").is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let profile: MedicalProfile =
            serde_json::from_str(r#"{"name":"Ana","conditions":"Diabetes"}"#).unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.conditions, "Diabetes");
        assert!(profile.blood_group.is_empty());
        assert_eq!(profile.age_years(), None);
    }
}
