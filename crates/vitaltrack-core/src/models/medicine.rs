//! Medication reminder models.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a scheduled medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicineId(Uuid);

impl MedicineId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MedicineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MedicineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A medicine on today's reminder list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub id: MedicineId,
    /// Medicine name (e.g., "Aspirin")
    pub name: String,
    /// Free-text dose (e.g., "500mg", "1 tablet")
    pub dose: String,
    /// Scheduled time of day
    pub time: NaiveTime,
    /// Whether today's dose has been taken
    pub taken: bool,
}

impl Medicine {
    /// Create a new, not-yet-taken medicine with a fresh id.
    pub fn new(name: String, dose: String, time: NaiveTime) -> Self {
        Self {
            id: MedicineId::new(),
            name,
            dose,
            time,
            taken: false,
        }
    }

    /// Time in `HH:MM` form.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Raw text fields as submitted by the add-medicine form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicineForm {
    pub name: String,
    pub dose: String,
    /// `HH:MM`, as produced by a time input
    pub time: String,
}

impl MedicineForm {
    pub fn new(name: &str, dose: &str, time: &str) -> Self {
        Self {
            name: name.into(),
            dose: dose.into(),
            time: time.into(),
        }
    }

    /// Build a medicine, or `None` if a field is missing or the time is invalid.
    pub fn to_medicine(&self) -> Option<Medicine> {
        let name = self.name.trim();
        let dose = self.dose.trim();
        if name.is_empty() || dose.is_empty() {
            return None;
        }
        let time = parse_time(&self.time)?;
        Some(Medicine::new(name.to_string(), dose.to_string(), time))
    }
}

/// Parse `HH:MM` (or `HH:MM:SS`).
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_medicine() {
        let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let medicine = Medicine::new("Aspirin".into(), "500mg".into(), time);
        assert!(!medicine.taken);
        assert_eq!(medicine.time_label(), "08:00");
        assert_eq!(medicine.id.to_string().len(), 36); // UUID format
    }

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(MedicineId::new(), MedicineId::new());
    }

    #[test]
    fn test_form_validation() {
        assert!(MedicineForm::new("Aspirin", "500mg", "08:00").to_medicine().is_some());
        assert!(MedicineForm::new("", "500mg", "08:00").to_medicine().is_none());
        assert!(MedicineForm::new("Aspirin", " ", "08:00").to_medicine().is_none());
        assert!(MedicineForm::new("Aspirin", "500mg", "").to_medicine().is_none());
        assert!(MedicineForm::new("Aspirin", "500mg", "25:00").to_medicine().is_none());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = MedicineId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
