//! Medication reminder list.

use chrono::NaiveTime;

use crate::models::{Medicine, MedicineForm, MedicineId};

/// Today's medicines, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct MedicationSchedule {
    medicines: Vec<Medicine>,
}

impl MedicationSchedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule pre-populated with three sample medicines.
    pub fn with_sample_medicines() -> Self {
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or_default();
        let mut vitamin_d = Medicine::new("Vitamin D".into(), "1000IU".into(), at(12));
        vitamin_d.taken = true;

        Self {
            medicines: vec![
                Medicine::new("Aspirin".into(), "500mg".into(), at(8)),
                vitamin_d,
                Medicine::new("Multivitamin".into(), "1 tablet".into(), at(20)),
            ],
        }
    }

    /// Add a medicine from form input. Incomplete input is a no-op.
    pub fn add(&mut self, form: &MedicineForm) -> Option<MedicineId> {
        let Some(mut medicine) = form.to_medicine() else {
            tracing::debug!("medicine form incomplete; ignored");
            return None;
        };
        while self.contains(medicine.id) {
            medicine.id = MedicineId::new();
        }

        let id = medicine.id;
        tracing::info!(%id, name = %medicine.name, "medicine scheduled");
        self.medicines.push(medicine);
        Some(id)
    }

    /// Flip the `taken` flag. Returns the new state, or `None` if `id` is unknown.
    pub fn toggle_taken(&mut self, id: MedicineId) -> Option<bool> {
        let medicine = self.medicines.iter_mut().find(|m| m.id == id)?;
        medicine.taken = !medicine.taken;
        Some(medicine.taken)
    }

    /// Permanently remove a medicine. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: MedicineId) -> bool {
        let before = self.medicines.len();
        self.medicines.retain(|m| m.id != id);
        let removed = self.medicines.len() != before;
        if removed {
            tracing::info!(%id, "medicine removed");
        }
        removed
    }

    pub fn get(&self, id: MedicineId) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MedicineId) -> bool {
        self.get(id).is_some()
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// Medicines not yet taken today.
    pub fn pending(&self) -> impl Iterator<Item = &Medicine> {
        self.medicines.iter().filter(|m| !m.taken)
    }

    pub fn taken_count(&self) -> usize {
        self.medicines.iter().filter(|m| m.taken).count()
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut schedule = MedicationSchedule::new();
        let id = schedule
            .add(&MedicineForm::new("Metformin", "500mg", "09:30"))
            .unwrap();

        let medicine = schedule.get(id).unwrap();
        assert_eq!(medicine.name, "Metformin");
        assert_eq!(medicine.time_label(), "09:30");
        assert!(!medicine.taken);
    }

    #[test]
    fn test_incomplete_form_is_noop() {
        let mut schedule = MedicationSchedule::with_sample_medicines();
        assert!(schedule.add(&MedicineForm::new("Metformin", "", "09:30")).is_none());
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_toggle_taken() {
        let mut schedule = MedicationSchedule::with_sample_medicines();
        let id = schedule.medicines()[0].id;

        assert_eq!(schedule.toggle_taken(id), Some(true));
        assert_eq!(schedule.taken_count(), 2);
        assert_eq!(schedule.toggle_taken(id), Some(false));
        assert_eq!(schedule.taken_count(), 1);

        assert_eq!(schedule.toggle_taken(MedicineId::new()), None);
    }

    #[test]
    fn test_remove() {
        let mut schedule = MedicationSchedule::with_sample_medicines();
        let id = schedule.medicines()[1].id;

        assert!(schedule.remove(id));
        assert_eq!(schedule.len(), 2);
        assert!(!schedule.contains(id));

        // Deleting again is a no-op
        assert!(!schedule.remove(id));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_pending() {
        let schedule = MedicationSchedule::with_sample_medicines();
        let pending: Vec<_> = schedule.pending().map(|m| m.name.as_str()).collect();
        assert_eq!(pending, vec!["Aspirin", "Multivitamin"]);
    }
}
