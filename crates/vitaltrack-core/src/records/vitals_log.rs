//! Append-only vitals history.

use chrono::{NaiveDate, Utc};

use crate::models::{BloodPressure, ChartPoint, Mood, VitalsForm, VitalsRecord};

/// Ordered, append-only sequence of vitals records.
#[derive(Debug, Clone, Default)]
pub struct VitalsLog {
    records: Vec<VitalsRecord>,
}

impl VitalsLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log pre-populated with three sample days.
    pub fn with_sample_records() -> Self {
        let sample = |day: u32, bp: (u16, u16), sugar: u16, hr: u16, sleep: f32, mood: Mood| {
            VitalsRecord {
                date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default(),
                blood_pressure: BloodPressure::new(bp.0, bp.1),
                blood_sugar: sugar,
                heart_rate: hr,
                sleep_hours: sleep,
                mood,
            }
        };

        Self {
            records: vec![
                sample(20, (120, 80), 95, 72, 7.5, Mood::Good),
                sample(21, (118, 78), 92, 70, 8.0, Mood::Great),
                sample(22, (122, 82), 98, 75, 7.0, Mood::Good),
            ],
        }
    }

    /// Append a record dated `date` if the form is complete and parses.
    ///
    /// Invalid submissions are a no-op.
    pub fn add(&mut self, form: &VitalsForm, date: NaiveDate) -> Option<&VitalsRecord> {
        let Some(record) = form.to_record(date) else {
            tracing::debug!("vitals form incomplete; ignored");
            return None;
        };
        tracing::info!(%date, "vitals record added");
        self.records.push(record);
        self.records.last()
    }

    /// Append a record dated today (UTC).
    pub fn add_today(&mut self, form: &VitalsForm) -> Option<&VitalsRecord> {
        self.add(form, Utc::now().date_naive())
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[VitalsRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&VitalsRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Heart rate / sugar trend, one point per record.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.records.iter().map(VitalsRecord::chart_point).collect()
    }

    /// Mean sleep over all records.
    pub fn average_sleep_hours(&self) -> Option<f32> {
        if self.records.is_empty() {
            return None;
        }
        let total: f32 = self.records.iter().map(|r| r.sleep_hours).sum();
        Some(total / self.records.len() as f32)
    }
}
