//! Vitals observation models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported mood attached to a vitals entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    Great,
    #[default]
    Good,
    Okay,
    Poor,
}

impl Mood {
    /// Parse a mood label (case-insensitive).
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "great" => Some(Mood::Great),
            "good" => Some(Mood::Good),
            "okay" | "ok" => Some(Mood::Okay),
            "poor" => Some(Mood::Poor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Poor => "Poor",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blood pressure reading in mmHg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BloodPressure {
    /// Systolic pressure (the higher number)
    pub systolic: u16,
    /// Diastolic pressure (the lower number)
    pub diastolic: u16,
}

impl BloodPressure {
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }

    /// Parse the `"120/80"` form used by the vitals entry form.
    pub fn parse(text: &str) -> Option<Self> {
        let (systolic, diastolic) = text.trim().split_once('/')?;
        Some(Self {
            systolic: systolic.trim().parse().ok()?,
            diastolic: diastolic.trim().parse().ok()?,
        })
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// A single dated vitals observation. Immutable once logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalsRecord {
    /// Calendar date of the observation
    pub date: NaiveDate,
    pub blood_pressure: BloodPressure,
    /// Blood sugar in mg/dL
    pub blood_sugar: u16,
    /// Heart rate in beats per minute
    pub heart_rate: u16,
    pub sleep_hours: f32,
    pub mood: Mood,
}

impl VitalsRecord {
    /// Trend point for the heart rate / sugar chart.
    pub fn chart_point(&self) -> ChartPoint {
        ChartPoint {
            label: self.date.format("%m-%d").to_string(),
            heart_rate: self.heart_rate,
            blood_sugar: self.blood_sugar,
        }
    }
}

/// Raw text fields as submitted by the vitals form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VitalsForm {
    pub blood_pressure: String,
    pub blood_sugar: String,
    pub heart_rate: String,
    pub sleep_hours: String,
    pub mood: Mood,
}

impl VitalsForm {
    /// True when every required field has content.
    pub fn is_complete(&self) -> bool {
        [
            &self.blood_pressure,
            &self.blood_sugar,
            &self.heart_rate,
            &self.sleep_hours,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Build a record dated `date`, or `None` if a field is missing or unparsable.
    pub fn to_record(&self, date: NaiveDate) -> Option<VitalsRecord> {
        if !self.is_complete() {
            return None;
        }
        let sleep_hours: f32 = self.sleep_hours.trim().parse().ok()?;
        if !sleep_hours.is_finite() || sleep_hours < 0.0 {
            return None;
        }
        Some(VitalsRecord {
            date,
            blood_pressure: BloodPressure::parse(&self.blood_pressure)?,
            blood_sugar: self.blood_sugar.trim().parse().ok()?,
            heart_rate: self.heart_rate.trim().parse().ok()?,
            sleep_hours,
            mood: self.mood,
        })
    }
}

/// Heart rate and sugar values keyed by a short `MM-DD` label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub heart_rate: u16,
    pub blood_sugar: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> VitalsForm {
        VitalsForm {
            blood_pressure: "120/80".into(),
            blood_sugar: "95".into(),
            heart_rate: "72".into(),
            sleep_hours: "7.5".into(),
            mood: Mood::Good,
        }
    }

    #[test]
    fn test_blood_pressure_parse() {
        assert_eq!(BloodPressure::parse("120/80"), Some(BloodPressure::new(120, 80)));
        assert_eq!(BloodPressure::parse(" 118 / 78 "), Some(BloodPressure::new(118, 78)));
        assert_eq!(BloodPressure::parse("120"), None);
        assert_eq!(BloodPressure::parse("abc/80"), None);
        assert_eq!(BloodPressure::new(122, 82).to_string(), "122/82");
    }

    #[test]
    fn test_mood_parse() {
        assert_eq!(Mood::parse("great"), Some(Mood::Great));
        assert_eq!(Mood::parse("Poor"), Some(Mood::Poor));
        assert_eq!(Mood::parse("ecstatic"), None);
        assert_eq!(Mood::default(), Mood::Good);
    }

    #[test]
    fn test_form_to_record() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let record = form().to_record(date).unwrap();
        assert_eq!(record.blood_pressure, BloodPressure::new(120, 80));
        assert_eq!(record.blood_sugar, 95);
        assert_eq!(record.heart_rate, 72);
        assert_eq!(record.sleep_hours, 7.5);
        assert_eq!(record.chart_point().label, "01-20");
    }

    #[test]
    fn test_incomplete_form_is_rejected() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let mut incomplete = form();
        incomplete.heart_rate = "  ".into();
        assert!(!incomplete.is_complete());
        assert!(incomplete.to_record(date).is_none());

        let mut garbled = form();
        garbled.sleep_hours = "lots".into();
        assert!(garbled.is_complete());
        assert!(garbled.to_record(date).is_none());
    }
}
