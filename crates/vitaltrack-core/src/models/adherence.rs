//! Adherence percentages.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Lowest adherence percentage.
pub const MIN_ADHERENCE: u8 = 0;
/// Highest adherence percentage.
pub const MAX_ADHERENCE: u8 = 100;

/// Clamp an arbitrary value into `[0, 100]`.
pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(MIN_ADHERENCE as i64, MAX_ADHERENCE as i64) as u8
}

/// Adherence percentage per key (disease name or suggestion id).
///
/// Every stored value lies in `[0, 100]`; values outside that range are
/// clamped on write and on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdherenceScore(BTreeMap<String, u8>);

impl AdherenceScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored percentage for `key`, if any.
    pub fn get(&self, key: &str) -> Option<u8> {
        self.0.get(key).copied()
    }

    /// Stored percentage for `key`, 0 when absent.
    pub fn value(&self, key: &str) -> u8 {
        self.get(key).unwrap_or(MIN_ADHERENCE)
    }

    /// Overwrite `key` with the clamped value. Returns the stored value.
    pub fn set(&mut self, key: &str, value: i64) -> u8 {
        let clamped = clamp_percent(value);
        self.0.insert(key.to_string(), clamped);
        clamped
    }

    /// Add `delta` to the current value (0 when absent), clamped.
    pub fn bump(&mut self, key: &str, delta: i64) -> u8 {
        let current = self.value(key) as i64;
        self.set(key, current.saturating_add(delta))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, u8)> for AdherenceScore {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k, v.min(MAX_ADHERENCE)))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for AdherenceScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, i64>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(k, v)| (k, clamp_percent(v)))
                .collect(),
        ))
    }
}

/// Coarse adherence level used to color progress indicators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdherenceBand {
    /// 80% and above
    High,
    /// 60% to 79%
    Moderate,
    /// Below 60%
    Low,
}

impl AdherenceBand {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 80 {
            AdherenceBand::High
        } else if percent >= 60 {
            AdherenceBand::Moderate
        } else {
            AdherenceBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps() {
        let mut scores = AdherenceScore::new();
        assert_eq!(scores.set("diabetes", 150), 100);
        assert_eq!(scores.set("obesity", -20), 0);
        assert_eq!(scores.set("hypertension", 42), 42);
        assert_eq!(scores.get("diabetes"), Some(100));
    }

    #[test]
    fn test_bump_defaults_to_zero() {
        let mut scores = AdherenceScore::new();
        assert_eq!(scores.bump("cholesterol", 5), 5);
        assert_eq!(scores.bump("cholesterol", 5), 10);
        scores.set("cholesterol", 98);
        assert_eq!(scores.bump("cholesterol", 5), 100);
        assert_eq!(scores.bump("cholesterol", i64::MIN), 0);
    }

    #[test]
    fn test_deserialize_clamps_out_of_range() {
        let scores: AdherenceScore =
            serde_json::from_str(r#"{"diabetes": 250, "obesity": -3, "hypertension": 70}"#)
                .unwrap();
        assert_eq!(scores.value("diabetes"), 100);
        assert_eq!(scores.value("obesity"), 0);
        assert_eq!(scores.value("hypertension"), 70);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut scores = AdherenceScore::new();
        scores.set("diabetes", 65);
        assert_eq!(serde_json::to_string(&scores).unwrap(), r#"{"diabetes":65}"#);
    }

    #[test]
    fn test_bands() {
        assert_eq!(AdherenceBand::from_percent(100), AdherenceBand::High);
        assert_eq!(AdherenceBand::from_percent(80), AdherenceBand::High);
        assert_eq!(AdherenceBand::from_percent(79), AdherenceBand::Moderate);
        assert_eq!(AdherenceBand::from_percent(60), AdherenceBand::Moderate);
        assert_eq!(AdherenceBand::from_percent(59), AdherenceBand::Low);
    }
}
