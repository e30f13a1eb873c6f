//! Nutrition-plan suggestion models.

use serde::{Deserialize, Serialize};

/// Category of a plan suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Meal,
    Exercise,
    Sleep,
}

/// A meal, exercise, or sleep suggestion with its baseline adherence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    /// Catalog id, also the adherence key
    pub id: String,
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    /// Duration (exercise and sleep)
    pub duration: Option<String>,
    /// Calorie estimate (meals)
    pub calories: Option<String>,
    /// Baseline adherence percentage
    pub adherence: u8,
    /// Observed results of following the suggestion
    pub results: Vec<String>,
}

impl Suggestion {
    fn new(id: &str, kind: SuggestionKind, title: &str, description: &str, adherence: u8) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: description.into(),
            duration: None,
            calories: None,
            adherence,
            results: Vec::new(),
        }
    }

    fn calories(mut self, calories: &str) -> Self {
        self.calories = Some(calories.into());
        self
    }

    fn duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.into());
        self
    }

    fn results(mut self, results: &[&str]) -> Self {
        self.results = results.iter().map(|r| r.to_string()).collect();
        self
    }
}

/// Built-in plan suggestions.
pub fn default_suggestions() -> Vec<Suggestion> {
    use SuggestionKind::*;

    vec![
        Suggestion::new(
            "1",
            Meal,
            "Balanced Breakfast",
            "Oatmeal with berries, almonds, and honey - Rich in fiber and antioxidants",
            85,
        )
        .calories("350 cal")
        .results(&["Improved energy", "Better digestion"]),
        Suggestion::new(
            "2",
            Meal,
            "Protein-Rich Lunch",
            "Grilled chicken with quinoa and steamed vegetables - High protein for muscle recovery",
            72,
        )
        .calories("520 cal")
        .results(&["Muscle recovery", "Sustained energy"]),
        Suggestion::new(
            "3",
            Meal,
            "Light Dinner",
            "Salmon with sweet potato and broccoli - Omega-3 rich for heart health",
            68,
        )
        .calories("480 cal")
        .results(&["Heart health", "Better sleep"]),
        Suggestion::new(
            "4",
            Exercise,
            "Morning Cardio",
            "30-minute brisk walk or light jog - Improves cardiovascular health",
            78,
        )
        .duration("30 min")
        .results(&["Increased stamina", "Better mood"]),
        Suggestion::new(
            "5",
            Exercise,
            "Strength Training",
            "Upper body workout - 3 sets of 10 reps each exercise",
            65,
        )
        .duration("45 min")
        .results(&["Muscle building", "Increased metabolism"]),
        Suggestion::new(
            "6",
            Exercise,
            "Evening Yoga",
            "Gentle yoga and stretching - Improves flexibility and reduces stress",
            82,
        )
        .duration("20 min")
        .results(&["Stress relief", "Better flexibility"]),
        Suggestion::new(
            "7",
            Sleep,
            "Sleep Optimization",
            "Maintain consistent sleep schedule (10 PM - 6 AM) - 8 hours recommended",
            75,
        )
        .duration("8 hours")
        .results(&["Better recovery", "Improved focus"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = default_suggestions();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.iter().filter(|s| s.kind == SuggestionKind::Meal).count(), 3);
        assert_eq!(catalog.iter().filter(|s| s.kind == SuggestionKind::Exercise).count(), 3);
        assert_eq!(catalog.iter().filter(|s| s.kind == SuggestionKind::Sleep).count(), 1);

        let ids: std::collections::HashSet<_> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.iter().all(|s| s.adherence <= 100));
    }

    #[test]
    fn test_meals_carry_calories() {
        for s in default_suggestions() {
            match s.kind {
                SuggestionKind::Meal => assert!(s.calories.is_some() && s.duration.is_none()),
                _ => assert!(s.duration.is_some() && s.calories.is_none()),
            }
        }
    }
}
