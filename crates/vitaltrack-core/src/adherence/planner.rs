//! Daily nutrition plan with completion tracking.

use std::collections::BTreeSet;

use super::AdherenceTracker;
use crate::models::{clamp_percent, default_suggestions, Suggestion, SuggestionKind};
use crate::store::StoreResult;

/// Percentage added to a suggestion's adherence when completed today.
pub const DEFAULT_COMPLETION_BONUS: u8 = 2;

/// A suggestion together with today's adapted adherence.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSuggestion<'a> {
    pub suggestion: &'a Suggestion,
    pub completed: bool,
    pub adherence: u8,
}

/// Meal, exercise, and sleep suggestions and the ones completed today.
#[derive(Debug, Clone)]
pub struct NutritionPlanner {
    suggestions: Vec<Suggestion>,
    completed_today: BTreeSet<String>,
    completion_bonus: u8,
}

impl Default for NutritionPlanner {
    fn default() -> Self {
        Self::new(default_suggestions())
    }
}

impl NutritionPlanner {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self {
            suggestions,
            completed_today: BTreeSet::new(),
            completion_bonus: DEFAULT_COMPLETION_BONUS,
        }
    }

    pub fn with_completion_bonus(mut self, bonus: u8) -> Self {
        self.completion_bonus = bonus;
        self
    }

    /// Replace baselines with values previously saved in `tracker`.
    pub fn with_saved_baselines(mut self, tracker: &AdherenceTracker) -> Self {
        for suggestion in &mut self.suggestions {
            if let Some(saved) = tracker.scores().get(&suggestion.id) {
                suggestion.adherence = saved;
            }
        }
        self
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn get(&self, id: &str) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.id == id)
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_today.contains(id)
    }

    /// Mark or unmark a suggestion as done today.
    ///
    /// Returns the new completion state; unknown ids are ignored and report `false`.
    pub fn toggle_completion(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            tracing::debug!(id, "unknown suggestion; ignored");
            return false;
        }
        if self.completed_today.remove(id) {
            false
        } else {
            self.completed_today.insert(id.to_string());
            true
        }
    }

    /// Adherence after today's completion bonus, capped at 100.
    pub fn adapted_adherence(&self, suggestion: &Suggestion) -> u8 {
        if self.is_completed(&suggestion.id) {
            clamp_percent(suggestion.adherence as i64 + self.completion_bonus as i64)
        } else {
            suggestion.adherence
        }
    }

    /// Every suggestion with today's adapted adherence, in catalog order.
    pub fn planned(&self) -> Vec<PlannedSuggestion<'_>> {
        self.suggestions
            .iter()
            .map(|s| PlannedSuggestion {
                suggestion: s,
                completed: self.is_completed(&s.id),
                adherence: self.adapted_adherence(s),
            })
            .collect()
    }

    pub fn planned_by_kind(&self, kind: SuggestionKind) -> Vec<PlannedSuggestion<'_>> {
        self.planned()
            .into_iter()
            .filter(|p| p.suggestion.kind == kind)
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_today.len()
    }

    /// Share of suggestions completed today, rounded percent.
    pub fn completion_rate(&self) -> u8 {
        if self.suggestions.is_empty() {
            return 0;
        }
        let rate = self.completed_count() as f64 / self.suggestions.len() as f64 * 100.0;
        clamp_percent(rate.round() as i64)
    }

    /// Mean adapted adherence, rounded.
    pub fn average_adherence(&self) -> u8 {
        if self.suggestions.is_empty() {
            return 0;
        }
        let total: u32 = self
            .suggestions
            .iter()
            .map(|s| self.adapted_adherence(s) as u32)
            .sum();
        let mean = total as f64 / self.suggestions.len() as f64;
        clamp_percent(mean.round() as i64)
    }

    /// Fold today's completions into the baselines and start a new day.
    ///
    /// Completed suggestions have their adapted adherence saved to `tracker`
    /// under the suggestion id. Baselines and completions change only once
    /// every write has succeeded, so a failed close can be retried.
    pub fn close_day(&mut self, tracker: &mut AdherenceTracker) -> StoreResult<()> {
        let adapted: Vec<(usize, u8)> = self
            .suggestions
            .iter()
            .enumerate()
            .filter(|(_, s)| self.completed_today.contains(&s.id))
            .map(|(i, s)| (i, self.adapted_adherence(s)))
            .collect();

        let mut saved = Vec::with_capacity(adapted.len());
        for (i, value) in adapted {
            saved.push((i, tracker.set(&self.suggestions[i].id, value as i64)?));
        }

        for (i, value) in saved {
            self.suggestions[i].adherence = value;
        }
        let completed = std::mem::take(&mut self.completed_today);
        tracing::info!(completed = completed.len(), "plan day closed");
        Ok(())
    }
}
